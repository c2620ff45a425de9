#![allow(dead_code)]

use pineapple::{SourceCode, Statement, format, parse};

pub fn roundtrip(input: &str) {
    let program = parse(input).expect("parse failed");
    let output = format(&program);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format an AST, parse it back, assert structural equality.
pub fn assert_ast_roundtrip(original: &SourceCode) {
    let formatted = format(original);
    let parsed = parse(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });

    assert_eq!(
        original, &parsed,
        "AST mismatch\n--- formatted ---\n{formatted}"
    );
}

/// Names of the variables touched by each statement, in order.
pub fn variable_names(program: &SourceCode) -> Vec<&str> {
    program
        .statements
        .iter()
        .map(|s| s.variable().name.as_str())
        .collect()
}

/// Unwrap an assignment's value or fail the test.
pub fn assigned_value(statement: &Statement) -> &str {
    match statement {
        Statement::Assignment(a) => &a.value,
        Statement::Print(_) => panic!("expected assignment, got print"),
    }
}
