//! Formatter-specific tests.

use pineapple::{Assignment, Print, SourceCode, Statement, format};

#[test]
fn format_empty_program_is_empty() {
    assert_eq!(format(&SourceCode::new()), "");
}

#[test]
fn format_trailing_newline() {
    let output = format(&SourceCode::new().print("a"));
    assert!(output.ends_with('\n'));
}

#[test]
fn format_one_statement_per_line() {
    let program = SourceCode::new().assign("a", "x").print("a").print("a");
    assert_eq!(format(&program).lines().count(), 3);
}

#[test]
fn format_assignment_spacing() {
    let program = SourceCode::new().assign("name", "value");
    assert_eq!(format(&program), "$name = \"value\"\n");
}

#[test]
fn format_print_has_no_padding() {
    let program = SourceCode::new().print("name");
    assert_eq!(format(&program), "print($name)\n");
}

#[test]
fn format_ignores_line_numbers() {
    let program = SourceCode {
        line: 1,
        statements: vec![
            Statement::Print(Print::new(40, "b")),
            Statement::Assignment(Assignment::new(7, "a", "")),
        ],
    };
    assert_eq!(format(&program), "print($b)\n$a = \"\"\n");
}

#[test]
fn format_value_verbatim() {
    let program = SourceCode::new().assign("v", " \t$x\\n ");
    assert_eq!(format(&program), "$v = \" \t$x\\n \"\n");
}
