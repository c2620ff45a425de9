//! AST accessors, conversions, and Display impls.

use pineapple::{Assignment, Print, Statement, Variable};

// -----------------------------------------------------------
// Display impls.
// -----------------------------------------------------------

#[test]
fn display_variable() {
    assert_eq!(Variable::new(1, "abc").to_string(), "$abc");
}

#[test]
fn display_assignment() {
    let s = Statement::Assignment(Assignment::new(1, "a", "hi there"));
    assert_eq!(s.to_string(), "$a = \"hi there\"");
}

#[test]
fn display_empty_assignment() {
    let s = Statement::Assignment(Assignment::new(1, "a", ""));
    assert_eq!(s.to_string(), "$a = \"\"");
}

#[test]
fn display_print() {
    let s = Statement::Print(Print::new(1, "a"));
    assert_eq!(s.to_string(), "print($a)");
}

// -----------------------------------------------------------
// Accessors and conversions.
// -----------------------------------------------------------

#[test]
fn statement_line_and_variable() {
    let a: Statement = Assignment::new(4, "x", "v").into();
    let p: Statement = Print::new(9, "y").into();
    assert_eq!(a.line(), 4);
    assert_eq!(p.line(), 9);
    assert_eq!(a.variable().name, "x");
    assert_eq!(p.variable().name, "y");
}

#[test]
fn from_impls_pick_matching_variant() {
    assert!(matches!(
        Statement::from(Assignment::new(1, "a", "")),
        Statement::Assignment(_)
    ));
    assert!(matches!(
        Statement::from(Print::new(1, "a")),
        Statement::Print(_)
    ));
}
