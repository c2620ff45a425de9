//! Round-trip tests: parse then format should produce the same output.

mod common;

use common::roundtrip;
use pineapple::{format, parse};

// -----------------------------------------------------------
// Canonical input survives unchanged.
// -----------------------------------------------------------

#[test]
fn roundtrip_single_assignment() {
    roundtrip("$a = \"hello\"\n");
}

#[test]
fn roundtrip_single_print() {
    roundtrip("print($a)\n");
}

#[test]
fn roundtrip_empty_value() {
    roundtrip("$e = \"\"\n");
}

#[test]
fn roundtrip_mixed_program() {
    roundtrip("$a = \"1\"\n$b = \"two words\"\nprint($a)\nprint($b)\n");
}

#[test]
fn roundtrip_value_with_symbols() {
    roundtrip("$s = \"print($x) = $y ()\"\n");
}

#[test]
fn roundtrip_value_with_newline() {
    roundtrip("$s = \"a\nb\"\nprint($s)\n");
}

// -----------------------------------------------------------
// Non-canonical input normalises.
// -----------------------------------------------------------

fn normalises(input: &str, expected: &str) {
    let program = parse(input).expect("parse failed");
    assert_eq!(format(&program), expected);
}

#[test]
fn normalise_spacing_around_equal() {
    normalises("$a=\"x\"", "$a = \"x\"\n");
    normalises("$a  \t=   \"x\"", "$a = \"x\"\n");
}

#[test]
fn normalise_print_padding() {
    normalises("print ( $a )", "print($a)\n");
}

#[test]
fn normalise_blank_lines_and_crlf() {
    normalises("\r\n$a = \"x\"\r\n\r\nprint($a)\r\n", "$a = \"x\"\nprint($a)\n");
}

#[test]
fn normalise_statements_sharing_a_line() {
    normalises("$a = \"x\" print($a)", "$a = \"x\"\nprint($a)\n");
}

#[test]
fn normalised_output_is_stable() {
    let once = format(&parse("  print ( $a )  $b=\"\"").unwrap());
    let twice = format(&parse(&once).unwrap());
    assert_eq!(once, twice);
}
