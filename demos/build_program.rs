//! Build a Pineapple program with the builder API and format it.

use pineapple::SourceCode;

fn main() {
    let program = SourceCode::new()
        .assign("name", "Pineapple")
        .assign("motto", "two statements\nare plenty")
        .print("name")
        .print("motto");

    print!("{}", pineapple::format(&program));

    let reparsed = pineapple::parse(&pineapple::format(&program)).expect("valid program");
    assert_eq!(reparsed, program);
}
