//! Parse a Pineapple program and print it back in canonical form.

fn main() {
    let input = "$greeting=\"hello world\"\r\n\r\n  print ( $greeting )\n";

    let program = pineapple::parse(input).expect("valid program");
    for statement in &program.statements {
        println!("line {}: {statement}", statement.line());
    }

    println!();
    print!("{}", pineapple::format(&program));
}
