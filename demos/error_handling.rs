//! Demonstrate error handling for invalid Pineapple input.

fn report(input: &str) {
    match pineapple::parse(input) {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(pineapple::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Line: {}", e.line);
        }
        Err(pineapple::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Line: {}", e.line);
        }
    }
}

fn main() {
    // Character that cannot start a token
    report("$a = \"x\"\nprint(#a)\n");
    println!();

    // Missing closing paren
    report("print($a\n");
    println!();

    // Unknown statement
    report("echo($a)\n");
    println!();

    // Nothing but whitespace
    report("\n\t\n");
}
