//! CLI tool to validate, format, and inspect Pineapple source files.

use std::fs;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "pineapple", version, about = "Pineapple source checker and formatter")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log parser activity to stderr (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Check if source file(s) parse.
    Validate {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Format source file(s) and print to stdout.
    Fmt {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Check if source file(s) are already formatted.
    Check {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Print the raw token stream of a source file.
    Tokens { file: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    type Run = fn(&str, &str) -> bool;
    let (files, run): (&[String], Run) = match &cli.command {
        Command::Validate { files } => (files.as_slice(), validate as Run),
        Command::Fmt { files } => (files.as_slice(), fmt as Run),
        Command::Check { files } => (files.as_slice(), check as Run),
        Command::Tokens { file } => (std::slice::from_ref(file), dump_tokens as Run),
    };

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };
        if !run(path, &content) {
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn validate(path: &str, content: &str) -> bool {
    match pineapple::parse(content) {
        Ok(program) => {
            let total = program.statements.len();
            let prints = program
                .statements
                .iter()
                .filter(|s| matches!(s, pineapple::Statement::Print(_)))
                .count();
            let assignments = total - prints;
            eprintln!(
                "{path}: valid ({total} statement(s), \
                 {assignments} assignment(s), {prints} print(s))"
            );
            true
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            false
        }
    }
}

fn fmt(path: &str, content: &str) -> bool {
    match pineapple::parse(content) {
        Ok(program) => {
            print!("{}", pineapple::format(&program));
            true
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            false
        }
    }
}

fn check(path: &str, content: &str) -> bool {
    match pineapple::parse(content) {
        Ok(program) => {
            if pineapple::format(&program) == content {
                eprintln!("{path}: formatted");
                true
            } else {
                eprintln!("{path}: not formatted");
                false
            }
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            false
        }
    }
}

fn dump_tokens(path: &str, content: &str) -> bool {
    for token in pineapple::tokens(content) {
        match token {
            Ok(t) => println!("{}\t{}\t{:?}", t.line, t.kind, t.text),
            Err(e) => {
                eprintln!("{path}: {e}");
                return false;
            }
        }
    }
    true
}
