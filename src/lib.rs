//! Pineapple lexer, parser, formatter, and builder.
//!
//! Pineapple is a tiny scripting language with two statements:
//! assigning a string literal to a variable and printing a variable.
//! This crate turns source text into a typed AST, builds ASTs
//! programmatically, and formats them back to canonical source.
//! Running the program is left to whoever consumes the AST.
//!
//! # Quick start
//!
//! ## Parse and re-format a program
//!
//! ```
//! use pineapple::{parse, format};
//!
//! let input = "$a = \"hello\"\nprint($a)\n";
//! let program = parse(input).unwrap();
//! assert_eq!(program.statements.len(), 2);
//! assert_eq!(format(&program), input);
//! ```
//!
//! ## Build a program
//!
//! ```
//! use pineapple::{SourceCode, format};
//!
//! let program = SourceCode::new().assign("name", "world").print("name");
//! assert_eq!(format(&program), "$name = \"world\"\nprint($name)\n");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Assignment, Print, SourceCode, Statement, Variable};
pub use formatter::format;
pub use lexer::{LexError, LexErrorKind, Lexer, Tokens, tokens};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use token::{Token, TokenKind};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Parse(e) => e.line,
        }
    }
}
