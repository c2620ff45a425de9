use std::fmt;

use tracing::debug;

use crate::Error;
use crate::ast::{Assignment, Print, SourceCode, Statement, Variable};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token was not the next one.
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// Expected `""` or `"..."`.
    ExpectedString { found: TokenKind },
    /// Statement starts with neither `print` nor `$`.
    UnknownStatement { found: String },
    /// No statement before end of input.
    EmptyProgram,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "syntax error, expected '{expected}' but got '{found}'")
            }
            Self::ExpectedString { found } => {
                write!(f, "expected a string literal, got '{found}'")
            }
            Self::UnknownStatement { found } => {
                write!(f, "unknown statement near '{found}'")
            }
            Self::EmptyProgram => {
                write!(f, "empty program, expected at least one statement")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
}

/// Parse Pineapple source text into a `SourceCode` AST.
///
/// # Errors
///
/// Returns [`Error::Lex`] on characters that cannot start a token or
/// an unterminated string, and [`Error::Parse`] on syntax errors,
/// unknown statements, or a program with no statements.
pub fn parse(input: &str) -> Result<SourceCode, Error> {
    Parser::new(input).parse()
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    // SourceCode ::= Statement+
    fn parse(mut self) -> Result<SourceCode, Error> {
        let line = self.lexer.line_num();
        let mut statements = Vec::new();

        loop {
            self.lexer.look_ahead_and_skip(TokenKind::Ignored)?;
            if self.lexer.look_ahead()? == TokenKind::Eof {
                break;
            }
            statements.push(self.parse_statement()?);
        }

        if statements.is_empty() {
            return Err(ParseError {
                kind: ParseErrorKind::EmptyProgram,
                line: self.lexer.line_num(),
            }
            .into());
        }

        debug!(count = statements.len(), "parsed source code");
        Ok(SourceCode { line, statements })
    }

    // Statement ::= Print | Assignment
    fn parse_statement(&mut self) -> Result<Statement, Error> {
        self.lexer.look_ahead_and_skip(TokenKind::Ignored)?;

        let statement = match self.lexer.look_ahead()? {
            TokenKind::Print => Statement::Print(self.parse_print()?),
            TokenKind::VarPrefix => Statement::Assignment(self.parse_assignment()?),
            _ => {
                let token = self.lexer.next_token()?;
                return Err(ParseError {
                    kind: ParseErrorKind::UnknownStatement { found: token.text },
                    line: token.line,
                }
                .into());
            }
        };

        debug!(line = statement.line(), %statement, "parsed statement");
        Ok(statement)
    }

    // Print ::= "print" "(" Ignored Variable Ignored ")" Ignored
    fn parse_print(&mut self) -> Result<Print, Error> {
        let keyword = self.next_token_is(TokenKind::Print)?;
        self.lexer.look_ahead_and_skip(TokenKind::Ignored)?;
        self.next_token_is(TokenKind::LeftParen)?;
        self.lexer.look_ahead_and_skip(TokenKind::Ignored)?;
        let variable = self.parse_variable()?;
        self.next_token_is(TokenKind::RightParen)?;
        self.lexer.look_ahead_and_skip(TokenKind::Ignored)?;

        Ok(Print {
            line: keyword.line,
            variable,
        })
    }

    // Assignment ::= Variable Ignored "=" Ignored String Ignored
    fn parse_assignment(&mut self) -> Result<Assignment, Error> {
        let variable = self.parse_variable()?;
        self.next_token_is(TokenKind::Equal)?;
        self.lexer.look_ahead_and_skip(TokenKind::Ignored)?;
        let value = self.parse_string()?;
        self.lexer.look_ahead_and_skip(TokenKind::Ignored)?;

        Ok(Assignment {
            line: variable.line,
            variable,
            value,
        })
    }

    // Variable ::= "$" Name Ignored
    fn parse_variable(&mut self) -> Result<Variable, Error> {
        let prefix = self.next_token_is(TokenKind::VarPrefix)?;
        let name = self.next_token_is(TokenKind::Name)?;
        self.lexer.look_ahead_and_skip(TokenKind::Ignored)?;

        Ok(Variable {
            line: prefix.line,
            name: name.text,
        })
    }

    fn next_token_is(&mut self, expected: TokenKind) -> Result<Token, Error> {
        let token = self.lexer.next_token()?;
        if token.kind != expected {
            return Err(ParseError {
                kind: ParseErrorKind::UnexpectedToken {
                    expected,
                    found: token.kind,
                },
                line: token.line,
            }
            .into());
        }
        tracing::trace!(line = token.line, kind = %token.kind, "matched token");
        Ok(token)
    }

    // String ::= '"' '"' Ignored | '"' StringCharacter* '"' Ignored
    fn parse_string(&mut self) -> Result<String, Error> {
        match self.lexer.look_ahead()? {
            TokenKind::DoubleQuote => {
                self.next_token_is(TokenKind::DoubleQuote)?;
                Ok(String::new())
            }
            TokenKind::Quote => {
                self.next_token_is(TokenKind::Quote)?;
                let value = self.lexer.scan_string_literal()?.to_owned();
                self.next_token_is(TokenKind::Quote)?;
                Ok(value)
            }
            found => {
                let token = self.lexer.next_token()?;
                Err(ParseError {
                    kind: ParseErrorKind::ExpectedString { found },
                    line: token.line,
                }
                .into())
            }
        }
    }
}
