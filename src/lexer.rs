use std::fmt;

use crate::token::{Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// String literal with no closing quote.
    UnterminatedString,
    /// String literal scan requested while a peeked token is buffered.
    LookaheadPending,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected symbol near {ch:?}")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
            Self::LookaheadPending => {
                write!(f, "cannot scan a string literal past a peeked token")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

/// Lazily iterate over the raw tokens of a source string.
///
/// Yields every token the lexer produces, `Ignored` runs included,
/// and stops after `Eof` or the first error. String literal bodies
/// are only scanned by the parser, so here they come out as the
/// tokens their characters happen to form.
#[must_use]
pub const fn tokens(input: &str) -> Tokens<'_> {
    Tokens {
        lexer: Lexer::new(input),
        done: false,
    }
}

/// Iterator returned by [`tokens`].
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.lexer.next_token();
        self.done = !matches!(&result, Ok(token) if token.kind != TokenKind::Eof);
        Some(result)
    }
}

/// On-demand tokenizer with a single token of lookahead.
///
/// Whitespace is not skipped automatically: a run of it comes back as
/// an `Ignored` token, and the parser decides where that is allowed.
pub struct Lexer<'a> {
    source: &'a str,
    line: usize,
    lookahead: Option<Token>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            lookahead: None,
        }
    }

    /// Current line, 1-based. A pending lookahead does not move it.
    #[must_use]
    pub const fn line_num(&self) -> usize {
        self.line
    }

    /// Scan one token straight from the source, ignoring the
    /// lookahead slot.
    pub fn match_token(&mut self) -> Result<Token, LexError> {
        if self.skip_ignored() {
            return Ok(Token::new(self.line, TokenKind::Ignored, "Ignored"));
        }

        let Some(ch) = self.source.chars().next() else {
            return Ok(Token::new(self.line, TokenKind::Eof, "EOF"));
        };

        let single = match ch {
            '$' => Some(TokenKind::VarPrefix),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '=' => Some(TokenKind::Equal),
            '"' if self.source.starts_with("\"\"") => {
                self.skip(2);
                return Ok(Token::new(self.line, TokenKind::DoubleQuote, "\"\""));
            }
            '"' => Some(TokenKind::Quote),
            _ => None,
        };
        if let Some(kind) = single {
            self.skip(1);
            return Ok(Token::new(self.line, kind, ch));
        }

        if ch == '_' || ch.is_ascii_alphabetic() {
            let name = self.scan_name();
            let kind = TokenKind::keyword(name).unwrap_or(TokenKind::Name);
            return Ok(Token::new(self.line, kind, name));
        }

        Err(LexError {
            kind: LexErrorKind::UnexpectedCharacter(ch),
            line: self.line,
        })
    }

    /// Consume the next token, taking the buffered lookahead first.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(token) = self.lookahead.take() {
            self.line = token.line;
            return Ok(token);
        }
        self.match_token()
    }

    /// Peek at the kind of the next token without consuming it.
    ///
    /// Repeated calls return the same buffered token until
    /// [`next_token`](Self::next_token) takes it.
    pub fn look_ahead(&mut self) -> Result<TokenKind, LexError> {
        if let Some(token) = &self.lookahead {
            return Ok(token.kind);
        }
        let line = self.line;
        let token = self.match_token()?;
        self.line = line;
        let kind = token.kind;
        self.lookahead = Some(token);
        Ok(kind)
    }

    /// Drop the next token if it has the given kind, otherwise leave
    /// it buffered.
    pub fn look_ahead_and_skip(&mut self, kind: TokenKind) -> Result<(), LexError> {
        if self.look_ahead()? == kind {
            self.next_token()?;
        }
        Ok(())
    }

    /// Take the raw body of a string literal: everything up to the
    /// next `"`, verbatim. The closing quote is left in the source.
    ///
    /// Call it right after consuming the opening quote. A token
    /// still sitting in the lookahead slot has already been cut out of
    /// the source, so that case is an error.
    pub fn scan_string_literal(&mut self) -> Result<&'a str, LexError> {
        if self.lookahead.is_some() {
            return Err(LexError {
                kind: LexErrorKind::LookaheadPending,
                line: self.line,
            });
        }
        let Some(end) = self.source.find('"') else {
            return Err(LexError {
                kind: LexErrorKind::UnterminatedString,
                line: self.line,
            });
        };
        let (text, rest) = self.source.split_at(end);
        self.source = rest;
        self.line += count_line_breaks(text);
        Ok(text)
    }

    fn skip_ignored(&mut self) -> bool {
        let start = self.source.len();
        loop {
            if self.source.starts_with("\r\n") || self.source.starts_with("\n\r") {
                self.skip(2);
                self.line += 1;
            } else if self.source.starts_with(['\r', '\n']) {
                self.skip(1);
                self.line += 1;
            } else if self.source.starts_with(is_whitespace) {
                self.skip(1);
            } else {
                break;
            }
        }
        self.source.len() != start
    }

    fn scan_name(&mut self) -> &'a str {
        let end = self
            .source
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(self.source.len());
        let (name, rest) = self.source.split_at(end);
        self.source = rest;
        name
    }

    // Only ever called on ASCII prefixes.
    fn skip(&mut self, n: usize) {
        self.source = &self.source[n..];
    }
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' ')
}

/// Count line breaks the way the lexer does: `\r\n` and `\n\r` are
/// one break each, a lone `\r` or `\n` is one break.
pub(crate) fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'\r', Some(b'\n')) | (b'\n', Some(b'\r')) => {
                count += 1;
                i += 2;
            }
            (b'\r' | b'\n', _) => {
                count += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    count
}
