use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// Variable prefix `$`.
    VarPrefix,
    /// Opening paren `(`.
    LeftParen,
    /// Closing paren `)`.
    RightParen,
    /// Assignment `=`.
    Equal,
    /// Lone double quote `"`.
    Quote,
    /// Empty string literal `""`.
    DoubleQuote,
    /// Identifier (`[_A-Za-z][_0-9A-Za-z]*`) that is not a keyword.
    Name,
    /// Keyword `print`.
    Print,
    /// Run of whitespace and line terminators.
    Ignored,
}

/// Reserved words. `print` is the only one.
static KEYWORDS: &[(&str, TokenKind)] = &[("print", TokenKind::Print)];

impl TokenKind {
    /// Look up a scanned name in the keyword table.
    #[must_use]
    pub fn keyword(name: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(word, _)| *word == name)
            .map(|&(_, kind)| kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::VarPrefix => "$",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Equal => "=",
            Self::Quote => "\"",
            Self::DoubleQuote => "\"\"",
            Self::Name => "Name",
            Self::Print => "print",
            Self::Ignored => "Ignored",
        };
        f.write_str(name)
    }
}

/// A single token with its source line, kind, and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub line: usize,
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub(crate) fn new(line: usize, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            text: text.into(),
        }
    }
}
