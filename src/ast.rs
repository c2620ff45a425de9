use std::fmt;

/// Complete Pineapple program: `Statement+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCode {
    pub line: usize,
    pub statements: Vec<Statement>,
}

/// One statement, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assignment(Assignment),
    Print(Print),
}

/// Assignment from a string literal: `$name = "value"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub line: usize,
    pub variable: Variable,
    pub value: String,
}

/// Print of a variable's value: `print($name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Print {
    pub line: usize,
    pub variable: Variable,
}

/// Variable reference: `$name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub line: usize,
    pub name: String,
}

impl Statement {
    /// Line on which the statement begins.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Assignment(a) => a.line,
            Self::Print(p) => p.line,
        }
    }

    /// The variable the statement stores to or reads from.
    #[must_use]
    pub const fn variable(&self) -> &Variable {
        match self {
            Self::Assignment(a) => &a.variable,
            Self::Print(p) => &p.variable,
        }
    }
}

impl From<Assignment> for Statement {
    fn from(a: Assignment) -> Self {
        Self::Assignment(a)
    }
}

impl From<Print> for Statement {
    fn from(p: Print) -> Self {
        Self::Print(p)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment(a) => write!(f, "{} = \"{}\"", a.variable, a.value),
            Self::Print(p) => write!(f, "print({})", p.variable),
        }
    }
}
