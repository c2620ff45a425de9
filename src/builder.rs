use crate::ast::{Assignment, Print, SourceCode, Statement, Variable};
use crate::lexer::count_line_breaks;

impl SourceCode {
    /// Create an empty program starting at line 1.
    ///
    /// An empty program is not valid Pineapple; add at least one
    /// statement before formatting it.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line: 1,
            statements: Vec::new(),
        }
    }

    /// Append `$name = "value"` on the next free line.
    #[must_use]
    pub fn assign(self, name: &str, value: &str) -> Self {
        let line = self.next_line();
        self.push(Assignment::new(line, name, value).into())
    }

    /// Append `print($name)` on the next free line.
    #[must_use]
    pub fn print(self, name: &str) -> Self {
        let line = self.next_line();
        self.push(Print::new(line, name).into())
    }

    /// Append an existing statement, renumbering it to the next free
    /// line.
    #[must_use]
    pub fn statement(self, statement: Statement) -> Self {
        let line = self.next_line();
        let statement = match statement {
            Statement::Assignment(a) => Assignment::new(line, &a.variable.name, &a.value).into(),
            Statement::Print(p) => Print::new(line, &p.variable.name).into(),
        };
        self.push(statement)
    }

    // Line the formatter would put the next statement on.
    fn next_line(&self) -> usize {
        self.statements.last().map_or(self.line, |last| match last {
            Statement::Assignment(a) => a.line + 1 + count_line_breaks(&a.value),
            Statement::Print(p) => p.line + 1,
        })
    }

    fn push(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }
}

impl Default for SourceCode {
    fn default() -> Self {
        Self::new()
    }
}

impl Variable {
    #[must_use]
    pub fn new(line: usize, name: &str) -> Self {
        Self {
            line,
            name: name.to_string(),
        }
    }
}

impl Assignment {
    #[must_use]
    pub fn new(line: usize, name: &str, value: &str) -> Self {
        Self {
            line,
            variable: Variable::new(line, name),
            value: value.to_string(),
        }
    }
}

impl Print {
    #[must_use]
    pub fn new(line: usize, name: &str) -> Self {
        Self {
            line,
            variable: Variable::new(line, name),
        }
    }
}
