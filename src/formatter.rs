//! Pretty-printer that serializes a Pineapple AST back into canonical text.
//!
//! One statement per line, single spaces around `=`, no padding inside
//! `print(...)`.

use crate::ast::SourceCode;

/// Format a `SourceCode` AST into Pineapple source.
///
/// String values are written verbatim. The language has no escape
/// mechanism, so a value containing `"` produces text that will not
/// parse back.
#[must_use]
pub fn format(source: &SourceCode) -> String {
    let mut out = String::new();
    for statement in &source.statements {
        out.push_str(&statement.to_string());
        out.push('\n');
    }
    out
}
