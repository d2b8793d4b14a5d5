//! Document model - text buffer, revisions, cursor positions

mod document;

pub use document::OrgDocument;

use serde::Serialize;

/// A cursor position in the document (0-based line and character column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}
