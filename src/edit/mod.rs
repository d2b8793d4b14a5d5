//! Text edits and edit plans
//!
//! Every structural operation is a pure function over (document, outline,
//! cursor) returning an `EditPlan`: an ordered batch of replacements plus the
//! resulting cursor position. Plans are validated before they are built -
//! a failed operation produces zero edits - and the document applies a plan
//! as one atomic batch.

mod cookie;
mod heading_ops;

pub use cookie::{decrement_cookie, increment_cookie};
pub use heading_ops::{
    demote_line, demote_subtree, insert_child, insert_heading_respect_content, promote_line,
    promote_subtree,
};

use serde::Serialize;

use crate::model::{OrgDocument, Position};

/// One text replacement: the span `[start, end)` is replaced by `text`.
/// Insertions have `start == end`; deletions have empty `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub start: Position,
    pub end: Position,
    pub text: String,
}

impl TextEdit {
    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            text: text.into(),
        }
    }

    pub fn replace(start: Position, end: Position, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    pub fn delete(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            text: String::new(),
        }
    }
}

/// A batch of edits applied atomically, plus where the cursor lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditPlan {
    pub edits: Vec<TextEdit>,
    pub cursor: Position,
}

impl EditPlan {
    /// A plan with no edits yet; the cursor stays where it was unless an
    /// operation moves it.
    pub fn new(cursor: Position) -> Self {
        Self {
            edits: Vec::new(),
            cursor,
        }
    }

    /// True when applying the plan would change nothing.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Edit that inserts `content` as a whole new line at `line`.
///
/// Inserting past a document that lacks a final newline means opening the new
/// line first; everywhere else the new line brings its own terminator.
pub(crate) fn full_line_insert(doc: &OrgDocument, line: usize, content: &str) -> TextEdit {
    let text = if line >= doc.line_count() && !doc.ends_with_newline() && !doc.is_empty() {
        format!("\n{}", content)
    } else {
        format!("{}\n", content)
    };
    TextEdit::insert(Position::new(line, 0), text)
}
