//! Document state - the text buffer plus a revision counter
//!
//! The buffer is externally owned in spirit: the outline engine never caches
//! a parse across edits, so `OrgDocument` only carries the text and a
//! monotonically increasing revision used for staleness checks.

use std::borrow::Cow;
use std::path::Path;

use ropey::Rope;

use super::Position;
use crate::edit::EditPlan;

/// Text buffer with a revision counter bumped on every applied edit plan.
#[derive(Debug, Clone)]
pub struct OrgDocument {
    /// The text buffer
    buffer: Rope,
    /// Revision counter, incremented whenever an edit plan is applied.
    /// Used for staleness checking in the debounced re-parse pipeline.
    revision: u64,
}

impl OrgDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            buffer: Rope::from(""),
            revision: 0,
        }
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            revision: 0,
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::with_text(&content))
    }

    /// Current revision counter
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Full document text
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_chars() == 0
    }

    /// Number of content lines.
    ///
    /// A trailing newline terminates the last line rather than opening an
    /// empty one, so `"* A\n"` has one line, not two.
    pub fn line_count(&self) -> usize {
        if self.buffer.len_chars() == 0 {
            return 0;
        }
        let lines = self.buffer.len_lines();
        if self.ends_with_newline() {
            lines - 1
        } else {
            lines
        }
    }

    /// Whether the buffer ends with a line terminator
    pub fn ends_with_newline(&self) -> bool {
        let len = self.buffer.len_chars();
        len > 0 && self.buffer.char(len - 1) == '\n'
    }

    /// Get line content with the trailing newline trimmed, avoiding
    /// allocation when the line is stored contiguously.
    pub fn line_text(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }

        let line = self.buffer.line(line_idx);
        let len = line.len_chars();

        let trim_len = if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                2 // CRLF
            } else {
                1 // LF
            }
        } else {
            0
        };

        let trimmed = line.slice(..len - trim_len);

        if let Some(s) = trimmed.as_str() {
            Some(Cow::Borrowed(s))
        } else {
            // Falls back to allocation only when the line spans multiple chunks
            Some(Cow::Owned(trimmed.to_string()))
        }
    }

    /// Length of a line in characters, excluding the newline
    pub fn line_length(&self, line_idx: usize) -> usize {
        self.line_text(line_idx)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }

    /// Convert a (line, column) position to a character offset.
    /// Positions past the end of a line or the document clamp inward.
    pub fn position_to_offset(&self, pos: Position) -> usize {
        if pos.line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(pos.line);
        line_start + pos.column.min(self.line_length(pos.line))
    }

    /// Convert a character offset to a (line, column) position
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        Position::new(line, clamped - line_start)
    }

    /// Apply an edit plan as one atomic batch.
    ///
    /// Edits are applied in reverse document order so earlier ranges stay
    /// valid while later ones are rewritten; the revision is bumped once for
    /// the whole batch. An empty plan leaves the document (and revision)
    /// untouched.
    pub fn apply(&mut self, plan: &EditPlan) {
        if plan.edits.is_empty() {
            return;
        }

        let mut resolved: Vec<(usize, usize, &str)> = plan
            .edits
            .iter()
            .map(|edit| {
                let start = self.position_to_offset(edit.start);
                let end = self.position_to_offset(edit.end).max(start);
                (start, end, edit.text.as_str())
            })
            .collect();
        resolved.sort_by(|a, b| b.0.cmp(&a.0));

        for (start, end, text) in resolved {
            if end > start {
                self.buffer.remove(start..end);
            }
            if !text.is_empty() {
                self.buffer.insert(start, text);
            }
        }

        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(
            "applied {} edit(s), revision now {}",
            plan.edits.len(),
            self.revision
        );
    }
}

impl Default for OrgDocument {
    fn default() -> Self {
        Self::new()
    }
}
