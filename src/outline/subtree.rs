//! Subtree location
//!
//! Heading-relative operations start from "the current heading": the nearest
//! heading at or before the cursor line. The parser's `end_line` is already
//! subtree-inclusive, so a node's subtree is simply `[start_line, end_line)`.

use crate::error::OrgError;

use super::{LineRange, Outline};

impl Outline {
    /// Index of the heading governing `line`: the last node starting at or
    /// before it. Fails when the cursor precedes the first heading (or the
    /// document has none).
    pub fn heading_at(&self, line: usize) -> Result<usize, OrgError> {
        let after = self.nodes.partition_point(|n| n.start_line <= line);
        after.checked_sub(1).ok_or(OrgError::NoHeadingFound)
    }

    /// The contiguous line span of a node and all of its descendants.
    pub fn subtree_range(&self, index: usize) -> LineRange {
        let node = &self.nodes[index];
        LineRange {
            start: node.start_line,
            end: node.end_line,
        }
    }

    /// Subtree span of the heading governing the cursor line.
    pub fn subtree_at(&self, line: usize) -> Result<LineRange, OrgError> {
        Ok(self.subtree_range(self.heading_at(line)?))
    }
}
