//! Promote/demote and heading insertion
//!
//! Level changes rewrite only marker prefixes; titles and body lines are
//! never touched. Subtree variants are all-or-nothing: if any heading in the
//! range would drop below level 1, the whole operation is rejected with zero
//! edits.

use crate::config::OrgConfig;
use crate::error::OrgError;
use crate::heading;
use crate::model::{OrgDocument, Position};
use crate::outline::Outline;

use super::{EditPlan, TextEdit};

/// Remove one marker character from the cursor line. Level 1 cannot be
/// promoted further.
pub fn promote_line(
    doc: &OrgDocument,
    cursor: Position,
    config: &OrgConfig,
) -> Result<EditPlan, OrgError> {
    shift_line(doc, cursor, config, -1)
}

/// Add one marker character to the cursor line.
pub fn demote_line(
    doc: &OrgDocument,
    cursor: Position,
    config: &OrgConfig,
) -> Result<EditPlan, OrgError> {
    shift_line(doc, cursor, config, 1)
}

fn shift_line(
    doc: &OrgDocument,
    cursor: Position,
    config: &OrgConfig,
    delta: isize,
) -> Result<EditPlan, OrgError> {
    let text = doc.line_text(cursor.line).ok_or(OrgError::NoHeadingFound)?;
    let line = heading::parse_line(&text, config).ok_or(OrgError::NoHeadingFound)?;

    if delta < 0 && line.level == 1 {
        tracing::debug!("rejecting promote of level-1 heading at line {}", cursor.line);
        return Err(OrgError::InvalidLevel);
    }

    let mut plan = EditPlan::new(shifted_cursor(cursor, delta));
    plan.edits.push(level_edit(cursor.line, delta, config));
    Ok(plan)
}

/// Remove one marker character from every heading in the subtree under the
/// cursor. Rejected outright if any of them is already at level 1.
pub fn promote_subtree(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
    config: &OrgConfig,
) -> Result<EditPlan, OrgError> {
    shift_subtree(doc, outline, cursor, config, -1)
}

/// Add one marker character to every heading in the subtree under the cursor.
pub fn demote_subtree(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
    config: &OrgConfig,
) -> Result<EditPlan, OrgError> {
    shift_subtree(doc, outline, cursor, config, 1)
}

fn shift_subtree(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
    config: &OrgConfig,
    delta: isize,
) -> Result<EditPlan, OrgError> {
    let range = outline.subtree_at(cursor.line)?;

    // Validate the whole range before emitting anything
    let mut heading_lines = Vec::new();
    for line_idx in range.start..range.end {
        let Some(text) = doc.line_text(line_idx) else {
            continue;
        };
        let Some(line) = heading::parse_line(&text, config) else {
            continue;
        };
        if delta < 0 && line.level == 1 {
            tracing::debug!(
                "rejecting subtree promote: line {} is already level 1",
                line_idx
            );
            return Err(OrgError::InvalidLevel);
        }
        heading_lines.push(line_idx);
    }

    let cursor_after = if heading_lines.contains(&cursor.line) {
        shifted_cursor(cursor, delta)
    } else {
        cursor
    };

    let mut plan = EditPlan::new(cursor_after);
    for &line_idx in &heading_lines {
        plan.edits.push(level_edit(line_idx, delta, config));
    }
    Ok(plan)
}

/// The single-character edit that changes a heading line's level by `delta`.
fn level_edit(line: usize, delta: isize, config: &OrgConfig) -> TextEdit {
    let at = Position::new(line, 0);
    if delta > 0 {
        TextEdit::insert(at, config.marker_char.to_string())
    } else {
        TextEdit::delete(at, Position::new(line, 1))
    }
}

fn shifted_cursor(cursor: Position, delta: isize) -> Position {
    let column = if delta > 0 {
        cursor.column + 1
    } else {
        cursor.column.saturating_sub(1)
    };
    Position::new(cursor.line, column)
}

/// Insert a new heading at the current heading's level, positioned after its
/// entire subtree so existing child content is not interrupted. The cursor
/// lands in the new (empty) title.
pub fn insert_heading_respect_content(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
    config: &OrgConfig,
) -> Result<EditPlan, OrgError> {
    let index = outline.heading_at(cursor.line)?;
    let node = &outline.nodes[index];
    Ok(insert_heading_line(doc, node.end_line, node.level, config))
}

/// Insert a new heading one level deeper, immediately after the current
/// heading line - it becomes the new first child, ahead of existing ones.
pub fn insert_child(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
    config: &OrgConfig,
) -> Result<EditPlan, OrgError> {
    let index = outline.heading_at(cursor.line)?;
    let node = &outline.nodes[index];
    Ok(insert_heading_line(doc, node.start_line + 1, node.level + 1, config))
}

fn insert_heading_line(
    doc: &OrgDocument,
    insert_line: usize,
    level: usize,
    config: &OrgConfig,
) -> EditPlan {
    let prefix = heading::marker_prefix(level, config);
    let mut plan = EditPlan::new(Position::new(insert_line, prefix.chars().count()));
    plan.edits
        .push(super::full_line_insert(doc, insert_line, &prefix));
    plan
}
