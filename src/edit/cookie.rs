//! Statistics cookies
//!
//! A heading title may carry a bracketed progress token - a bare count
//! (`[3]`) or a done/total pair (`[2/5]`). Increment/decrement adjust the
//! token under the current heading, clamped so "done" never exceeds "total"
//! and never drops below zero. A heading without a token is a common,
//! harmless case: the operation is a silent no-op, not an error.

use crate::error::OrgError;
use crate::model::{OrgDocument, Position};
use crate::outline::Outline;

use super::{EditPlan, TextEdit};

/// Increment the cookie in the current heading's title.
pub fn increment_cookie(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
) -> Result<EditPlan, OrgError> {
    adjust_cookie(doc, outline, cursor, 1)
}

/// Decrement the cookie in the current heading's title.
pub fn decrement_cookie(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
) -> Result<EditPlan, OrgError> {
    adjust_cookie(doc, outline, cursor, -1)
}

fn adjust_cookie(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
    delta: i64,
) -> Result<EditPlan, OrgError> {
    let index = outline.heading_at(cursor.line)?;
    let line_idx = outline.nodes[index].start_line;
    let line = doc.line_text(line_idx).unwrap_or_default().into_owned();

    let Some((start_col, end_col, cookie)) = find_cookie(&line) else {
        return Ok(EditPlan::new(cursor));
    };

    let adjusted = cookie.adjusted(delta);
    if adjusted == cookie {
        // Already clamped at a bound
        return Ok(EditPlan::new(cursor));
    }

    let mut plan = EditPlan::new(cursor);
    plan.edits.push(TextEdit::replace(
        Position::new(line_idx, start_col),
        Position::new(line_idx, end_col),
        adjusted.render(),
    ));
    Ok(plan)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cookie {
    Bare(i64),
    Fraction { done: i64, total: i64 },
}

impl Cookie {
    fn adjusted(self, delta: i64) -> Self {
        match self {
            Cookie::Bare(n) => Cookie::Bare((n + delta).max(0)),
            Cookie::Fraction { done, total } => Cookie::Fraction {
                done: (done + delta).clamp(0, total),
                total,
            },
        }
    }

    fn render(self) -> String {
        match self {
            Cookie::Bare(n) => format!("[{}]", n),
            Cookie::Fraction { done, total } => format!("[{}/{}]", done, total),
        }
    }
}

/// Find the first cookie token on a line. Returns its character-column span
/// (brackets included) and the parsed value.
fn find_cookie(line: &str) -> Option<(usize, usize, Cookie)> {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '[' {
            i += 1;
            continue;
        }

        if let Some((end, cookie)) = parse_cookie_at(&chars, i) {
            return Some((i, end, cookie));
        }
        i += 1;
    }
    None
}

/// Try to parse `[N]` or `[N/M]` starting at the `[` at `open`.
/// Returns the exclusive end column on success.
fn parse_cookie_at(chars: &[char], open: usize) -> Option<(usize, Cookie)> {
    let mut i = open + 1;
    let first = read_number(chars, &mut i)?;

    match chars.get(i) {
        Some(']') => Some((i + 1, Cookie::Bare(first))),
        Some('/') => {
            i += 1;
            let total = read_number(chars, &mut i)?;
            if chars.get(i) == Some(&']') {
                Some((i + 1, Cookie::Fraction { done: first, total }))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn read_number(chars: &[char], i: &mut usize) -> Option<i64> {
    let start = *i;
    while chars.get(*i).is_some_and(|c| c.is_ascii_digit()) {
        *i += 1;
    }
    if *i == start {
        return None;
    }
    chars[start..*i].iter().collect::<String>().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrgConfig;
    use crate::outline::parse;

    fn fixture(text: &str) -> (OrgDocument, Outline) {
        let doc = OrgDocument::with_text(text);
        let outline = parse(&doc, &OrgConfig::default());
        (doc, outline)
    }

    fn applied(doc: &OrgDocument, plan: &EditPlan) -> String {
        let mut copy = doc.clone();
        copy.apply(plan);
        copy.text()
    }

    #[test]
    fn test_find_fraction_cookie() {
        let (start, end, cookie) = find_cookie("* Tasks [2/5]").unwrap();
        assert_eq!((start, end), (8, 13));
        assert_eq!(cookie, Cookie::Fraction { done: 2, total: 5 });
    }

    #[test]
    fn test_find_bare_cookie() {
        let (_, _, cookie) = find_cookie("* Seen [3] times").unwrap();
        assert_eq!(cookie, Cookie::Bare(3));
    }

    #[test]
    fn test_non_numeric_brackets_are_skipped() {
        assert!(find_cookie("* [#A] priority only").is_none());
        let (_, _, cookie) = find_cookie("* [#A] then [1/2]").unwrap();
        assert_eq!(cookie, Cookie::Fraction { done: 1, total: 2 });
    }

    #[test]
    fn test_increment_fraction() {
        let (doc, outline) = fixture("* Tasks [2/5]\n");
        let plan = increment_cookie(&doc, &outline, Position::new(0, 0)).unwrap();
        assert_eq!(applied(&doc, &plan), "* Tasks [3/5]\n");
    }

    #[test]
    fn test_increment_clamps_at_total() {
        let (doc, outline) = fixture("* Tasks [5/5]\n");
        let plan = increment_cookie(&doc, &outline, Position::new(0, 0)).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let (doc, outline) = fixture("* Tasks [0/5]\n");
        let plan = decrement_cookie(&doc, &outline, Position::new(0, 0)).unwrap();
        assert!(plan.is_empty());

        let (doc, outline) = fixture("* Count [0]\n");
        let plan = decrement_cookie(&doc, &outline, Position::new(0, 0)).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_bare_cookie_has_no_upper_bound() {
        let (doc, outline) = fixture("* Count [9]\n");
        let plan = increment_cookie(&doc, &outline, Position::new(0, 0)).unwrap();
        assert_eq!(applied(&doc, &plan), "* Count [10]\n");
    }

    #[test]
    fn test_missing_cookie_is_silent_noop() {
        let (doc, outline) = fixture("* No cookie here\n");
        let plan = increment_cookie(&doc, &outline, Position::new(0, 0)).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_cursor_on_body_line_adjusts_heading() {
        let (doc, outline) = fixture("* Tasks [1/2]\nbody\n");
        let plan = increment_cookie(&doc, &outline, Position::new(1, 0)).unwrap();
        assert_eq!(applied(&doc, &plan), "* Tasks [2/2]\nbody\n");
    }
}
