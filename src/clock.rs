//! Timestamps and clock entries
//!
//! Org timestamps are bracketed date tokens with an optional weekday, time
//! and repeater cookie: `<2026-08-07 Fri>`, `[2026-08-07 Fri 10:00]`,
//! `<2026-08-07 Fri +1w>`. Clock entries are lines beneath a heading of the
//! form `CLOCK: [start]` (open) or `CLOCK: [start]--[end] => H:MM` (closed).
//!
//! All operations take the current time as a parameter so they stay pure;
//! the host passes `Local::now().naive_local()`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::OrgConfig;
use crate::edit::{full_line_insert, EditPlan, TextEdit};
use crate::error::OrgError;
use crate::model::{OrgDocument, Position};
use crate::outline::Outline;

// =============================================================================
// Timestamp tokens
// =============================================================================

/// One timestamp token, delimiters excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgTimestamp {
    /// Active (`<...>`) or inactive (`[...]`).
    pub active: bool,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    /// Repeater cookie (`+1w`, `++1m`, `.+2d`), preserved verbatim but not
    /// interpreted.
    pub repeater: Option<String>,
}

impl OrgTimestamp {
    /// Inactive date+time stamp, the form clock entries use.
    pub fn clock_stamp(at: NaiveDateTime) -> Self {
        Self {
            active: false,
            date: at.date(),
            time: Some(at.time()),
            repeater: None,
        }
    }

    /// Date-only stamp, the form plain timestamp insertion uses.
    pub fn date_stamp(at: NaiveDateTime, active: bool) -> Self {
        Self {
            active,
            date: at.date(),
            time: None,
            repeater: None,
        }
    }

    /// The stamp as a point in time; date-only stamps resolve to midnight.
    pub fn datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Parse a full token including its delimiters. The weekday may appear on
    /// either side of the time and is ignored; the date is authoritative.
    pub fn parse(token: &str, config: &OrgConfig) -> Result<Self, OrgError> {
        let malformed = || OrgError::MalformedTimestamp(token.to_string());

        let mut chars = token.trim().chars();
        let open = chars.next().ok_or_else(malformed)?;
        let active = if open == config.timestamp_active_delims.0 {
            true
        } else if open == config.timestamp_inactive_delims.0 {
            false
        } else {
            return Err(malformed());
        };

        let expected_close = if active {
            config.timestamp_active_delims.1
        } else {
            config.timestamp_inactive_delims.1
        };
        let inner: String = chars.collect();
        let inner = inner.strip_suffix(expected_close).ok_or_else(malformed)?;

        let mut parts = inner.split_whitespace();
        let date_text = parts.next().ok_or_else(malformed)?;
        let date =
            NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|_| malformed())?;

        let mut time = None;
        let mut repeater = None;
        for part in parts {
            if let Some(t) = parse_time(part) {
                if time.is_none() {
                    time = Some(t);
                    continue;
                }
                return Err(malformed());
            }
            if part.starts_with('+') || part.starts_with(".+") {
                repeater = Some(part.to_string());
                continue;
            }
            if part.chars().all(|c| c.is_alphabetic()) {
                // Weekday name; the date already pins the day
                continue;
            }
            return Err(malformed());
        }

        Ok(Self {
            active,
            date,
            time,
            repeater,
        })
    }

    /// Render the token including delimiters, e.g. `[2026-08-07 Fri 10:00]`.
    pub fn format(&self, config: &OrgConfig) -> String {
        let (open, close) = if self.active {
            config.timestamp_active_delims
        } else {
            config.timestamp_inactive_delims
        };

        let mut out = String::new();
        out.push(open);
        out.push_str(&self.date.format("%Y-%m-%d %a").to_string());
        if let Some(time) = self.time {
            out.push_str(&time.format(" %H:%M").to_string());
        }
        if let Some(repeater) = &self.repeater {
            out.push(' ');
            out.push_str(repeater);
        }
        out.push(close);
        out
    }
}

/// `H:MM` with unpadded hours, e.g. `1:30` or `0:05`.
pub fn format_duration(minutes: i64) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    let (h, m) = token.split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

// =============================================================================
// Clock lines
// =============================================================================

/// A parsed `CLOCK:` line.
#[derive(Debug, Clone)]
struct ClockLine {
    start: OrgTimestamp,
    end: Option<OrgTimestamp>,
    /// Character column of `=>`, when a duration field is present.
    arrow_col: Option<usize>,
}

fn is_clock_line(text: &str, config: &OrgConfig) -> bool {
    text.trim_start()
        .starts_with(&format!("{}:", config.clock_keyword))
}

/// Line indices of clock lines in a heading's direct body (the lines between
/// the heading and its first child heading or subtree end).
fn clock_line_indices(
    doc: &OrgDocument,
    outline: &Outline,
    index: usize,
    config: &OrgConfig,
) -> Vec<usize> {
    let node = &outline.nodes[index];
    let mut lines = Vec::new();
    for line_idx in (node.start_line + 1)..node.end_line {
        let Some(text) = doc.line_text(line_idx) else {
            break;
        };
        if crate::heading::is_heading(&text, config) {
            break;
        }
        if is_clock_line(&text, config) {
            lines.push(line_idx);
        }
    }
    lines
}

/// Parse one clock line's stamps and duration-field position.
fn parse_clock_line(
    doc: &OrgDocument,
    line_idx: usize,
    config: &OrgConfig,
) -> Result<ClockLine, OrgError> {
    let text = doc
        .line_text(line_idx)
        .map(|l| l.into_owned())
        .unwrap_or_default();
    let chars: Vec<char> = text.chars().collect();

    let (start_span, after_start) = scan_timestamp(&chars, 0, config)
        .ok_or_else(|| OrgError::MalformedTimestamp(text.trim().to_string()))?;
    let start_text: String = chars[start_span.0..start_span.1].iter().collect();
    let start = OrgTimestamp::parse(&start_text, config)?;

    let mut end = None;
    let mut cursor = after_start;
    while chars.get(cursor) == Some(&' ') {
        cursor += 1;
    }
    if chars.get(cursor) == Some(&'-') && chars.get(cursor + 1) == Some(&'-') {
        let (end_span, after_end) = scan_timestamp(&chars, cursor + 2, config)
            .ok_or_else(|| OrgError::MalformedTimestamp(text.trim().to_string()))?;
        let end_text: String = chars[end_span.0..end_span.1].iter().collect();
        end = Some(OrgTimestamp::parse(&end_text, config)?);
        cursor = after_end;
    }

    let arrow_col = find_arrow(&chars, cursor);

    Ok(ClockLine {
        start,
        end,
        arrow_col,
    })
}

/// Find the next timestamp token at or after `from`. Returns its char span
/// (delimiters included) and the index just past it.
fn scan_timestamp(
    chars: &[char],
    from: usize,
    config: &OrgConfig,
) -> Option<((usize, usize), usize)> {
    let (active_open, active_close) = config.timestamp_active_delims;
    let (inactive_open, inactive_close) = config.timestamp_inactive_delims;

    let open = (from..chars.len())
        .find(|&i| chars[i] == active_open || chars[i] == inactive_open)?;
    let close_delim = if chars[open] == active_open {
        active_close
    } else {
        inactive_close
    };
    let close = (open + 1..chars.len()).find(|&i| chars[i] == close_delim)?;
    Some(((open, close + 1), close + 1))
}

fn find_arrow(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len().saturating_sub(1))
        .find(|&i| chars[i] == '=' && chars[i + 1] == '>')
}

// =============================================================================
// Clock operations
// =============================================================================

/// Insert an open clock entry beneath the current heading, after any existing
/// clock lines.
pub fn clock_in(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
    now: NaiveDateTime,
    config: &OrgConfig,
) -> Result<EditPlan, OrgError> {
    let index = outline.heading_at(cursor.line)?;
    let node = &outline.nodes[index];

    let insert_line = clock_line_indices(doc, outline, index, config)
        .last()
        .map(|&l| l + 1)
        .unwrap_or(node.start_line + 1);

    let stamp = OrgTimestamp::clock_stamp(now);
    let content = format!("{}: {}", config.clock_keyword, stamp.format(config));

    // The insertion shifts every following line down by one
    let cursor_after = if cursor.line >= insert_line {
        Position::new(cursor.line + 1, cursor.column)
    } else {
        cursor
    };

    let mut plan = EditPlan::new(cursor_after);
    plan.edits.push(full_line_insert(doc, insert_line, &content));
    tracing::debug!("clock-in under {:?} at line {}", node.title, insert_line);
    Ok(plan)
}

/// Close the most recent open clock entry with the current time and a
/// computed duration.
pub fn clock_out(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
    now: NaiveDateTime,
    config: &OrgConfig,
) -> Result<EditPlan, OrgError> {
    let index = outline.heading_at(cursor.line)?;

    // Newest entries sit last; find the most recent open one
    let open_line = clock_line_indices(doc, outline, index, config)
        .into_iter()
        .rev()
        .find(|&l| {
            doc.line_text(l)
                .map(|t| !t.contains("--"))
                .unwrap_or(false)
        })
        .ok_or(OrgError::NoClockEntry)?;

    let entry = parse_clock_line(doc, open_line, config)?;
    let minutes = clamped_minutes(entry.start.datetime(), now);

    let end_stamp = OrgTimestamp::clock_stamp(now);
    let suffix = format!(
        "--{} => {}",
        end_stamp.format(config),
        format_duration(minutes)
    );

    let eol = Position::new(open_line, doc.line_length(open_line));
    let mut plan = EditPlan::new(cursor);
    plan.edits.push(TextEdit::insert(eol, suffix));
    Ok(plan)
}

/// Recompute the duration of the most recent closed clock entry from its
/// current (possibly hand-edited) stamps, rewriting only the duration field.
pub fn update_clock(
    doc: &OrgDocument,
    outline: &Outline,
    cursor: Position,
    config: &OrgConfig,
) -> Result<EditPlan, OrgError> {
    let index = outline.heading_at(cursor.line)?;

    let closed_line = clock_line_indices(doc, outline, index, config)
        .into_iter()
        .rev()
        .find(|&l| doc.line_text(l).map(|t| t.contains("--")).unwrap_or(false))
        .ok_or(OrgError::NoClockEntry)?;

    let entry = parse_clock_line(doc, closed_line, config)?;
    let end = entry.end.ok_or(OrgError::NoClockEntry)?;
    let minutes = clamped_minutes(entry.start.datetime(), end.datetime());
    let duration_field = format!("=> {}", format_duration(minutes));

    let eol = Position::new(closed_line, doc.line_length(closed_line));
    let mut plan = EditPlan::new(cursor);
    match entry.arrow_col {
        Some(col) => plan.edits.push(TextEdit::replace(
            Position::new(closed_line, col),
            eol,
            duration_field,
        )),
        None => plan
            .edits
            .push(TextEdit::insert(eol, format!(" {}", duration_field))),
    }
    Ok(plan)
}

/// Insert a timestamp token at the cursor. Pure text insertion - no clock
/// state involved.
pub fn insert_timestamp(
    cursor: Position,
    now: NaiveDateTime,
    active: bool,
    config: &OrgConfig,
) -> EditPlan {
    let token = OrgTimestamp::date_stamp(now, active).format(config);
    let width = token.chars().count();

    let mut plan = EditPlan::new(Position::new(cursor.line, cursor.column + width));
    plan.edits.push(TextEdit::insert(cursor, token));
    plan
}

/// Whether the heading governing `line` has an open clock entry.
pub fn is_clocked_in(
    doc: &OrgDocument,
    outline: &Outline,
    index: usize,
    config: &OrgConfig,
) -> bool {
    clock_line_indices(doc, outline, index, config)
        .into_iter()
        .rev()
        .any(|l| doc.line_text(l).map(|t| !t.contains("--")).unwrap_or(false))
}

fn clamped_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let minutes = end.signed_duration_since(start).num_minutes();
    if minutes < 0 {
        tracing::warn!(
            "clock entry ends {} minute(s) before it starts, clamping to zero",
            -minutes
        );
        0
    } else {
        minutes
    }
}
