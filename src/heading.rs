//! Heading line model
//!
//! A line is a heading iff it starts with a run of marker characters followed
//! by exactly one separating space. Marker characters anywhere else on a
//! line, or a run without the separator, never count.

use crate::config::OrgConfig;

/// Parse result for a single heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    /// Nesting depth: the number of leading marker characters (>= 1).
    pub level: usize,
    /// Everything after the separator space, newline excluded.
    pub content: String,
}

/// Parse one line into its heading shape, or `None` for a plain line.
pub fn parse_line(line: &str, config: &OrgConfig) -> Option<HeadingLine> {
    let level = marker_run(line, config.marker_char);
    if level == 0 {
        return None;
    }

    let mut rest = line.chars().skip(level);
    if rest.next() != Some(' ') {
        return None;
    }

    Some(HeadingLine {
        level,
        content: rest.collect(),
    })
}

/// Whether a line is a heading line at all.
pub fn is_heading(line: &str, config: &OrgConfig) -> bool {
    parse_line(line, config).is_some()
}

/// Length of the leading marker run.
fn marker_run(line: &str, marker: char) -> usize {
    line.chars().take_while(|c| *c == marker).count()
}

/// The textual prefix of a heading at `level`: markers plus the separator.
pub fn marker_prefix(level: usize, config: &OrgConfig) -> String {
    let mut prefix: String = std::iter::repeat(config.marker_char).take(level).collect();
    prefix.push(' ');
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OrgConfig {
        OrgConfig::default()
    }

    #[test]
    fn test_parse_simple_levels() {
        let h = parse_line("* Top", &config()).unwrap();
        assert_eq!(h.level, 1);
        assert_eq!(h.content, "Top");

        let h = parse_line("*** Deep one", &config()).unwrap();
        assert_eq!(h.level, 3);
        assert_eq!(h.content, "Deep one");
    }

    #[test]
    fn test_separator_space_is_required() {
        assert!(parse_line("*Top", &config()).is_none());
        assert!(parse_line("*", &config()).is_none());
        assert!(parse_line("**", &config()).is_none());
    }

    #[test]
    fn test_mid_line_markers_do_not_misfire() {
        assert!(parse_line("text with * star", &config()).is_none());
        assert!(parse_line(" * indented", &config()).is_none());
    }

    #[test]
    fn test_empty_content_is_still_a_heading() {
        let h = parse_line("** ", &config()).unwrap();
        assert_eq!(h.level, 2);
        assert_eq!(h.content, "");
    }

    #[test]
    fn test_extra_spaces_belong_to_content() {
        // Exactly one space separates; the rest is title text
        let h = parse_line("*  padded", &config()).unwrap();
        assert_eq!(h.level, 1);
        assert_eq!(h.content, " padded");
    }

    #[test]
    fn test_custom_marker_char() {
        let mut config = config();
        config.marker_char = '#';
        let h = parse_line("## Section", &config).unwrap();
        assert_eq!(h.level, 2);
        assert!(parse_line("** Section", &config).is_none());
    }

    #[test]
    fn test_marker_prefix() {
        assert_eq!(marker_prefix(1, &config()), "* ");
        assert_eq!(marker_prefix(3, &config()), "*** ");
    }
}
