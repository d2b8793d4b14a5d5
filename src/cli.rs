//! Command-line argument parsing for the outline inspector
//!
//! Supports:
//! - Printing the heading tree (default), folding ranges, or JSON symbols
//! - Reporting the subtree span under a given line
//! - Loading engine configuration from a YAML file

use clap::Parser;
use std::path::PathBuf;

/// Inspect the outline structure of org-style documents
#[derive(Parser, Debug)]
#[command(name = "orgtree", version, about = "Inspect the outline structure of org-style documents")]
pub struct CliArgs {
    /// Document to inspect
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Print folding ranges instead of the heading tree
    #[arg(long)]
    pub folds: bool,

    /// Print the document symbol tree as JSON
    #[arg(long)]
    pub json: bool,

    /// Report the subtree span of the heading at line N (1-indexed)
    #[arg(long, value_name = "N")]
    pub subtree: Option<usize>,

    /// Engine configuration file (YAML); defaults apply when omitted
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// The `--subtree` line converted from 1-indexed (user input) to
    /// 0-indexed (internal)
    pub fn cursor_line(&self) -> Option<usize> {
        self.subtree.map(|n| n.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(subtree: Option<usize>) -> CliArgs {
        CliArgs {
            path: PathBuf::from("notes.org"),
            folds: false,
            json: false,
            subtree,
            config: None,
        }
    }

    #[test]
    fn test_cursor_line_converts_to_zero_indexed() {
        assert_eq!(args(Some(42)).cursor_line(), Some(41));
    }

    #[test]
    fn test_cursor_line_clamps_line_one() {
        // Line 0 from the user is treated as line 1
        assert_eq!(args(Some(0)).cursor_line(), Some(0));
        assert_eq!(args(Some(1)).cursor_line(), Some(0));
    }

    #[test]
    fn test_cursor_line_absent() {
        assert_eq!(args(None).cursor_line(), None);
    }
}
