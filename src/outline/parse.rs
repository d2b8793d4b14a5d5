//! Single-pass outline parser
//!
//! One linear scan over the document lines, maintaining a stack of open
//! ancestors by level. A new heading closes every open node at the same or a
//! deeper level; document end closes the rest. Parent/child relations come
//! from level comparison alone - skipped levels (`*` straight to `***`) are
//! legal and never treated as errors.

use crate::config::OrgConfig;
use crate::heading;
use crate::model::OrgDocument;

use super::{HeadingNode, Outline};

/// Parse the document into its heading arena. Deterministic and stateless:
/// re-parsing is the only supported mode.
pub fn parse(doc: &OrgDocument, config: &OrgConfig) -> Outline {
    let line_count = doc.line_count();
    let mut nodes: Vec<HeadingNode> = Vec::new();
    // Indices of open nodes; levels on the stack are strictly increasing.
    let mut open: Vec<usize> = Vec::new();

    for line_idx in 0..line_count {
        let Some(text) = doc.line_text(line_idx) else {
            break;
        };
        let Some(line) = heading::parse_line(&text, config) else {
            continue;
        };

        // Close everything at the same level or deeper
        while let Some(&top) = open.last() {
            if nodes[top].level >= line.level {
                nodes[top].end_line = line_idx;
                open.pop();
            } else {
                break;
            }
        }

        let parent = open.last().copied();
        nodes.push(HeadingNode {
            level: line.level,
            title: line.content.trim().to_string(),
            start_line: line_idx,
            end_line: line_count, // provisional; fixed when closed
            parent,
        });
        open.push(nodes.len() - 1);
    }

    // Document end closes all remaining open nodes (end_line already set)
    Outline { nodes, line_count }
}
