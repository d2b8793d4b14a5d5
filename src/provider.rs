//! Folding ranges and document symbols
//!
//! Both providers are read-only projections of one parse result, built for
//! navigation UIs. Symbols re-nest the flat arena by parent index; siblings
//! keep their original line order at every level, never re-sorted.

use serde::Serialize;

use crate::outline::Outline;

/// A collapsible line span: the heading line through the end of its subtree
/// (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldingRange {
    pub start_line: usize,
    pub end_line: usize,
}

/// A node in the navigation tree, one per heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSymbol {
    pub name: String,
    pub level: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub children: Vec<DocumentSymbol>,
}

/// One folding range per heading, spanning its whole subtree. Headings whose
/// subtree holds nothing beyond the heading line itself have nothing to fold
/// and are omitted.
pub fn folding_ranges(outline: &Outline) -> Vec<FoldingRange> {
    outline
        .nodes
        .iter()
        .filter(|node| node.end_line - node.start_line > 1)
        .map(|node| FoldingRange {
            start_line: node.start_line,
            end_line: node.end_line,
        })
        .collect()
}

/// The symbol tree, nested per parent/child relation in document order.
pub fn document_symbols(outline: &Outline) -> Vec<DocumentSymbol> {
    let mut roots: Vec<DocumentSymbol> = Vec::new();
    // Stack of (arena index, symbol under construction); the arena is in
    // depth-first document order, so ancestors are always on the stack.
    let mut stack: Vec<(usize, DocumentSymbol)> = Vec::new();

    for (index, node) in outline.nodes.iter().enumerate() {
        let symbol = DocumentSymbol {
            name: node.title.clone(),
            level: node.level,
            start_line: node.start_line,
            end_line: node.end_line,
            children: Vec::new(),
        };

        // Pop finished subtrees until the top is this node's parent
        while let Some(&(top_index, _)) = stack.last() {
            if node.parent == Some(top_index) {
                break;
            }
            let (_, finished) = stack.pop().unwrap();
            if let Some((_, parent)) = stack.last_mut() {
                parent.children.push(finished);
            } else {
                roots.push(finished);
            }
        }

        stack.push((index, symbol));
    }

    // Flush remaining stack
    while let Some((_, finished)) = stack.pop() {
        if let Some((_, parent)) = stack.last_mut() {
            parent.children.push(finished);
        } else {
            roots.push(finished);
        }
    }

    roots
}
