//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use orgtree::outline;
use orgtree::{EditPlan, OrgConfig, OrgDocument, Outline, Position};

/// Parse a document with the default configuration
pub fn parsed(doc: &OrgDocument) -> Outline {
    outline::parse(doc, &OrgConfig::default())
}

/// Create a document and its outline in one step
pub fn fixture(text: &str) -> (OrgDocument, Outline) {
    let doc = OrgDocument::with_text(text);
    let outline = parsed(&doc);
    (doc, outline)
}

pub fn cursor(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

/// Apply a plan and return the resulting buffer text
pub fn apply(doc: &mut OrgDocument, plan: &EditPlan) -> String {
    doc.apply(plan);
    doc.text()
}
