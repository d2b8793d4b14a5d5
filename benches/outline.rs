//! Benchmarks for outline construction and providers
//!
//! Run with: cargo bench outline

use orgtree::outline;
use orgtree::{provider, OrgConfig, OrgDocument};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// A repeating three-level document with body text under every heading
fn synthetic_document(sections: usize) -> OrgDocument {
    let mut text = String::new();
    for i in 0..sections {
        text.push_str(&format!("* Section {}\nintro line\n", i));
        for j in 0..4 {
            text.push_str(&format!("** Topic {}.{}\nbody\nbody\n", i, j));
            text.push_str(&format!("*** Detail {}.{}\nnotes\n", i, j));
        }
    }
    OrgDocument::with_text(&text)
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn parse_outline(sections: usize) {
    let doc = synthetic_document(sections);
    let config = OrgConfig::default();
    divan::black_box(outline::parse(&doc, &config));
}

#[divan::bench(args = [100, 1_000])]
fn folding_and_symbols(sections: usize) {
    let doc = synthetic_document(sections);
    let config = OrgConfig::default();
    let parsed = outline::parse(&doc, &config);

    divan::black_box(provider::folding_ranges(&parsed));
    divan::black_box(provider::document_symbols(&parsed));
}
