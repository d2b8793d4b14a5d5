use anyhow::{Context, Result};
use clap::Parser;

use orgtree::{clock, outline, provider, OrgConfig, OrgDocument, Outline};

mod cli;

use cli::CliArgs;

fn main() -> Result<()> {
    orgtree::tracing::init();
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => OrgConfig::load(path),
        None => OrgConfig::default(),
    };

    let doc = OrgDocument::from_file(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let parsed = outline::parse(&doc, &config);

    if let Some(line) = args.cursor_line() {
        let range = parsed
            .subtree_at(line)
            .with_context(|| format!("line {}", line + 1))?;
        println!("subtree: lines {}-{}", range.start + 1, range.end);
        return Ok(());
    }

    if args.folds {
        for range in provider::folding_ranges(&parsed) {
            println!("{}-{}", range.start_line + 1, range.end_line);
        }
        return Ok(());
    }

    if args.json {
        let symbols = provider::document_symbols(&parsed);
        println!("{}", serde_json::to_string_pretty(&symbols)?);
        return Ok(());
    }

    print_tree(&doc, &parsed, &config);
    Ok(())
}

/// Print the heading arena as an indented tree, marking running clocks
fn print_tree(doc: &OrgDocument, parsed: &Outline, config: &OrgConfig) {
    if parsed.is_empty() {
        println!("(no headings)");
        return;
    }

    for (index, node) in parsed.nodes.iter().enumerate() {
        let clocked = if clock::is_clocked_in(doc, parsed, index, config) {
            "  [clocked in]"
        } else {
            ""
        };
        println!(
            "{}{} (lines {}-{}){}",
            "  ".repeat(node.level.saturating_sub(1)),
            node.title,
            node.start_line + 1,
            node.end_line,
            clocked
        );
    }
}
