//! Refs command handler.

use std::io::Read;
use std::path::PathBuf;

use lorecheck::config::LorecheckConfig;
use lorecheck::services::{ResolvedSegment, resolve_references};

use super::{OutputFormat, open_provider};

/// Refs command.
///
/// Reads body text from the argument, `--file`, or stdin, in that order.
pub fn cmd_refs(
    config: &LorecheckConfig,
    text: Option<String>,
    file: Option<PathBuf>,
    corpus: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        },
    };

    let provider = open_provider(corpus, config)?;
    let snapshot = provider.load()?;
    let segments = resolve_references(&body, &snapshot.entries);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&segments)?);
        },
        OutputFormat::Table => print_links(&segments),
    }
    Ok(())
}

fn print_links(segments: &[ResolvedSegment]) {
    let mut links = 0;
    let mut dangling = 0;

    for segment in segments {
        let ResolvedSegment::Link { target, entry, .. } = segment else {
            continue;
        };
        links += 1;
        match entry {
            Some(entry) => println!("  [[{target}]] -> {entry} #{}", entry.id),
            None => {
                dangling += 1;
                println!("  [[{target}]] -> (unresolved)");
            },
        }
    }

    println!("{links} reference(s), {dangling} unresolved");
}
