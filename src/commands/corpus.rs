//! Corpus command handler.

use std::path::PathBuf;

use lorecheck::config::LorecheckConfig;

use super::open_provider;

/// Corpus command: per-category counts and load failures.
pub fn cmd_corpus(
    config: &LorecheckConfig,
    corpus: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = open_provider(corpus, config)?;
    let snapshot = provider.load()?;

    println!("Corpus: {}", provider.describe());
    println!("Entries: {}", snapshot.len());
    for (category, count) in snapshot.counts_by_category() {
        println!("  {category:<12} {count}");
    }

    if snapshot.is_partial() {
        println!();
        println!("Failed categories:");
        for failure in &snapshot.failed {
            println!("  {:<12} {}", failure.category, failure.cause);
        }
    }
    Ok(())
}
