//! Check command handler.

use std::path::PathBuf;

use lorecheck::config::LorecheckConfig;
use lorecheck::models::Conflict;
use lorecheck::services::NameConflictDetector;

use super::{OutputFormat, open_provider};

/// Check command.
///
/// Unlike `review`, a corpus load failure is an error here.
pub fn cmd_check(
    config: &LorecheckConfig,
    name: &str,
    corpus: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = open_provider(corpus, config)?;
    let snapshot = provider.load()?;
    for failure in &snapshot.failed {
        eprintln!(
            "warning: category '{}' not checked: {}",
            failure.category, failure.cause
        );
    }

    let detector = NameConflictDetector::new(config.detector.clone());
    let conflicts = detector.check(name, &snapshot.entries);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&conflicts)?);
        },
        OutputFormat::Table => print_table(name, &conflicts),
    }
    Ok(())
}

fn print_table(name: &str, conflicts: &[Conflict]) {
    if conflicts.is_empty() {
        println!("No conflicts for \"{name}\"");
        return;
    }

    println!("{:<8} {:<15} {:<30} {}", "SEVERITY", "KIND", "MATCH", "CATEGORY");
    for conflict in conflicts {
        println!(
            "{:<8} {:<15} {:<30} {}",
            conflict.severity.as_str(),
            conflict.kind.as_str(),
            conflict.matched_name,
            conflict.matched_category
        );
    }
    println!();
    for conflict in conflicts {
        println!("{conflict}");
    }
}
