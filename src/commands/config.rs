//! Config command handler.

use lorecheck::config::LorecheckConfig;

/// Config command.
pub fn cmd_config(config: &LorecheckConfig, show: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !show {
        println!("Use 'lorecheck config --show' to display the current configuration");
        return Ok(());
    }

    println!("Current Configuration");
    println!("=====================");
    println!();

    println!("Config Files Loaded:");
    if config.config_sources.is_empty() {
        println!("  (none - using defaults)");
    } else {
        for source in &config.config_sources {
            println!("  - {}", source.display());
        }
    }
    println!();

    println!(
        "Corpus: {}",
        config
            .corpus_path
            .as_ref()
            .map_or_else(|| "(not set)".to_string(), |p| p.display().to_string())
    );
    println!();

    let d = &config.detector;
    println!("Detector:");
    println!("  Min Name Length: {}", d.min_name_length);
    println!(
        "  Distance Threshold: {} (<= {} chars), {} (longer)",
        d.short_threshold, d.short_name_max_length, d.long_threshold
    );
    println!("  Min Overlap Length: {}", d.min_overlap_length);
    println!("  Max Conflicts: {}", d.max_conflicts);
    println!();

    println!("Submission:");
    println!("  Block On Exact: {}", config.submission.block_on_exact);
    println!();

    println!("Logging:");
    println!(
        "  Level: {}",
        config.logging.level.as_deref().unwrap_or("(default)")
    );
    println!(
        "  Format: {}",
        config.logging.format.as_deref().unwrap_or("pretty")
    );
    println!(
        "  File: {}",
        config.logging.file.as_deref().unwrap_or("(stderr)")
    );

    Ok(())
}
