//! Binary entry point for lorecheck.
//!
//! This binary provides the CLI interface for lore name-conflict checks.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]

mod commands;

use clap::{Parser, Subcommand};
use commands::{OutputFormat, cmd_check, cmd_config, cmd_corpus, cmd_refs, cmd_review};
use lorecheck::config::LorecheckConfig;
use lorecheck::observability::{self, InitOptions};
use std::path::PathBuf;
use std::process::ExitCode;

/// Lorecheck - name-conflict detection for lore almanacs.
#[derive(Parser)]
#[command(name = "lorecheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "LORECHECK_CONFIG_PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Check a proposed name for conflicts.
    Check {
        /// The proposed entry name.
        name: String,

        /// Corpus file or directory.
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Review a proposed name for submission.
    ///
    /// Exits 0 when clear or warned, 2 when blocked, 3 when the corpus is
    /// unavailable.
    Review {
        /// The proposed entry name.
        name: String,

        /// Corpus file or directory.
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Do not block on exact duplicates.
        #[arg(long)]
        allow_exact: bool,
    },

    /// Resolve [[references]] in body text.
    Refs {
        /// Body text; read from --file or stdin when omitted.
        text: Option<String>,

        /// Read body text from a file.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Corpus file or directory.
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Summarize the corpus.
    Corpus {
        /// Corpus file or directory.
        #[arg(long)]
        corpus: Option<PathBuf>,
    },

    /// Manage configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_config(
        &config.logging,
        InitOptions {
            verbose: cli.verbose,
        },
    ) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(
    cli: Cli,
    config: &LorecheckConfig,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check {
            name,
            corpus,
            format,
        } => cmd_check(config, &name, corpus, format).map(|()| ExitCode::SUCCESS),

        Commands::Review {
            name,
            corpus,
            allow_exact,
        } => cmd_review(config, &name, corpus, allow_exact),

        Commands::Refs {
            text,
            file,
            corpus,
            format,
        } => cmd_refs(config, text, file, corpus, format).map(|()| ExitCode::SUCCESS),

        Commands::Corpus { corpus } => cmd_corpus(config, corpus).map(|()| ExitCode::SUCCESS),

        Commands::Config { show } => cmd_config(config, show).map(|()| ExitCode::SUCCESS),
    }
}

/// Loads configuration and applies environment overrides.
///
/// An explicit path (flag or `LORECHECK_CONFIG_PATH`) must load; otherwise
/// the default location is tried.
fn load_config(path: Option<&str>) -> Result<LorecheckConfig, Box<dyn std::error::Error>> {
    let config = match path.filter(|p| !p.trim().is_empty()) {
        Some(config_path) => LorecheckConfig::load_from_file(std::path::Path::new(config_path))?,
        None => LorecheckConfig::load_default(),
    };
    Ok(config.with_env_overrides())
}
