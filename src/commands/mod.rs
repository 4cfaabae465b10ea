//! Command handlers module.
//!
//! - `check.rs`: conflict check for a proposed name
//! - `review.rs`: submission review with exit codes
//! - `refs.rs`: `[[reference]]` resolution
//! - `corpus.rs`: corpus summary
//! - `config.rs`: configuration display

mod check;
mod config;
mod corpus;
mod refs;
mod review;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use lorecheck::config::LorecheckConfig;
use lorecheck::storage::{EntryCorpusProvider, open_corpus};

pub use check::cmd_check;
pub use config::cmd_config;
pub use corpus::cmd_corpus;
pub use refs::cmd_refs;
pub use review::cmd_review;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Resolves the corpus path: `--corpus` wins over the configured path.
fn corpus_path(
    flag: Option<PathBuf>,
    config: &LorecheckConfig,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    flag.or_else(|| config.corpus_path.clone()).ok_or_else(|| {
        "no corpus configured: pass --corpus or set [corpus] path / LORECHECK_CORPUS_PATH".into()
    })
}

/// Opens the corpus provider for the resolved path.
fn open_provider(
    flag: Option<PathBuf>,
    config: &LorecheckConfig,
) -> Result<Box<dyn EntryCorpusProvider>, Box<dyn std::error::Error>> {
    let path = corpus_path(flag, config)?;
    Ok(open_corpus(Path::new(&path)))
}
