//! Configuration management.
//!
//! Configuration comes from a TOML file with environment overrides:
//!
//! ```toml
//! [corpus]
//! path = "~/almanac"
//!
//! [detector]
//! short_threshold = 2
//! long_threshold = 3
//! max_conflicts = 5
//!
//! [submission]
//! block_on_exact = true
//!
//! [logging]
//! level = "info"
//! format = "pretty"   # or "json"
//! file = "/var/log/lorecheck.log"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::services::conflict::DetectorConfig;
use crate::services::submission::SubmissionPolicy;

/// Main configuration for lorecheck.
#[derive(Debug, Clone, Default)]
pub struct LorecheckConfig {
    /// Corpus file or directory.
    pub corpus_path: Option<PathBuf>,
    /// Conflict detector settings.
    pub detector: DetectorConfig,
    /// Submission policy.
    pub submission: SubmissionPolicy,
    /// Logging settings as written in the file.
    pub logging: LoggingSettings,
    /// Config files that were loaded, in order.
    pub config_sources: Vec<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Corpus section.
    pub corpus: Option<ConfigFileCorpus>,
    /// Detector section.
    pub detector: Option<ConfigFileDetector>,
    /// Submission section.
    pub submission: Option<ConfigFileSubmission>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

/// Corpus section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileCorpus {
    /// Corpus file or directory.
    pub path: Option<String>,
}

/// Detector section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileDetector {
    /// Minimum trimmed name length.
    pub min_name_length: Option<usize>,
    /// Short name boundary.
    pub short_name_max_length: Option<usize>,
    /// Threshold for short names.
    pub short_threshold: Option<usize>,
    /// Threshold for longer names.
    pub long_threshold: Option<usize>,
    /// Minimum length for substring overlap.
    pub min_overlap_length: Option<usize>,
    /// Output cap.
    pub max_conflicts: Option<usize>,
}

/// Submission section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileSubmission {
    /// Whether exact duplicates block submission.
    pub block_on_exact: Option<bool>,
}

/// Logging section in config file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Default filter level (`trace` .. `error`) or full filter directive.
    pub level: Option<String>,
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Log file path; stderr when unset.
    pub file: Option<String>,
}

impl LorecheckConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        let mut config = Self::from_config_file(file);
        config.config_sources.push(path.to_path_buf());
        Ok(config)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/.config/lorecheck/` on Linux,
    ///    `~/Library/Application Support/lorecheck/` on macOS)
    /// 2. `~/.config/lorecheck/` for Unix-style setups on macOS
    ///
    /// Returns default configuration if no config file is found or the
    /// found file is invalid.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("lorecheck").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("lorecheck")
                .join("config.toml"),
        ];

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
                },
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `LorecheckConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(path) = file.corpus.and_then(|c| c.path) {
            config.corpus_path = Some(expand_home(&path));
        }
        if let Some(detector) = file.detector {
            let d = &mut config.detector;
            if let Some(v) = detector.min_name_length {
                d.min_name_length = v;
            }
            if let Some(v) = detector.short_name_max_length {
                d.short_name_max_length = v;
            }
            if let Some(v) = detector.short_threshold {
                d.short_threshold = v;
            }
            if let Some(v) = detector.long_threshold {
                d.long_threshold = v;
            }
            if let Some(v) = detector.min_overlap_length {
                d.min_overlap_length = v;
            }
            if let Some(v) = detector.max_conflicts {
                d.max_conflicts = v;
            }
        }
        if let Some(v) = file.submission.and_then(|s| s.block_on_exact) {
            config.submission.block_on_exact = v;
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        config
    }

    /// Applies environment overrides.
    ///
    /// | Variable | Effect |
    /// |----------|--------|
    /// | `LORECHECK_CORPUS_PATH` | Corpus file or directory |
    /// | `LORECHECK_BLOCK_ON_EXACT` | `false`/`0` lets exact duplicates through |
    /// | `LORECHECK_DETECTOR_*` | See [`DetectorConfig`] |
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("LORECHECK_CORPUS_PATH") {
            if !path.trim().is_empty() {
                self.corpus_path = Some(expand_home(path.trim()));
            }
        }
        if let Ok(v) = std::env::var("LORECHECK_BLOCK_ON_EXACT") {
            self.submission.block_on_exact = v.to_lowercase() != "false" && v != "0";
        }
        self.detector = self.detector.with_env_overrides();
        self
    }

    /// Sets the corpus path.
    #[must_use]
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = Some(path.into());
        self
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(base_dirs) = directories::BaseDirs::new() {
            return base_dirs.home_dir().join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LorecheckConfig::new();
        assert!(config.corpus_path.is_none());
        assert_eq!(config.detector, DetectorConfig::default());
        assert!(config.submission.block_on_exact);
        assert!(config.config_sources.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[corpus]
path = "/srv/almanac"

[detector]
long_threshold = 4
max_conflicts = 8

[submission]
block_on_exact = false

[logging]
format = "json"
"#,
        )
        .unwrap();

        let config = LorecheckConfig::load_from_file(&path).unwrap();
        assert_eq!(config.corpus_path, Some(PathBuf::from("/srv/almanac")));
        assert_eq!(config.detector.long_threshold, 4);
        assert_eq!(config.detector.short_threshold, 2);
        assert_eq!(config.detector.max_conflicts, 8);
        assert!(!config.submission.block_on_exact);
        assert_eq!(config.logging.format.as_deref(), Some("json"));
        assert_eq!(config.config_sources, vec![path]);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nbackend = \"sqlite\"\n").unwrap();
        assert!(LorecheckConfig::load_from_file(&path).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = LorecheckConfig::load_from_file(Path::new("/nonexistent/config.toml"));
        assert!(err.is_err());
    }

    #[test]
    fn test_expand_home_passthrough() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("rel/path"), PathBuf::from("rel/path"));
    }
}
