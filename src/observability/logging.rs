//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Default filter when nothing else is configured.
const DEFAULT_LEVEL: &str = "warn";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown log format: {other}"
            ))),
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Event filter.
    pub filter: EnvFilter,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; stderr otherwise.
    pub file: Option<PathBuf>,
    /// Filter directive that failed to parse and was replaced by the default.
    pub rejected_filter: Option<String>,
}

impl LoggingConfig {
    /// Builds logging config from file settings and the environment.
    ///
    /// Filter precedence: `LORECHECK_LOG`, then `RUST_LOG`, then `--verbose`
    /// (`debug`), then the configured level, then `warn`. Format and file can
    /// be overridden with `LORECHECK_LOG_FORMAT` and `LORECHECK_LOG_FILE`.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let directive = env_nonempty("LORECHECK_LOG")
            .or_else(|| env_nonempty("RUST_LOG"))
            .or_else(|| verbose.then(|| "debug".to_string()))
            .or_else(|| settings.and_then(|s| s.level.clone()))
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        let (filter, rejected_filter) = match EnvFilter::try_new(&directive) {
            Ok(filter) => (filter, None),
            Err(e) => (
                EnvFilter::new(DEFAULT_LEVEL),
                Some(format!("{directive} ({e})")),
            ),
        };

        let format = env_nonempty("LORECHECK_LOG_FORMAT")
            .or_else(|| settings.and_then(|s| s.format.clone()))
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();

        let file = env_nonempty("LORECHECK_LOG_FILE")
            .or_else(|| settings.and_then(|s| s.file.clone()))
            .map(PathBuf::from);

        Self {
            filter,
            format,
            file,
            rejected_filter,
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_settings_format_and_file() {
        let settings = LoggingSettings {
            level: Some("info".to_string()),
            format: Some("json".to_string()),
            file: Some("/tmp/lorecheck.log".to_string()),
        };
        let config = LoggingConfig::from_settings(Some(&settings), false);
        // Env vars may override in CI; only assert when they are absent.
        if env_nonempty("LORECHECK_LOG_FORMAT").is_none() {
            assert_eq!(config.format, LogFormat::Json);
        }
        if env_nonempty("LORECHECK_LOG_FILE").is_none() {
            assert_eq!(config.file, Some(PathBuf::from("/tmp/lorecheck.log")));
        }
    }

    #[test]
    fn test_invalid_level_falls_back_to_default() {
        if env_nonempty("LORECHECK_LOG").is_some() || env_nonempty("RUST_LOG").is_some() {
            return;
        }
        let settings = LoggingSettings {
            level: Some("lorecheck=loud".to_string()),
            ..LoggingSettings::default()
        };
        let config = LoggingConfig::from_settings(Some(&settings), false);
        assert!(
            config
                .rejected_filter
                .as_deref()
                .is_some_and(|r| r.starts_with("lorecheck=loud"))
        );
        assert_eq!(config.filter.to_string(), DEFAULT_LEVEL);

        let settings = LoggingSettings {
            level: Some("info".to_string()),
            ..LoggingSettings::default()
        };
        assert!(
            LoggingConfig::from_settings(Some(&settings), false)
                .rejected_filter
                .is_none()
        );
    }

    #[test]
    fn test_unknown_format_falls_back() {
        let settings = LoggingSettings {
            format: Some("xml".to_string()),
            ..LoggingSettings::default()
        };
        let config = LoggingConfig::from_settings(Some(&settings), false);
        if env_nonempty("LORECHECK_LOG_FORMAT").is_none() {
            assert_eq!(config.format, LogFormat::Pretty);
        }
    }
}
