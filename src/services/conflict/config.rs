//! Conflict detector configuration.
//!
//! Thresholds for exact, near-duplicate and overlap classification plus the
//! output cap.

/// Configuration for the name conflict detector.
///
/// # Environment Variables
///
/// | Variable | Type | Default | Description |
/// |----------|------|---------|-------------|
/// | `LORECHECK_DETECTOR_MIN_NAME_LENGTH` | usize | `2` | Trimmed names shorter than this are not checked |
/// | `LORECHECK_DETECTOR_SHORT_NAME_MAX_LENGTH` | usize | `6` | Normalized length up to which the short threshold applies |
/// | `LORECHECK_DETECTOR_SHORT_THRESHOLD` | usize | `2` | Max edit distance for short names |
/// | `LORECHECK_DETECTOR_LONG_THRESHOLD` | usize | `3` | Max edit distance for longer names |
/// | `LORECHECK_DETECTOR_MIN_OVERLAP_LENGTH` | usize | `4` | Min normalized length for substring overlap |
/// | `LORECHECK_DETECTOR_MAX_CONFLICTS` | usize | `5` | Max conflicts returned per check |
///
/// # Example
///
/// ```rust
/// use lorecheck::services::conflict::DetectorConfig;
///
/// let config = DetectorConfig::default();
/// assert_eq!(config.threshold_for(6), 2);
/// assert_eq!(config.threshold_for(7), 3);
/// assert_eq!(config.max_conflicts, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Trimmed proposed names shorter than this (in characters) yield no conflicts.
    pub min_name_length: usize,
    /// Normalized proposed length up to which `short_threshold` applies.
    pub short_name_max_length: usize,
    /// Maximum edit distance flagged for short names.
    pub short_threshold: usize,
    /// Maximum edit distance flagged for longer names.
    pub long_threshold: usize,
    /// Both normalized names must be at least this long for overlap checks.
    pub min_overlap_length: usize,
    /// Maximum number of conflicts returned.
    pub max_conflicts: usize,
}

impl DetectorConfig {
    /// Applies `LORECHECK_DETECTOR_*` environment overrides on top of `self`.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_usize("LORECHECK_DETECTOR_MIN_NAME_LENGTH") {
            self.min_name_length = v;
        }
        if let Some(v) = env_usize("LORECHECK_DETECTOR_SHORT_NAME_MAX_LENGTH") {
            self.short_name_max_length = v;
        }
        if let Some(v) = env_usize("LORECHECK_DETECTOR_SHORT_THRESHOLD") {
            self.short_threshold = v;
        }
        if let Some(v) = env_usize("LORECHECK_DETECTOR_LONG_THRESHOLD") {
            self.long_threshold = v;
        }
        if let Some(v) = env_usize("LORECHECK_DETECTOR_MIN_OVERLAP_LENGTH") {
            self.min_overlap_length = v;
        }
        if let Some(v) = env_usize("LORECHECK_DETECTOR_MAX_CONFLICTS") {
            self.max_conflicts = v;
        }
        self
    }

    /// Returns the maximum flagged edit distance for a normalized name length.
    #[must_use]
    pub const fn threshold_for(&self, normalized_length: usize) -> usize {
        if normalized_length <= self.short_name_max_length {
            self.short_threshold
        } else {
            self.long_threshold
        }
    }

    /// Builder method to set the minimum name length.
    #[must_use]
    pub const fn with_min_name_length(mut self, length: usize) -> Self {
        self.min_name_length = length;
        self
    }

    /// Builder method to set both edit-distance thresholds.
    #[must_use]
    pub const fn with_thresholds(mut self, short: usize, long: usize) -> Self {
        self.short_threshold = short;
        self.long_threshold = long;
        self
    }

    /// Builder method to set the short name boundary.
    #[must_use]
    pub const fn with_short_name_max_length(mut self, length: usize) -> Self {
        self.short_name_max_length = length;
        self
    }

    /// Builder method to set the minimum overlap length.
    #[must_use]
    pub const fn with_min_overlap_length(mut self, length: usize) -> Self {
        self.min_overlap_length = length;
        self
    }

    /// Builder method to set the output cap.
    #[must_use]
    pub const fn with_max_conflicts(mut self, max: usize) -> Self {
        self.max_conflicts = max;
        self
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_name_length: 2,
            short_name_max_length: 6,
            short_threshold: 2,
            long_threshold: 3,
            min_overlap_length: 4,
            max_conflicts: 5,
        }
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
