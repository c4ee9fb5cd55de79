//! Validation configuration.
//!
//! Defaults match the built-in policy; every value can be overridden from the
//! environment.

use thiserror::Error;

/// Environment variable for the minimum source length.
pub const ENV_SOURCE_MIN_LEN: &str = "EVENTFORGE_SOURCE_MIN_LEN";

/// Environment variable for the maximum source length.
pub const ENV_SOURCE_MAX_LEN: &str = "EVENTFORGE_SOURCE_MAX_LEN";

/// Environment variable listing namespace separator characters, e.g. `.-:/`.
pub const ENV_SOURCE_SEPARATORS: &str = "EVENTFORGE_SOURCE_SEPARATORS";

const DEFAULT_MIN_LEN: usize = 5;
const DEFAULT_MAX_LEN: usize = 100;
const DEFAULT_SEPARATORS: [char; 4] = ['.', '-', ':', '/'];

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A value could not be parsed.
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidValue { key: &'static str, value: String },

    /// Minimum length exceeds maximum length.
    #[error("source length bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: usize, max: usize },

    /// Minimum length of zero would admit blank sources.
    #[error("minimum source length must be at least 1")]
    ZeroMinimum,

    /// No separator characters configured.
    #[error("at least one non-whitespace source separator is required")]
    NoSeparators,
}

/// Policy applied by [`SourceRule`](crate::SourceRule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePolicy {
    /// Minimum length in characters, inclusive.
    pub min_len: usize,

    /// Maximum length in characters, inclusive.
    pub max_len: usize,

    /// Namespace separators; a source must contain at least one.
    pub separators: Vec<char>,
}

impl Default for SourcePolicy {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            separators: DEFAULT_SEPARATORS.to_vec(),
        }
    }
}

impl SourcePolicy {
    /// Checks that the policy is internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len == 0 {
            return Err(ConfigError::ZeroMinimum);
        }
        if self.min_len > self.max_len {
            return Err(ConfigError::InvertedBounds {
                min: self.min_len,
                max: self.max_len,
            });
        }
        if self.separators.is_empty() {
            return Err(ConfigError::NoSeparators);
        }
        Ok(())
    }
}

/// Settings for the standard pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    pub source: SourcePolicy,
}

impl ValidationConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_len = parse_len(&lookup, ENV_SOURCE_MIN_LEN)?.unwrap_or(DEFAULT_MIN_LEN);
        let max_len = parse_len(&lookup, ENV_SOURCE_MAX_LEN)?.unwrap_or(DEFAULT_MAX_LEN);

        let separators = match lookup(ENV_SOURCE_SEPARATORS) {
            Some(raw) => parse_separators(&raw),
            None => DEFAULT_SEPARATORS.to_vec(),
        };

        let config = Self {
            source: SourcePolicy {
                min_len,
                max_len,
                separators,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Overrides the source length bounds.
    pub fn with_source_bounds(mut self, min_len: usize, max_len: usize) -> Self {
        self.source.min_len = min_len;
        self.source.max_len = max_len;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.source.validate()
    }
}

fn parse_len<F>(lookup: &F, key: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue { key, value: raw })
        })
        .transpose()
}

fn parse_separators(raw: &str) -> Vec<char> {
    let mut separators: Vec<char> = Vec::new();
    for c in raw.chars().filter(|c| !c.is_whitespace()) {
        if !separators.contains(&c) {
            separators.push(c);
        }
    }
    separators
}
