//! Configuration validation for product-ranker.

use super::defaults::MAX_QUERY_KEYWORDS;
use super::types::{AppConfig, OutputConfig, QueryConfig, RankingConfig};
use crate::error::{RankerError, Result};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Fail with every violation joined into one [`RankerError::Config`].
    fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(RankerError::config(messages.join("; ")))
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.ranking.validate());
        errors.extend(self.query.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for RankingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.limit == Some(0) {
            errors.push(ConfigError::new(
                "ranking.limit",
                "Limit must be at least 1 (omit it to show every listing)",
            ));
        }
        if self.currency_symbol.chars().any(char::is_control) {
            errors.push(ConfigError::new(
                "ranking.currency_symbol",
                "Currency symbol must not contain control characters",
            ));
        }
        errors
    }
}

impl Validatable for QueryConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(1..=MAX_QUERY_KEYWORDS).contains(&self.max_keywords) {
            errors.push(ConfigError::new(
                "query.max_keywords",
                format!(
                    "max_keywords must be between 1 and {MAX_QUERY_KEYWORDS}, got {}",
                    self.max_keywords
                ),
            ));
        }
        for (field, words) in [
            ("query.extra_stop_words", &self.extra_stop_words),
            ("query.extra_unit_words", &self.extra_unit_words),
        ] {
            if words.iter().any(|w| w.split_whitespace().count() != 1) {
                errors.push(ConfigError::new(
                    field,
                    "Each entry must be a single non-empty word",
                ));
            }
        }
        errors
    }
}
