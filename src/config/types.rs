//! Configuration types for product-ranker.
//!
//! Nothing here changes how listings are scored; configuration only shapes
//! output and the optional search-query builder.

use crate::query::{QueryVocabulary, DEFAULT_MAX_KEYWORDS};
use crate::reports::{ReportConfig, ReportFormat};
use crate::summary::FallbackSummarizer;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Ranking presentation
    pub ranking: RankingConfig,
    /// Fallback search-query builder
    pub query: QueryConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Report settings derived from this configuration.
    #[must_use]
    pub fn report_config(&self, source_name: Option<String>) -> ReportConfig {
        ReportConfig {
            show_breakdown: self.ranking.show_breakdown,
            limit: self.ranking.limit,
            currency_symbol: self.ranking.currency_symbol.clone(),
            source_name,
        }
    }

    /// Fallback summarizer using the configured currency symbol.
    #[must_use]
    pub fn summarizer(&self) -> FallbackSummarizer {
        FallbackSummarizer::new().with_currency_symbol(self.ranking.currency_symbol.clone())
    }

    /// Query vocabulary with the configured extra words.
    #[must_use]
    pub fn vocabulary(&self) -> QueryVocabulary {
        QueryVocabulary::bundled()
            .extended(&self.query.extra_stop_words, &self.query.extra_unit_words)
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Show per-dimension sub-scores.
    pub const fn show_breakdown(mut self, show: bool) -> Self {
        self.config.ranking.show_breakdown = show;
        self
    }

    /// Limit the number of ranked rows shown.
    pub const fn limit(mut self, limit: Option<usize>) -> Self {
        self.config.ranking.limit = limit;
        self
    }

    /// Set the currency symbol.
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.ranking.currency_symbol = symbol.into();
        self
    }

    /// Set the maximum number of query keywords.
    pub const fn max_keywords(mut self, max: usize) -> Self {
        self.config.query.max_keywords = max;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section configs
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// How rankings are presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RankingConfig {
    /// Show per-dimension sub-scores in table and markdown output
    pub show_breakdown: bool,
    /// Maximum number of ranked listings to show (all are still scored)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub limit: Option<usize>,
    /// Currency symbol prefixed to prices
    pub currency_symbol: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            show_breakdown: false,
            limit: None,
            currency_symbol: "$".to_string(),
        }
    }
}

/// Fallback search-query builder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct QueryConfig {
    /// Maximum number of keywords in a generated query
    #[schemars(range(min = 1, max = 20))]
    pub max_keywords: usize,
    /// Words dropped in addition to the bundled stop words
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_stop_words: Vec<String>,
    /// Unit words dropped in addition to the bundled ones
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_unit_words: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            extra_stop_words: Vec::new(),
            extra_unit_words: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .show_breakdown(true)
            .limit(Some(5))
            .currency_symbol("£")
            .max_keywords(4)
            .build();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.ranking.show_breakdown);
        assert_eq!(config.ranking.limit, Some(5));
        assert_eq!(config.query.max_keywords, 4);

        let report = config.report_config(Some("batch.json".to_string()));
        assert_eq!(report.currency_symbol, "£");
        assert_eq!(report.limit, Some(5));
        assert_eq!(report.source_name.as_deref(), Some("batch.json"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("ranking:\n  limit: 3\n").unwrap();
        assert_eq!(config.ranking.limit, Some(3));
        assert_eq!(config.ranking.currency_symbol, "$");
        assert_eq!(config.query.max_keywords, DEFAULT_MAX_KEYWORDS);
        assert_eq!(config.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_vocabulary_includes_extra_words() {
        let mut config = AppConfig::default();
        config.query.extra_stop_words = vec!["organic".to_string()];
        let vocab = config.vocabulary();
        assert!(vocab.is_stop_word("organic"));
        assert!(vocab.is_stop_word("the"));
    }
}
