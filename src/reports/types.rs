//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: table if TTY, summary otherwise
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Aligned table for terminal (colored)
    Table,
    /// Brief summary output
    Summary,
    /// Human-readable Markdown
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Summary => write!(f, "summary"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Add per-dimension sub-score columns
    pub show_breakdown: bool,
    /// Maximum ranked rows to show; never affects scoring
    pub limit: Option<usize>,
    /// Currency symbol prefixed to amounts
    pub currency_symbol: String,
    /// Where the batch came from (file name), shown in headers
    pub source_name: Option<String>,
}

impl ReportConfig {
    /// Number of rows to show out of `total`.
    #[must_use]
    pub fn visible_rows(&self, total: usize) -> usize {
        self.limit.map_or(total, |limit| limit.min(total))
    }

    /// Format an optional amount with the configured currency symbol.
    #[must_use]
    pub fn money(&self, amount: Option<f64>) -> String {
        amount.map_or_else(
            || "-".to_string(),
            |value| format!("{}{value:.2}", self.currency_symbol),
        )
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_breakdown: false,
            limit: None,
            currency_symbol: "$".to_string(),
            source_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let name = format.to_string();
            assert_eq!(ReportFormat::from_str(&name, true).unwrap(), *format);
        }
    }

    #[test]
    fn test_visible_rows() {
        let mut config = ReportConfig::default();
        assert_eq!(config.visible_rows(5), 5);
        config.limit = Some(3);
        assert_eq!(config.visible_rows(5), 3);
        assert_eq!(config.visible_rows(2), 2);
    }

    #[test]
    fn test_money() {
        let config = ReportConfig {
            currency_symbol: "€".to_string(),
            ..ReportConfig::default()
        };
        assert_eq!(config.money(Some(4.0)), "€4.00");
        assert_eq!(config.money(None), "-");
    }
}
