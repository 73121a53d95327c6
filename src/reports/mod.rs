//! Report generation for ranking outcomes.
//!
//! This module provides multiple output formats for a ranking run:
//! - JSON: Structured data for programmatic integration
//! - Table: Aligned tabular terminal output
//! - Summary: Compact shell-friendly output
//! - Markdown: Human-readable documentation
//!
//! Listing titles are scraped text. The `escape` module provides the
//! helpers every renderer uses before embedding them.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat};

use crate::error::RankerError;
use crate::pipeline::RankingOutcome;
use std::io::Write;

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a ranking outcome
    fn generate(&self, outcome: &RankingOutcome, config: &ReportConfig)
        -> Result<String, RankerError>;

    /// Write report to a writer
    fn write_report(
        &self,
        outcome: &RankingOutcome,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), RankerError> {
        let report = self.generate(outcome, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Display name for a listing: title, else id, else a placeholder.
pub(crate) fn listing_name(product: &crate::model::ScoredProduct) -> &str {
    [product.title(), product.id()]
        .into_iter()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or("(untitled)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawProduct;
    use crate::pipeline::rank;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
        assert_eq!(
            create_reporter(ReportFormat::Auto).format(),
            ReportFormat::Summary
        );
        assert_eq!(
            create_reporter_with_options(ReportFormat::Table, false).format(),
            ReportFormat::Table
        );
        assert_eq!(
            create_reporter(ReportFormat::Markdown).format(),
            ReportFormat::Markdown
        );
    }

    #[test]
    fn test_ansi_color_disabled() {
        assert_eq!(ansi_color("x", "red", false), "x");
        assert_eq!(ansi_color("x", "red", true), "\x1b[31mx\x1b[0m");
        assert_eq!(ansi_color("x", "unknown", true), "x");
    }

    #[test]
    fn test_write_report_to_buffer() {
        let outcome = rank(&[RawProduct::new("a", "Kettle").with_price(20.0)], None, None);
        let mut buf = Vec::new();
        SummaryReporter::new()
            .no_color()
            .write_report(&outcome, &ReportConfig::default(), &mut buf)
            .unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Kettle"));
    }

    #[test]
    fn test_listing_name_fallbacks() {
        let outcome = rank(
            &[RawProduct::new("sku-1", " "), RawProduct::new("", "")],
            None,
            None,
        );
        let names: Vec<&str> = outcome.ranked.iter().map(listing_name).collect();
        assert!(names.contains(&"sku-1"));
        assert!(names.contains(&"(untitled)"));
    }
}
