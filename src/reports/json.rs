//! JSON report generator.

use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::diagnostics::BatchIssue;
use crate::error::{RankerError, ReportErrorKind};
use crate::model::ScoredProduct;
use crate::pipeline::{OriginalComparison, RankingOutcome};
use crate::scoring::WeightVector;
use crate::summary::SummarySource;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        outcome: &RankingOutcome,
        config: &ReportConfig,
    ) -> Result<String, RankerError> {
        let shown = config.visible_rows(outcome.ranked.len());
        let report = JsonReport {
            metadata: JsonMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
                source: config.source_name.clone(),
                total_listings: outcome.ranked.len(),
            },
            ranked: &outcome.ranked[..shown],
            summary: &outcome.summary,
            summary_source: outcome.summary_source,
            sentiment_applied: outcome.sentiment_applied,
            weights: &outcome.weights,
            comparison: outcome.comparison.as_ref(),
            issues: &outcome.issues,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| {
            RankerError::report(
                "JSON ranking report",
                ReportErrorKind::JsonSerialization(e.to_string()),
            )
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    metadata: JsonMetadata,
    ranked: &'a [ScoredProduct],
    summary: &'a str,
    summary_source: SummarySource,
    sentiment_applied: bool,
    weights: &'a WeightVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<&'a OriginalComparison>,
    issues: &'a [BatchIssue],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    total_listings: usize,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawProduct;
    use crate::pipeline::rank;
    use serde_json::Value;

    fn render(outcome: &RankingOutcome, config: &ReportConfig) -> Value {
        let text = JsonReporter::new().generate(outcome, config).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_json_report_shape() {
        let outcome = rank(
            &[
                RawProduct::new("a", "Kettle").with_price(20.0).as_original(),
                RawProduct::new("b", "Kettle").with_price(40.0),
            ],
            None,
            None,
        );
        let json = render(&outcome, &ReportConfig::default());

        assert_eq!(json["metadata"]["tool"]["name"], "product-ranker");
        assert_eq!(json["metadata"]["totalListings"], 2);
        assert_eq!(json["summarySource"], "fallback");
        assert_eq!(json["sentimentApplied"], false);
        assert_eq!(json["weights"]["sentiment"], 0.0);
        assert_eq!(json["comparison"]["rank"], 1);

        let first = &json["ranked"][0];
        assert_eq!(first["id"], "a");
        assert_eq!(first["isBestValue"], true);
        assert_eq!(first["unitPrice"], 20.0);
        let breakdown = first["breakdown"].as_object().unwrap();
        assert_eq!(breakdown.len(), 6);
        for key in ["unitPrice", "rating", "sentiment", "reviewCount", "shipping", "price"] {
            assert!(breakdown.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_unavailable_unit_price_is_null() {
        let outcome = rank(&[RawProduct::new("a", "No price")], None, None);
        let json = render(&outcome, &ReportConfig::default());
        assert!(json["ranked"][0]["unitPrice"].is_null());
        assert_eq!(json["issues"][0]["kind"], "missing-price");
    }

    #[test]
    fn test_limit_truncates_ranked_only() {
        let batch: Vec<RawProduct> = (1..=4)
            .map(|i| RawProduct::new(format!("p{i}"), "Item").with_price(f64::from(i)))
            .collect();
        let outcome = rank(&batch, None, None);
        let config = ReportConfig {
            limit: Some(1),
            ..ReportConfig::default()
        };
        let json = render(&outcome, &config);
        assert_eq!(json["ranked"].as_array().unwrap().len(), 1);
        assert_eq!(json["metadata"]["totalListings"], 4);
    }

    #[test]
    fn test_compact_output() {
        let outcome = rank(&[RawProduct::new("a", "Kettle")], None, None);
        let text = JsonReporter::new()
            .pretty(false)
            .generate(&outcome, &ReportConfig::default())
            .unwrap();
        assert!(!text.contains('\n'));
    }
}
