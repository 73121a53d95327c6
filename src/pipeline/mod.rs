//! Pipeline orchestration for ranking runs.
//!
//! Ties the pure core together (diagnostics, scoring, summary selection,
//! original-item comparison) and provides the input/output plumbing shared by
//! the CLI command handlers.

mod input;
mod output;

pub use input::{
    load_request, load_sentiments, parse_request, parse_sentiments, read_source, RankingRequest,
};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};

use crate::diagnostics::{inspect_batch, BatchIssue, IssueSeverity};
use crate::model::{RawProduct, ScoredProduct, SentimentMap};
use crate::scoring::{score_products, select_weights, SentimentSignal, WeightVector};
use crate::summary::{resolve_summary, FallbackSummarizer, SummarySource};
use serde::Serialize;

/// Exit codes for scripting and CI use
pub mod exit_codes {
    /// Ranking completed
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// How the user's original listing fared against the rest of the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalComparison {
    /// Id of the original listing
    pub original_id: String,
    /// 1-based position in the ranking
    pub rank: usize,
    /// The original is itself the best value
    pub is_best_value: bool,
    /// Best-value score minus the original's score
    pub score_gap: u8,
    /// Per-unit saving of the best value relative to the original, in
    /// percent. Negative when the best value costs more per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_savings_percent: Option<f64>,
}

impl OriginalComparison {
    /// Compare the single original listing with the best value.
    ///
    /// Returns `None` unless exactly one ranked listing is marked original.
    #[must_use]
    pub fn from_ranking(ranked: &[ScoredProduct]) -> Option<Self> {
        let mut originals = ranked.iter().enumerate().filter(|(_, p)| p.is_original());
        let (position, original) = originals.next()?;
        if originals.next().is_some() {
            return None;
        }
        let best = ranked.first()?;

        let unit_savings_percent = match (original.unit_price.finite(), best.unit_price.finite()) {
            (Some(theirs), Some(ours)) if theirs > 0.0 => Some((theirs - ours) / theirs * 100.0),
            _ => None,
        };

        Some(Self {
            original_id: original.id().to_string(),
            rank: position + 1,
            is_best_value: position == 0,
            score_gap: best.score.saturating_sub(original.score),
            unit_savings_percent,
        })
    }
}

/// Everything a ranking run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingOutcome {
    /// Listings sorted by descending score
    pub ranked: Vec<ScoredProduct>,
    /// Narrative or generated explanation
    pub summary: String,
    pub summary_source: SummarySource,
    /// Whether the with-sentiment weight vector was used
    pub sentiment_applied: bool,
    pub weights: WeightVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<OriginalComparison>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<BatchIssue>,
}

impl RankingOutcome {
    /// The best-value listing, if the batch was non-empty
    #[must_use]
    pub fn best_value(&self) -> Option<&ScoredProduct> {
        self.ranked.first()
    }
}

/// Rank a batch with the default summarizer.
#[must_use]
pub fn rank(
    products: &[RawProduct],
    sentiments: Option<&SentimentMap>,
    narrative: Option<&str>,
) -> RankingOutcome {
    rank_with(products, sentiments, narrative, &FallbackSummarizer::new())
}

/// Rank a batch, generating any fallback summary with `summarizer`.
///
/// Pure apart from logging: diagnostics are emitted at `warn`/`debug` and
/// also returned on the outcome.
#[must_use]
pub fn rank_with(
    products: &[RawProduct],
    sentiments: Option<&SentimentMap>,
    narrative: Option<&str>,
    summarizer: &FallbackSummarizer,
) -> RankingOutcome {
    let issues = inspect_batch(products, sentiments);
    for issue in &issues {
        let subject = issue.product_id.as_deref().unwrap_or("batch");
        match issue.severity {
            IssueSeverity::Warning => tracing::warn!("{subject}: {}", issue.message),
            IssueSeverity::Info => tracing::debug!("{subject}: {}", issue.message),
        }
    }

    let sentiment_applied = SentimentSignal::new(sentiments).is_available();
    let ranked = score_products(products, sentiments);
    let (summary, summary_source) = resolve_summary(&ranked, narrative, summarizer);
    let comparison = OriginalComparison::from_ranking(&ranked);

    if let Some(best) = ranked.first() {
        tracing::info!(
            "Ranked {} listing(s); best value is {} ({}/100)",
            ranked.len(),
            best.id(),
            best.score
        );
    }

    RankingOutcome {
        ranked,
        summary,
        summary_source,
        sentiment_applied,
        weights: select_weights(sentiment_applied),
        comparison,
        issues,
    }
}

impl RankingRequest {
    /// Rank this request's batch.
    #[must_use]
    pub fn rank(&self, summarizer: &FallbackSummarizer) -> RankingOutcome {
        rank_with(
            &self.products,
            self.sentiments.as_ref(),
            self.narrative.as_deref(),
            summarizer,
        )
    }
}
