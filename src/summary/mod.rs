//! Human-readable explanation of a ranking.
//!
//! An externally authored narrative (e.g. from an AI service) is preferred;
//! when it is absent or blank, [`FallbackSummarizer`] builds one from the top
//! two ranked entries.

mod fallback;

pub(crate) use fallback::format_count;
pub use fallback::{generate_fallback_summary, FallbackSummarizer, HIGHLIGHT_RATING};

use crate::model::ScoredProduct;
use serde::{Deserialize, Serialize};

/// Where the summary text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    /// Caller-supplied narrative
    Narrative,
    /// Template-generated fallback
    Fallback,
}

/// Pick the caller's narrative when it has content, otherwise generate one.
#[must_use]
pub fn resolve_summary(
    ranked: &[ScoredProduct],
    narrative: Option<&str>,
    summarizer: &FallbackSummarizer,
) -> (String, SummarySource) {
    match narrative.map(str::trim).filter(|n| !n.is_empty()) {
        Some(text) => (text.to_string(), SummarySource::Narrative),
        None => (summarizer.summarize(ranked), SummarySource::Fallback),
    }
}
