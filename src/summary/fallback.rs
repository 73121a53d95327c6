//! Template-based explanation of a ranking.

use crate::model::ScoredProduct;

/// Ratings at or above this value are called out in the summary.
pub const HIGHLIGHT_RATING: f64 = 4.5;

/// Builds a deterministic paragraph explaining the winner of a ranking.
///
/// Used whenever no external narrative is available.
#[derive(Debug, Clone)]
pub struct FallbackSummarizer {
    currency_symbol: String,
}

impl FallbackSummarizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            currency_symbol: "$".to_string(),
        }
    }

    /// Set the currency symbol used for per-unit prices.
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Summarize an already-ranked list. Empty input gives an empty string.
    #[must_use]
    pub fn summarize(&self, ranked: &[ScoredProduct]) -> String {
        let Some(best) = ranked.first() else {
            return String::new();
        };

        let mut sentences = vec![format!(
            "{} is the best value with a score of {}/100.",
            display_name(best),
            best.score
        )];

        if best.quantity > 1 {
            if let Some(per_unit) = best.unit_price.finite() {
                sentences.push(format!(
                    "With {} units, it works out to {}{:.2} per unit.",
                    best.quantity, self.currency_symbol, per_unit
                ));
            }
        }

        if best.breakdown.shipping >= 100.0 {
            let prime = best.product.shipping.as_ref().is_some_and(|s| s.is_prime);
            sentences.push(if prime {
                "It ships free with Prime.".to_string()
            } else {
                "It ships free.".to_string()
            });
        }

        if let Some(rating) = best.product.rating.filter(|r| *r >= HIGHLIGHT_RATING) {
            sentences.push(format!(
                "It is rated {rating:.1} out of 5 across {} reviews.",
                format_count(best.product.review_count)
            ));
        }

        if let Some(runner_up) = ranked.get(1) {
            sentences.push(format!(
                "The runner-up is {} with a score of {}/100.",
                display_name(runner_up),
                runner_up.score
            ));
        }

        sentences.join(" ")
    }
}

impl Default for FallbackSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the fallback summary with default settings.
#[must_use]
pub fn generate_fallback_summary(ranked: &[ScoredProduct]) -> String {
    FallbackSummarizer::new().summarize(ranked)
}

/// Title, falling back to the id when the scraper produced no title.
fn display_name(item: &ScoredProduct) -> &str {
    let title = item.title().trim();
    if !title.is_empty() {
        return title;
    }
    let id = item.id().trim();
    if id.is_empty() {
        "This listing"
    } else {
        id
    }
}

/// Format a count with thousands separators.
#[must_use]
pub(crate) fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
