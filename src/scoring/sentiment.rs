//! Adapter for externally supplied sentiment scores.

use crate::model::SentimentMap;

/// Sentiment signal for one batch.
///
/// Wraps the optional map handed over by the narrative/sentiment service. An
/// absent or empty map disables the dimension for the whole batch; a map that
/// covers only some products still enables it, and uncovered products score 0.
#[derive(Debug, Clone, Copy)]
pub struct SentimentSignal<'a> {
    map: Option<&'a SentimentMap>,
}

impl<'a> SentimentSignal<'a> {
    #[must_use]
    pub fn new(map: Option<&'a SentimentMap>) -> Self {
        Self {
            map: map.filter(|m| !m.is_empty()),
        }
    }

    /// Whether the sentiment dimension takes part in this batch.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.map.is_some()
    }

    /// Sub-score for a product id, taken verbatim from the map.
    ///
    /// Missing ids and non-finite values score 0. Out-of-range values are
    /// passed through; the composite clamp absorbs them.
    #[must_use]
    pub fn score_for(&self, id: &str) -> f64 {
        self.map
            .and_then(|m| m.get(id))
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Number of entries in the underlying map.
    #[must_use]
    pub fn coverage(&self) -> usize {
        self.map.map_or(0, SentimentMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> SentimentMap {
        entries.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_absent_map_disables_dimension() {
        let signal = SentimentSignal::new(None);
        assert!(!signal.is_available());
        assert_eq!(signal.score_for("a"), 0.0);
    }

    #[test]
    fn test_empty_map_disables_dimension() {
        let empty = SentimentMap::new();
        let signal = SentimentSignal::new(Some(&empty));
        assert!(!signal.is_available());
        assert_eq!(signal.coverage(), 0);
    }

    #[test]
    fn test_partial_map_scores_missing_as_zero() {
        let m = map(&[("a", 82.0)]);
        let signal = SentimentSignal::new(Some(&m));
        assert!(signal.is_available());
        assert_eq!(signal.score_for("a"), 82.0);
        assert_eq!(signal.score_for("b"), 0.0);
    }

    #[test]
    fn test_values_pass_through_verbatim() {
        let m = map(&[("hot", 140.0), ("bad", f64::NAN)]);
        let signal = SentimentSignal::new(Some(&m));
        assert_eq!(signal.score_for("hot"), 140.0);
        assert_eq!(signal.score_for("bad"), 0.0);
    }
}
