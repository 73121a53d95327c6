//! Dimension weights for the composite score.

use crate::model::{Dimension, ScoreBreakdown};
use serde::{Deserialize, Serialize};

/// Weights for composite score calculation (sum to 1.0).
///
/// Only two vectors exist. The without-sentiment vector is a fixed table, not
/// a proportional rescale of the with-sentiment one; both are kept verbatim
/// because rankings depend on the exact values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightVector {
    pub unit_price: f64,
    pub rating: f64,
    pub sentiment: f64,
    pub review_count: f64,
    pub shipping: f64,
    pub price: f64,
}

impl WeightVector {
    /// Used when the batch comes with a non-empty sentiment map.
    pub const WITH_SENTIMENT: Self = Self {
        unit_price: 0.30,
        rating: 0.20,
        sentiment: 0.15,
        review_count: 0.10,
        shipping: 0.15,
        price: 0.10,
    };

    /// Used otherwise; the sentiment share is handed to the other five.
    pub const WITHOUT_SENTIMENT: Self = Self {
        unit_price: 0.35,
        rating: 0.25,
        sentiment: 0.0,
        review_count: 0.15,
        shipping: 0.15,
        price: 0.10,
    };

    /// Weight for one dimension.
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::UnitPrice => self.unit_price,
            Dimension::Rating => self.rating,
            Dimension::Sentiment => self.sentiment,
            Dimension::ReviewCount => self.review_count,
            Dimension::Shipping => self.shipping,
            Dimension::Price => self.price,
        }
    }

    /// Return weights as an array in [`Dimension::ALL`] order.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 6] {
        [
            self.unit_price,
            self.rating,
            self.sentiment,
            self.review_count,
            self.shipping,
            self.price,
        ]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Weighted sum of a breakdown, before rounding and clamping.
    #[must_use]
    pub fn combine(&self, breakdown: &ScoreBreakdown) -> f64 {
        breakdown.iter().map(|(d, s)| s * self.get(d)).sum()
    }
}

/// Pick the weight vector for a batch.
///
/// `sentiment_available` is a batch-level decision: true iff the caller
/// supplied a non-empty sentiment map, even if it covers only some products.
#[must_use]
pub const fn select_weights(sentiment_available: bool) -> WeightVector {
    if sentiment_available {
        WeightVector::WITH_SENTIMENT
    } else {
        WeightVector::WITHOUT_SENTIMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        for sentiment in [true, false] {
            let sum = select_weights(sentiment).total();
            assert!(
                (sum - 1.0).abs() < 1e-9,
                "sentiment={sentiment} weights sum to {sum}, expected 1.0"
            );
        }
    }

    #[test]
    fn test_without_sentiment_zeroes_sentiment() {
        let w = select_weights(false);
        assert_eq!(w.sentiment, 0.0);
        let others: f64 = Dimension::ALL
            .iter()
            .filter(|d| **d != Dimension::Sentiment)
            .map(|d| w.get(*d))
            .sum();
        assert!((others - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_sentiment_vector() {
        let w = select_weights(true);
        assert_eq!(w.sentiment, 0.15);
        assert_eq!(w.unit_price, 0.30);
        assert_eq!(w.rating, 0.20);
        assert_eq!(w.review_count, 0.10);
        assert_eq!(w.shipping, 0.15);
        assert_eq!(w.price, 0.10);
    }

    #[test]
    fn test_redistribution_is_not_proportional() {
        // A proportional rescale would give unit_price 0.30 / 0.85.
        let proportional = WeightVector::WITH_SENTIMENT.unit_price / 0.85;
        assert!((WeightVector::WITHOUT_SENTIMENT.unit_price - proportional).abs() > 1e-3);
    }

    #[test]
    fn test_combine_uses_every_dimension() {
        let all_hundred = ScoreBreakdown {
            unit_price: 100.0,
            rating: 100.0,
            sentiment: 100.0,
            review_count: 100.0,
            shipping: 100.0,
            price: 100.0,
        };
        assert!((WeightVector::WITH_SENTIMENT.combine(&all_hundred) - 100.0).abs() < 1e-9);
        assert!((WeightVector::WITHOUT_SENTIMENT.combine(&all_hundred) - 100.0).abs() < 1e-9);
    }
}
