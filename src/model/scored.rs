//! Ranked output types.

use super::RawProduct;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-unit price of a listing.
///
/// `Unavailable` is the "cannot compute" marker used when the listing has no
/// usable price. It ranks worse than every finite value, is never chosen as a
/// batch maximum and never enters an average, so no NaN or infinity leaks
/// into downstream arithmetic. Serialized as a number, or `null` when
/// unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum UnitPrice {
    /// A computed, finite, non-negative unit price
    Finite(f64),
    /// No usable price; worst possible for ranking
    Unavailable,
}

impl UnitPrice {
    /// The finite value, if any.
    #[must_use]
    pub const fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Unavailable => None,
        }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Compare by cost: cheaper sorts first, `Unavailable` sorts last.
    #[must_use]
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.total_cmp(b),
            (Self::Finite(_), Self::Unavailable) => Ordering::Less,
            (Self::Unavailable, Self::Finite(_)) => Ordering::Greater,
            (Self::Unavailable, Self::Unavailable) => Ordering::Equal,
        }
    }
}

impl From<Option<f64>> for UnitPrice {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => Self::Finite(v),
            _ => Self::Unavailable,
        }
    }
}

impl From<UnitPrice> for Option<f64> {
    fn from(value: UnitPrice) -> Self {
        value.finite()
    }
}

/// The six fixed scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    UnitPrice,
    Rating,
    Sentiment,
    ReviewCount,
    Shipping,
    Price,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Self; 6] = [
        Self::UnitPrice,
        Self::Rating,
        Self::Sentiment,
        Self::ReviewCount,
        Self::Shipping,
        Self::Price,
    ];

    /// Key used in serialized breakdowns.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::UnitPrice => "unitPrice",
            Self::Rating => "rating",
            Self::Sentiment => "sentiment",
            Self::ReviewCount => "reviewCount",
            Self::Shipping => "shipping",
            Self::Price => "price",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UnitPrice => "Unit price",
            Self::Rating => "Rating",
            Self::Sentiment => "Sentiment",
            Self::ReviewCount => "Reviews",
            Self::Shipping => "Shipping",
            Self::Price => "Price",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Sub-scores (0-100) for every dimension.
///
/// All six keys are always present; a dimension that does not apply to the
/// batch (sentiment without a sentiment map) holds 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub unit_price: f64,
    pub rating: f64,
    pub sentiment: f64,
    pub review_count: f64,
    pub shipping: f64,
    pub price: f64,
}

impl ScoreBreakdown {
    /// Sub-score for one dimension.
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

    /// Iterate `(dimension, sub-score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }
}

/// A listing with its derived ranking fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    /// The listing as received
    #[serde(flatten)]
    pub product: RawProduct,
    /// Units contained in the listing, at least 1
    pub quantity: u32,
    /// Price per unit
    pub unit_price: UnitPrice,
    /// Per-dimension sub-scores
    pub breakdown: ScoreBreakdown,
    /// Composite score, 0-100
    pub score: u8,
    /// True only for the top-ranked listing
    pub is_best_value: bool,
}

impl ScoredProduct {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.product.title
    }

    #[must_use]
    pub const fn is_original(&self) -> bool {
        self.product.is_original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_sorts_after_every_finite_price() {
        let mut prices = vec![
            UnitPrice::Unavailable,
            UnitPrice::Finite(1_000_000.0),
            UnitPrice::Finite(0.0),
            UnitPrice::Finite(3.5),
        ];
        prices.sort_by(UnitPrice::cmp_cost);
        assert_eq!(prices[0], UnitPrice::Finite(0.0));
        assert_eq!(prices[3], UnitPrice::Unavailable);
    }

    #[test]
    fn test_unit_price_from_option() {
        assert_eq!(UnitPrice::from(Some(2.0)), UnitPrice::Finite(2.0));
        assert_eq!(UnitPrice::from(None), UnitPrice::Unavailable);
        assert_eq!(UnitPrice::from(Some(f64::NAN)), UnitPrice::Unavailable);
        assert_eq!(UnitPrice::from(Some(f64::INFINITY)), UnitPrice::Unavailable);
    }

    #[test]
    fn test_unit_price_serializes_as_number_or_null() {
        assert_eq!(
            serde_json::to_string(&UnitPrice::Finite(4.0)).unwrap(),
            "4.0"
        );
        assert_eq!(
            serde_json::to_string(&UnitPrice::Unavailable).unwrap(),
            "null"
        );
    }

    #[test]
    fn test_breakdown_serializes_all_six_keys() {
        let value = serde_json::to_value(ScoreBreakdown::default()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 6);
        for dimension in Dimension::ALL {
            assert!(keys.contains(&dimension.key()), "missing {dimension}");
        }
    }

    #[test]
    fn test_breakdown_iter_matches_get() {
        let breakdown = ScoreBreakdown {
            unit_price: 1.0,
            rating: 2.0,
            sentiment: 3.0,
            review_count: 4.0,
            shipping: 5.0,
            price: 6.0,
        };
        let collected: Vec<f64> = breakdown.iter().map(|(_, v)| v).collect();
        assert_eq!(collected, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
