//! Per-attribute sub-scores.
//!
//! Every scorer maps one attribute to 0-100 relative to the current batch, so
//! values are only comparable within a single ranking run.

use crate::model::{RawProduct, ShippingInfo, UnitPrice};

/// Neutral review sub-score used when no listing has more than one review.
pub const NEUTRAL_REVIEW_SCORE: f64 = 50.0;

/// Batch-wide maxima used for relative normalization.
///
/// Each maximum is floored at 1 so that a batch without usable values never
/// divides by zero. Unavailable unit prices and unusable prices are excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStats {
    /// Largest positive finite price
    pub max_price: f64,
    /// Largest finite unit price
    pub max_unit_price: f64,
    /// Largest review count
    pub max_review_count: u64,
}

impl Default for BatchStats {
    fn default() -> Self {
        Self {
            max_price: 1.0,
            max_unit_price: 1.0,
            max_review_count: 1,
        }
    }
}

impl BatchStats {
    /// Collect maxima over `(listing, unit price)` pairs.
    pub fn collect<'a, I>(listings: I) -> Self
    where
        I: IntoIterator<Item = (&'a RawProduct, UnitPrice)>,
    {
        listings
            .into_iter()
            .fold(Self::default(), |mut stats, (product, unit)| {
                if let Some(price) = product.usable_price() {
                    stats.max_price = stats.max_price.max(price);
                }
                if let Some(u) = unit.finite() {
                    stats.max_unit_price = stats.max_unit_price.max(u);
                }
                stats.max_review_count = stats.max_review_count.max(product.review_count);
                stats
            })
    }
}

/// `(1 - unit / max) * 100` for finite unit prices, 0 when unavailable.
#[must_use]
pub fn unit_price_score(unit_price: UnitPrice, stats: &BatchStats) -> f64 {
    unit_price.finite().map_or(0.0, |u| {
        ((1.0 - u / stats.max_unit_price) * 100.0).clamp(0.0, 100.0)
    })
}

/// `(1 - price / max) * 100` for usable prices, 0 otherwise.
///
/// Ignores quantity: rewards a low sticker price directly.
#[must_use]
pub fn price_score(product: &RawProduct, stats: &BatchStats) -> f64 {
    product.usable_price().map_or(0.0, |p| {
        ((1.0 - p / stats.max_price) * 100.0).clamp(0.0, 100.0)
    })
}

/// `(rating / 5) * 100`; absent ratings score 0.
#[must_use]
pub fn rating_score(rating: Option<f64>) -> f64 {
    rating
        .filter(|r| r.is_finite())
        .map_or(0.0, |r| (r / 5.0 * 100.0).clamp(0.0, 100.0))
}

/// Log-scaled review count against the batch maximum.
///
/// Review counts span orders of magnitude, so the log keeps a single outlier
/// from flattening everyone else. When the batch maximum is at most 1 every
/// listing gets [`NEUTRAL_REVIEW_SCORE`].
#[must_use]
pub fn review_count_score(review_count: u64, stats: &BatchStats) -> f64 {
    if stats.max_review_count <= 1 {
        return NEUTRAL_REVIEW_SCORE;
    }
    let count = review_count.max(1) as f64;
    (count.ln() / (stats.max_review_count as f64).ln() * 100.0).clamp(0.0, 100.0)
}

/// 100 for free or Prime shipping, 50 for a known positive cost, 25 otherwise.
#[must_use]
pub fn shipping_score(shipping: Option<&ShippingInfo>) -> f64 {
    match shipping {
        Some(s) if s.ships_free() => 100.0,
        Some(ShippingInfo {
            cost: Some(cost), ..
        }) if cost.is_finite() && *cost > 0.0 => 50.0,
        _ => 25.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(max_price: f64, max_unit_price: f64, max_review_count: u64) -> BatchStats {
        BatchStats {
            max_price,
            max_unit_price,
            max_review_count,
        }
    }

    #[test]
    fn test_collect_excludes_unavailable_and_floors_at_one() {
        let a = RawProduct::new("a", "").with_price(0.5).with_reviews(0);
        let b = RawProduct::new("b", "");
        let s = BatchStats::collect([(&a, UnitPrice::Finite(0.5)), (&b, UnitPrice::Unavailable)]);
        assert_eq!(s, BatchStats::default());
    }

    #[test]
    fn test_collect_takes_maxima() {
        let a = RawProduct::new("a", "").with_price(20.0).with_reviews(1000);
        let b = RawProduct::new("b", "").with_price(10.0).with_reviews(10);
        let s = BatchStats::collect([(&a, UnitPrice::Finite(20.0)), (&b, UnitPrice::Finite(2.5))]);
        assert_eq!(s, stats(20.0, 20.0, 1000));
    }

    #[test]
    fn test_collect_empty_batch() {
        assert_eq!(BatchStats::collect(std::iter::empty()), BatchStats::default());
    }

    #[test]
    fn test_unit_price_score() {
        let s = stats(1.0, 8.0, 1);
        assert_eq!(unit_price_score(UnitPrice::Finite(2.0), &s), 75.0);
        assert_eq!(unit_price_score(UnitPrice::Finite(8.0), &s), 0.0);
        assert_eq!(unit_price_score(UnitPrice::Unavailable, &s), 0.0);
    }

    #[test]
    fn test_price_score() {
        let s = stats(40.0, 1.0, 1);
        assert_eq!(price_score(&RawProduct::new("a", "").with_price(10.0), &s), 75.0);
        assert_eq!(price_score(&RawProduct::new("a", "").with_price(-3.0), &s), 0.0);
        assert_eq!(price_score(&RawProduct::new("a", ""), &s), 0.0);
    }

    #[test]
    fn test_rating_score() {
        assert_eq!(rating_score(Some(5.0)), 100.0);
        assert_eq!(rating_score(Some(3.0)), 60.0);
        assert_eq!(rating_score(None), 0.0);
        assert_eq!(rating_score(Some(7.5)), 100.0);
        assert_eq!(rating_score(Some(f64::NAN)), 0.0);
    }

    #[test]
    fn test_review_count_score_log_scale() {
        let s = stats(1.0, 1.0, 1000);
        assert!((review_count_score(1000, &s) - 100.0).abs() < 1e-9);
        let ten = review_count_score(10, &s);
        assert!((ten - 100.0 / 3.0).abs() < 1e-9, "got {ten}");
        assert_eq!(review_count_score(0, &s), 0.0);
        assert_eq!(review_count_score(1, &s), 0.0);
    }

    #[test]
    fn test_review_count_score_neutral_when_no_spread() {
        let s = stats(1.0, 1.0, 1);
        assert_eq!(review_count_score(0, &s), NEUTRAL_REVIEW_SCORE);
        assert_eq!(review_count_score(1, &s), NEUTRAL_REVIEW_SCORE);
    }

    #[test]
    fn test_shipping_score() {
        assert_eq!(shipping_score(Some(&ShippingInfo::prime())), 100.0);
        assert_eq!(shipping_score(Some(&ShippingInfo::free())), 100.0);
        assert_eq!(shipping_score(Some(&ShippingInfo::paid(0.0))), 100.0);
        assert_eq!(shipping_score(Some(&ShippingInfo::paid(5.99))), 50.0);
        assert_eq!(shipping_score(Some(&ShippingInfo::default())), 25.0);
        assert_eq!(shipping_score(None), 25.0);
    }
}
