//! Composite scoring and ranking.

use super::attributes::{
    price_score, rating_score, review_count_score, shipping_score, unit_price_score, BatchStats,
};
use super::sentiment::SentimentSignal;
use super::weights::{select_weights, WeightVector};
use crate::model::{RawProduct, ScoreBreakdown, ScoredProduct, SentimentMap, UnitPrice};
use crate::normalize::{extract_quantity, unit_price};

/// Round a weighted sum to the nearest integer and clamp it to 0-100.
#[must_use]
pub fn clamp_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    // Clamped to [0, 100] first, so the cast cannot truncate.
    raw.round().clamp(0.0, 100.0) as u8
}

/// Score and rank a batch of listings.
///
/// Returns one [`ScoredProduct`] per input listing, sorted by descending
/// score. The sort is stable, so equal scores keep their input order, and the
/// first entry is flagged as best value. An empty batch yields an empty list.
///
/// Scores are normalized against this batch only and carry no meaning across
/// runs. The function is pure: identical inputs give identical output.
#[must_use]
pub fn score_products(
    products: &[RawProduct],
    sentiments: Option<&SentimentMap>,
) -> Vec<ScoredProduct> {
    if products.is_empty() {
        return Vec::new();
    }

    let signal = SentimentSignal::new(sentiments);
    let weights = select_weights(signal.is_available());

    let normalized: Vec<(u32, UnitPrice)> = products
        .iter()
        .map(|p| {
            let quantity = extract_quantity(&p.title);
            (quantity, unit_price(p.price, quantity))
        })
        .collect();

    let stats = BatchStats::collect(
        products
            .iter()
            .zip(normalized.iter())
            .map(|(p, &(_, unit))| (p, unit)),
    );

    tracing::debug!(
        batch_size = products.len(),
        sentiment = signal.is_available(),
        sentiment_entries = signal.coverage(),
        max_price = stats.max_price,
        max_unit_price = stats.max_unit_price,
        max_review_count = stats.max_review_count,
        "Scoring batch"
    );

    let mut ranked: Vec<ScoredProduct> = products
        .iter()
        .zip(normalized)
        .map(|(product, (quantity, unit))| {
            score_one(product, quantity, unit, &stats, &signal, &weights)
        })
        .collect();

    // Vec::sort_by is stable: ties keep input order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(best) = ranked.first_mut() {
        best.is_best_value = true;
    }

    ranked
}

fn score_one(
    product: &RawProduct,
    quantity: u32,
    unit: UnitPrice,
    stats: &BatchStats,
    signal: &SentimentSignal<'_>,
    weights: &WeightVector,
) -> ScoredProduct {
    let breakdown = ScoreBreakdown {
        unit_price: unit_price_score(unit, stats),
        rating: rating_score(product.rating),
        sentiment: signal.score_for(&product.id),
        review_count: review_count_score(product.review_count, stats),
        shipping: shipping_score(product.shipping.as_ref()),
        price: price_score(product, stats),
    };

    ScoredProduct {
        product: product.clone(),
        quantity,
        unit_price: unit,
        breakdown,
        score: clamp_score(weights.combine(&breakdown)),
        is_best_value: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShippingInfo;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(49.5), 50);
        assert_eq!(clamp_score(49.49), 49);
        assert_eq!(clamp_score(-12.0), 0);
        assert_eq!(clamp_score(250.0), 100);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn test_empty_batch() {
        assert!(score_products(&[], None).is_empty());
    }

    #[test]
    fn test_single_product_is_best_value() {
        let ranked = score_products(&[RawProduct::new("only", "Desk Lamp")], None);
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].is_best_value);
        assert_eq!(ranked[0].quantity, 1);
        assert_eq!(ranked[0].unit_price, UnitPrice::Unavailable);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let batch = vec![
            RawProduct::new("first", "Same"),
            RawProduct::new("second", "Same"),
            RawProduct::new("third", "Same"),
        ];
        let ranked = score_products(&batch, None);
        let ids: Vec<&str> = ranked.iter().map(ScoredProduct::id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
        assert!(ranked[0].is_best_value);
        assert!(!ranked[1].is_best_value);
        assert!(!ranked[2].is_best_value);
    }

    #[test]
    fn test_missing_fields_never_panic() {
        let batch = vec![
            RawProduct::default(),
            RawProduct::new("b", "Thing").with_price(f64::NAN),
            RawProduct::new("c", "Thing").with_rating(-4.0).with_price(-1.0),
        ];
        let ranked = score_products(&batch, None);
        assert_eq!(ranked.len(), 3);
        for item in &ranked {
            assert!(item.score <= 100);
            for (_, value) in item.breakdown.iter() {
                assert!(value.is_finite());
            }
        }
    }

    #[test]
    fn test_out_of_range_sentiment_is_clamped() {
        let batch = vec![RawProduct::new("a", "Thing")
            .with_price(10.0)
            .with_rating(5.0)
            .with_shipping(ShippingInfo::prime())];
        let sentiments: SentimentMap = [("a".to_string(), 10_000.0)].into_iter().collect();
        let ranked = score_products(&batch, Some(&sentiments));
        assert_eq!(ranked[0].score, 100);
        assert_eq!(ranked[0].breakdown.sentiment, 10_000.0);
    }

    #[test]
    fn test_sentiment_is_zero_without_map() {
        let batch = vec![RawProduct::new("a", "Thing").with_price(10.0)];
        let ranked = score_products(&batch, None);
        assert_eq!(ranked[0].breakdown.sentiment, 0.0);
    }
}
