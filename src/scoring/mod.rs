//! Scoring and ranking engine.
//!
//! Turns a batch of heterogeneous, partially-missing listings into one ordered
//! ranking with a reproducible per-dimension breakdown.
//!
//! # Pipeline
//!
//! 1. Quantity and unit price per listing ([`crate::normalize`])
//! 2. Batch maxima ([`BatchStats`]), floored at 1
//! 3. Six sub-scores per listing, each 0-100 relative to the batch
//! 4. Weighted sum with the vector chosen by [`select_weights`]
//! 5. Round, clamp to 0-100, stable sort, flag the best value
//!
//! # Usage
//!
//! ```
//! use product_ranker::model::{RawProduct, ShippingInfo};
//! use product_ranker::scoring::score_products;
//!
//! let batch = vec![
//!     RawProduct::new("a", "Paper Towels, 6 Rolls").with_price(12.0).with_rating(4.6),
//!     RawProduct::new("b", "Paper Towels, 12 Rolls")
//!         .with_price(18.0)
//!         .with_shipping(ShippingInfo::prime()),
//! ];
//! let ranked = score_products(&batch, None);
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked[0].is_best_value);
//! ```
//!
//! The engine holds no state between calls and performs no I/O, so it can be
//! invoked concurrently from independent callers.

mod attributes;
mod composite;
mod sentiment;
mod weights;

pub use attributes::{
    price_score, rating_score, review_count_score, shipping_score, unit_price_score, BatchStats,
    NEUTRAL_REVIEW_SCORE,
};
pub use composite::{clamp_score, score_products};
pub use sentiment::SentimentSignal;
pub use weights::{select_weights, WeightVector};
