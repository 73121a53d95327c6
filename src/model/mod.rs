//! Data model for product ranking.
//!
//! [`RawProduct`] is the listing handed over by the scraper; it is immutable
//! from the ranker's point of view. [`ScoredProduct`] wraps a listing with the
//! fields derived in one ranking run (quantity, [`UnitPrice`], the six-way
//! [`ScoreBreakdown`], the composite score and the best-value flag).

pub mod lenient;
mod product;
mod scored;

pub use product::{RawProduct, SentimentMap, ShippingInfo};
pub use scored::{Dimension, ScoreBreakdown, ScoredProduct, UnitPrice};
