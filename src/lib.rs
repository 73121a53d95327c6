//! **Deterministic value ranking for scraped product listings.**
//!
//! `product-ranker` takes a batch of candidate listings (as produced by a
//! scraper), normalizes them into comparable units, optionally folds in an
//! external sentiment signal, and produces one ordered ranking with a
//! reproducible per-dimension breakdown plus a short explanation of the
//! winner. It powers both a command-line interface and a Rust library.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`RawProduct`] (the scraped listing, decoded leniently)
//!   and [`ScoredProduct`] (the listing plus quantity, [`UnitPrice`],
//!   breakdown, score and best-value flag).
//! - **[`normalize`]**: [`extract_quantity`] and [`unit_price`].
//! - **[`scoring`]**: the attribute scorers, [`select_weights`] and
//!   [`score_products`].
//! - **[`summary`]**: the template-based fallback explanation.
//! - **[`pipeline`]**: [`rank`], which ties diagnostics, scoring, summary
//!   selection and the original-listing comparison together, plus batch I/O.
//! - **[`reports`]**: JSON, table, summary and Markdown renderers.
//! - **[`query`]**: a fallback search-query builder for listing titles.
//! - **[`config`]**: YAML configuration, presets and validation.
//!
//! ## Getting Started
//!
//! ```
//! use product_ranker::{rank, RawProduct, ShippingInfo};
//!
//! let batch = vec![
//!     RawProduct::new("a", "Paper Towels, 6 Rolls").with_price(12.0).with_rating(4.2),
//!     RawProduct::new("b", "Paper Towels, 12 Rolls")
//!         .with_price(18.0)
//!         .with_rating(4.6)
//!         .with_shipping(ShippingInfo::prime()),
//! ];
//!
//! let outcome = rank(&batch, None, None);
//! let best = outcome.best_value().unwrap();
//! assert_eq!(best.id(), "b");
//! assert!(outcome.summary.starts_with("Paper Towels, 12 Rolls is the best value"));
//! ```
//!
//! Scores are relative to the batch they were computed in and carry no
//! meaning across runs. The scoring core performs no I/O and holds no state,
//! so it can be called concurrently from independent callers.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod query;
pub mod reports;
pub mod scoring;
pub mod summary;

pub use config::{AppConfig, ConfigPreset};
pub use diagnostics::{inspect_batch, BatchIssue, IssueKind, IssueSeverity};
pub use error::{RankerError, Result};
pub use model::{
    Dimension, RawProduct, ScoreBreakdown, ScoredProduct, SentimentMap, ShippingInfo, UnitPrice,
};
pub use normalize::{extract_quantity, unit_price};
pub use pipeline::{rank, rank_with, OriginalComparison, RankingOutcome, RankingRequest};
pub use query::{build_search_query, QueryVocabulary};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{score_products, select_weights, WeightVector};
pub use summary::{generate_fallback_summary, FallbackSummarizer, SummarySource};
