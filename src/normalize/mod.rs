//! Listing normalization: unit counts and per-unit prices.
//!
//! These helpers are also useful on their own, e.g. to pre-compute quantities
//! before handing a batch to an external narrative service.

mod quantity;
mod unit_price;

pub use quantity::{extract_quantity, MAX_QUANTITY};
pub use unit_price::unit_price;
