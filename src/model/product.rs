//! Raw product listings as produced by the scraping collaborator.

use super::lenient;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Externally computed sentiment per product id, each value on a 0-100 scale.
///
/// Insertion order is preserved so that diagnostics and serialized output are
/// reproducible.
pub type SentimentMap = IndexMap<String, f64>;

/// Shipping terms shown on a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    /// Eligible for Prime (or an equivalent membership shipping program)
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_prime: bool,
    /// Explicitly marked as free shipping
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_free: bool,
    /// Shipping cost when the listing states one
    #[serde(default, deserialize_with = "lenient::amount")]
    pub cost: Option<f64>,
}

impl ShippingInfo {
    /// Prime-eligible shipping.
    #[must_use]
    pub fn prime() -> Self {
        Self {
            is_prime: true,
            ..Self::default()
        }
    }

    /// Free shipping without Prime.
    #[must_use]
    pub fn free() -> Self {
        Self {
            is_free: true,
            ..Self::default()
        }
    }

    /// Shipping with a known cost.
    #[must_use]
    pub fn paid(cost: f64) -> Self {
        Self {
            cost: Some(cost),
            ..Self::default()
        }
    }

    /// Whether the shopper pays nothing extra to ship.
    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.is_prime || self.is_free || self.cost == Some(0.0)
    }
}

/// Accept a shipping object, or a bare label such as `"FREE Shipping"`.
fn shipping_terms<'de, D>(deserializer: D) -> Result<Option<ShippingInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
        Some(Value::String(label)) => {
            let label = label.to_lowercase();
            if label.contains("prime") {
                Some(ShippingInfo::prime())
            } else if label.contains("free") {
                Some(ShippingInfo::free())
            } else {
                lenient::parse_number(&label).map(ShippingInfo::paid)
            }
        }
        _ => None,
    })
}

/// One scraped or self-reported product listing.
///
/// Every field except `id` tolerates being missing or malformed; absent values
/// fall back to the defaults documented on each field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    /// Stable marketplace identifier (e.g. an ASIN or SKU)
    #[serde(default, deserialize_with = "lenient::identifier")]
    pub id: String,
    /// Listing title as displayed
    #[serde(default, deserialize_with = "lenient::identifier")]
    pub title: String,
    /// Total price; `None` when absent or unparseable
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: Option<f64>,
    /// Star rating on a 0-5 scale
    #[serde(default, deserialize_with = "lenient::amount")]
    pub rating: Option<f64>,
    /// Number of reviews, 0 when unknown
    #[serde(default, deserialize_with = "lenient::count")]
    pub review_count: u64,
    /// Shipping terms, `None` when the page showed none
    #[serde(default, deserialize_with = "shipping_terms")]
    pub shipping: Option<ShippingInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Marks the listing the shopper started from
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_original: bool,
}

impl RawProduct {
    /// Create a listing with only an id and title set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_reviews(mut self, review_count: u64) -> Self {
        self.review_count = review_count;
        self
    }

    #[must_use]
    pub fn with_shipping(mut self, shipping: ShippingInfo) -> Self {
        self.shipping = Some(shipping);
        self
    }

    /// Mark this listing as the one the shopper started from.
    #[must_use]
    pub fn as_original(mut self) -> Self {
        self.is_original = true;
        self
    }

    /// Price if it is usable for comparison (finite and positive).
    #[must_use]
    pub fn usable_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p > 0.0)
    }
}
