//! Per-unit price normalization.

use crate::model::UnitPrice;

/// Price per unit for a listing.
///
/// Absent, zero, negative or non-finite prices yield [`UnitPrice::Unavailable`],
/// which ranks worse than every real price. A quantity of 0 is treated as 1.
///
/// ```
/// use product_ranker::model::UnitPrice;
/// use product_ranker::normalize::unit_price;
///
/// assert_eq!(unit_price(Some(24.0), 6), UnitPrice::Finite(4.0));
/// assert_eq!(unit_price(Some(0.0), 3), UnitPrice::Unavailable);
/// assert_eq!(unit_price(None, 1), UnitPrice::Unavailable);
/// ```
#[must_use]
pub fn unit_price(price: Option<f64>, quantity: u32) -> UnitPrice {
    match price {
        Some(p) if p.is_finite() && p > 0.0 => UnitPrice::Finite(p / f64::from(quantity.max(1))),
        _ => UnitPrice::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divides_by_quantity() {
        assert_eq!(unit_price(Some(24.0), 6), UnitPrice::Finite(4.0));
        assert_eq!(unit_price(Some(9.99), 1), UnitPrice::Finite(9.99));
    }

    #[test]
    fn test_zero_quantity_is_treated_as_one() {
        assert_eq!(unit_price(Some(5.0), 0), UnitPrice::Finite(5.0));
    }

    #[test]
    fn test_unusable_prices_are_unavailable() {
        assert_eq!(unit_price(Some(0.0), 3), UnitPrice::Unavailable);
        assert_eq!(unit_price(Some(-2.0), 3), UnitPrice::Unavailable);
        assert_eq!(unit_price(None, 1), UnitPrice::Unavailable);
        assert_eq!(unit_price(Some(f64::NAN), 1), UnitPrice::Unavailable);
        assert_eq!(unit_price(Some(f64::INFINITY), 2), UnitPrice::Unavailable);
    }

    #[test]
    fn test_result_is_never_nan() {
        for price in [None, Some(0.0), Some(-1.0), Some(f64::NAN), Some(1e300)] {
            for quantity in [0, 1, 9_999] {
                if let UnitPrice::Finite(v) = unit_price(price, quantity) {
                    assert!(v.is_finite());
                }
            }
        }
    }
}
