//! Unit-count extraction from listing titles.

use regex::Regex;
use std::sync::LazyLock;

/// Quantities at or above this bound are treated as noise (model numbers,
/// dimensions in millimetres, years).
pub const MAX_QUANTITY: u32 = 10_000;

/// A number, optionally with thousands separators.
const NUM: &str = r"(\d{1,3}(?:,\d{3})+|\d+)";

/// Count nouns that directly follow a quantity ("120 Capsules", "12-Pack").
const COUNT_NOUNS: &str = "count|ct|pack|pk|pcs|pieces|piece|pc|units|unit|capsules|caps|\
    tablets|tabs|softgels|gummies|rolls|sheets|pods|bags|bottles|cans|bars|packets|sachets|\
    wipes|servings|refills|cartridges|batteries|diapers";

/// Ordered quantity patterns. The first pattern that yields an in-range
/// number wins, even if a later pattern would also match.
static QUANTITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!(r"(?i)\b{NUM}[\s-]*(?:{COUNT_NOUNS})\b"),
        format!(r"(?i)\bpack\s+of\s+{NUM}\b"),
        format!(r"(?i)\b{NUM}\s*(?:per|/)\s*(?:box|case|pack|bag)\b"),
        format!(r"(?i)\bset\s+of\s+{NUM}\b"),
        format!(r"(?i)\b{NUM}\s*x\s*\d+"),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static quantity regex"))
    .collect()
});

/// Derive how many units a listing contains from its title.
///
/// Always returns at least 1; 1 means "no quantity signal". Matching is
/// case-insensitive and follows a fixed pattern order: count/pack phrasing,
/// "pack of N", "N per box", "set of N", then "N x M".
///
/// ```
/// use product_ranker::normalize::extract_quantity;
///
/// assert_eq!(extract_quantity("Vitamin C 500mg, 120 Capsules"), 120);
/// assert_eq!(extract_quantity("Pack of 6 Towels"), 6);
/// assert_eq!(extract_quantity("Wireless Mouse"), 1);
/// ```
#[must_use]
pub fn extract_quantity(title: &str) -> u32 {
    if title.trim().is_empty() {
        return 1;
    }

    for pattern in QUANTITY_PATTERNS.iter() {
        for caps in pattern.captures_iter(title) {
            if let Some(n) = caps.get(1).and_then(|m| parse_count(m.as_str())) {
                return n;
            }
        }
    }

    1
}

fn parse_count(raw: &str) -> Option<u32> {
    let n: u32 = raw.replace(',', "").parse().ok()?;
    (n > 0 && n < MAX_QUANTITY).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_phrasing() {
        assert_eq!(extract_quantity("Vitamin C 500mg, 120 Capsules"), 120);
        assert_eq!(extract_quantity("Dish Soap Pods, 90 Count"), 90);
        assert_eq!(extract_quantity("AA Batteries 48 ct"), 48);
        assert_eq!(extract_quantity("Sparkling Water 12-Pack"), 12);
        assert_eq!(extract_quantity("Toilet Paper, 24 Rolls"), 24);
    }

    #[test]
    fn test_pack_of_and_set_of() {
        assert_eq!(extract_quantity("Pack of 6 Towels"), 6);
        assert_eq!(extract_quantity("PACK OF 3 notebooks"), 3);
        assert_eq!(extract_quantity("Glass Storage Containers, Set of 10"), 10);
    }

    #[test]
    fn test_per_container_phrasing() {
        assert_eq!(extract_quantity("Nitrile Gloves, 100 per box"), 100);
        assert_eq!(extract_quantity("Trash Liners 50/case"), 50);
    }

    #[test]
    fn test_multiplier_phrasing() {
        assert_eq!(extract_quantity("Cold Brew Coffee 4 x 12oz"), 4);
        assert_eq!(extract_quantity("Protein Bars 2x24"), 2);
    }

    #[test]
    fn test_no_signal_returns_one() {
        assert_eq!(extract_quantity("Wireless Mouse"), 1);
        assert_eq!(extract_quantity(""), 1);
        assert_eq!(extract_quantity("   "), 1);
        assert_eq!(extract_quantity("Vitamin D3 5000 IU"), 1);
    }

    #[test]
    fn test_pattern_order_is_the_tie_break() {
        // Count phrasing outranks "pack of" even though both match.
        assert_eq!(extract_quantity("Pack of 2, 60 Capsules each"), 60);
        // "set of" outranks the multiplier phrasing.
        assert_eq!(extract_quantity("3 x 5 Index Cards, Set of 4"), 4);
    }

    #[test]
    fn test_out_of_range_values_are_ignored() {
        assert_eq!(extract_quantity("Labels 10000 count"), 1);
        assert_eq!(extract_quantity("0 pack"), 1);
        assert_eq!(extract_quantity("Staples 99999999999 count"), 1);
    }

    #[test]
    fn test_out_of_range_match_falls_through() {
        // Later matches of the same pattern are still tried.
        assert_eq!(extract_quantity("Labels 10000 count, 50 count"), 50);
        // Then later patterns.
        assert_eq!(extract_quantity("Labels 10000 count, Pack of 6"), 6);
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(extract_quantity("Cotton Swabs, 1,000 Count"), 1000);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_quantity("TRASH BAGS 200 COUNT"), 200);
    }
}
