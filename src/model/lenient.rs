//! Lenient decoders for scraped numeric fields.
//!
//! Scrapers hand us whatever the page rendered: plain numbers, strings such as
//! `"$1,299.99"` or `"4.5 out of 5 stars"`, `null`, or nothing at all. These
//! helpers turn all of that into `Option<f64>` / `u64` without ever failing
//! deserialization. Unparseable input becomes "absent".

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::LazyLock;

/// First number in free text, with an optional sign and currency symbol.
///
/// Branches in priority order: European grouping (`1.299,99`), digits with
/// comma groups and an optional fraction, then a bare fraction (`.5`).
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-)?[$€£¥]?\s?(\d{1,3}(?:\.\d{3})+,\d{1,2}\b|\d[\d,]*(?:\.\d+)?|\.\d+)")
        .expect("static number regex")
});

/// Extract the first decimal number from free text.
///
/// Currency symbols and surrounding words are ignored. Comma groups of three
/// digits are thousands separators; a single comma followed by one or two
/// digits is a decimal comma (`"15,00 €"` is 15). A minus sign counts only
/// when it sits directly in front of the number and does not end a word
/// (`"Sub-total $10.00"` is 10). Returns `None` when no finite number is
/// present.
///
/// ```
/// use product_ranker::model::lenient::parse_number;
///
/// assert_eq!(parse_number("$1,299.99"), Some(1299.99));
/// assert_eq!(parse_number("approx. $12.99"), Some(12.99));
/// assert_eq!(parse_number("15,00 €"), Some(15.0));
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let caps = NUMBER.captures(text)?;
    let number = caps.get(2)?.as_str();

    let negative = caps.get(1).is_some_and(|sign| {
        !text[..sign.start()]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric)
    });

    let value: f64 = normalize_separators(number).parse().ok()?;
    let value = if negative { -value } else { value };
    value.is_finite().then_some(value)
}

/// Rewrite a matched number into the `1234.56` form `f64::from_str` accepts.
fn normalize_separators(number: &str) -> String {
    let number = number.trim_end_matches(',');
    if number.contains('.') && number.contains(',') && number.rfind(',') > number.rfind('.') {
        // 1.299,99
        return number.replace('.', "").replace(',', ".");
    }
    match number.split_once(',') {
        Some((whole, frac))
            if !number.contains('.') && !frac.contains(',') && (1..=2).contains(&frac.len()) =>
        {
            format!("{whole}.{frac}")
        }
        _ => number.replace(',', ""),
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Deserialize an optional amount (price, rating, shipping cost).
pub fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Deserialize a non-negative count, defaulting to zero.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = value.as_ref().and_then(value_to_f64).unwrap_or(0.0);
    if parsed <= 0.0 {
        return Ok(0);
    }
    // Saturating float-to-int cast; fractional counts are truncated.
    Ok(parsed as u64)
}

/// Deserialize an identifier that may arrive as a string or a number.
pub fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Deserialize a boolean flag that scrapers sometimes emit as a string.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}
