//! Quantity and query command handlers.
//!
//! Expose the standalone normalization helpers so callers can pre-compute
//! quantities or search queries outside a full ranking run.

use crate::config::{AppConfig, Validatable};
use crate::normalize::{extract_quantity, unit_price};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::query::build_search_query;
use anyhow::Result;

/// Format one line per title: quantity, optional unit price, title.
#[must_use]
pub fn format_quantities(titles: &[String], price: Option<f64>, currency_symbol: &str) -> String {
    titles
        .iter()
        .map(|title| {
            let quantity = extract_quantity(title);
            match price {
                Some(price) => {
                    let unit = unit_price(Some(price), quantity).finite().map_or_else(
                        || "-".to_string(),
                        |u| format!("{currency_symbol}{u:.2}"),
                    );
                    format!("{quantity}\t{unit}\t{title}")
                }
                None => format!("{quantity}\t{title}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the quantity command.
pub fn run_quantity(titles: &[String], price: Option<f64>, config: &AppConfig) -> Result<i32> {
    let text = format_quantities(titles, price, &config.ranking.currency_symbol);
    write_output(&text, &OutputTarget::Stdout, true)?;
    Ok(exit_codes::SUCCESS)
}

/// Run the query command.
///
/// `max_keywords` overrides the configured limit.
pub fn run_query(title: &str, max_keywords: Option<usize>, config: &AppConfig) -> Result<i32> {
    let mut config = config.clone();
    if let Some(max) = max_keywords {
        config.query.max_keywords = max;
    }
    config.query.ensure_valid()?;

    let query = build_search_query(title, &config.vocabulary(), config.query.max_keywords);
    if query.is_empty() {
        tracing::warn!("No keywords left in title after filtering");
    }
    write_output(&query, &OutputTarget::Stdout, true)?;
    Ok(exit_codes::SUCCESS)
}
