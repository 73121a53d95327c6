//! Weights command handler.

use crate::model::Dimension;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::scoring::{select_weights, WeightVector};
use anyhow::Result;

/// Format weight vectors as an aligned table.
///
/// `sentiment` selects one vector; `None` shows both side by side.
#[must_use]
pub fn format_weights(sentiment: Option<bool>) -> String {
    let columns: Vec<(&str, WeightVector)> = match sentiment {
        Some(available) => vec![(column_name(available), select_weights(available))],
        None => vec![
            (column_name(true), select_weights(true)),
            (column_name(false), select_weights(false)),
        ],
    };

    let mut lines = Vec::with_capacity(Dimension::ALL.len() + 3);
    let header: String = columns.iter().map(|(name, _)| format!("  {name:>17}")).collect();
    lines.push(format!("{:<12}{header}", "DIMENSION"));
    for dimension in Dimension::ALL {
        let row: String = columns
            .iter()
            .map(|(_, weights)| format!("  {:>17.2}", weights.get(dimension)))
            .collect();
        lines.push(format!("{:<12}{row}", dimension.key()));
    }
    let totals: String = columns
        .iter()
        .map(|(_, weights)| format!("  {:>17.2}", weights.total()))
        .collect();
    lines.push(format!("{:<12}{totals}", "total"));
    lines.join("\n")
}

const fn column_name(sentiment: bool) -> &'static str {
    if sentiment {
        "with sentiment"
    } else {
        "without sentiment"
    }
}

/// Run the weights command.
pub fn run_weights(sentiment: Option<bool>) -> Result<i32> {
    write_output(&format_weights(sentiment), &OutputTarget::Stdout, true)?;
    Ok(exit_codes::SUCCESS)
}
