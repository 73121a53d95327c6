//! Summary and table report generators for shell output.

use super::escape::strip_control;
use super::{ansi_color, listing_name, ReportConfig, ReportFormat, ReportGenerator};
use crate::error::RankerError;
use crate::model::{Dimension, ScoredProduct};
use crate::pipeline::RankingOutcome;
use crate::summary::format_count;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        outcome: &RankingOutcome,
        config: &ReportConfig,
    ) -> Result<String, RankerError> {
        let mut lines = Vec::new();

        lines.push(self.color("Product Ranking", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if let Some(source) = &config.source_name {
            lines.push(format!("{}  {}", self.color("Source:", "cyan"), source));
        }
        lines.push(format!(
            "{}  {}",
            self.color("Listings:", "cyan"),
            outcome.ranked.len()
        ));

        let Some(best) = outcome.best_value() else {
            lines.push(self.color("No listings to rank.", "dim"));
            return Ok(lines.join("\n"));
        };

        lines.push(format!(
            "{}  {} ({}/100)",
            self.color("Best value:", "cyan"),
            self.color(&strip_control(listing_name(best)), "green"),
            best.score
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Weights:", "cyan"),
            if outcome.sentiment_applied {
                "with sentiment"
            } else {
                "without sentiment"
            }
        ));

        if let Some(cmp) = &outcome.comparison {
            let mut line = if cmp.is_best_value {
                "already the best value".to_string()
            } else {
                format!(
                    "ranked #{} of {}, {} points behind",
                    cmp.rank,
                    outcome.ranked.len(),
                    cmp.score_gap
                )
            };
            if let Some(savings) = cmp.unit_savings_percent.filter(|s| *s > 0.0) {
                line.push_str(&format!("; best value is {savings:.1}% cheaper per unit"));
            }
            lines.push(format!("{}  {}", self.color("Original:", "cyan"), line));
        }

        let shown = config.visible_rows(outcome.ranked.len());
        if shown > 1 {
            lines.push(String::new());
            for (i, item) in outcome.ranked.iter().take(shown).enumerate() {
                lines.push(format!(
                    "  {}. {} {}",
                    i + 1,
                    strip_control(listing_name(item)),
                    self.color(&format!("{}/100", item.score), "dim")
                ));
            }
            if shown < outcome.ranked.len() {
                lines.push(self.color(
                    &format!("  ... and {} more", outcome.ranked.len() - shown),
                    "dim",
                ));
            }
        }

        if !outcome.summary.is_empty() {
            lines.push(String::new());
            lines.push(strip_control(&outcome.summary));
        }

        if !outcome.issues.is_empty() {
            lines.push(String::new());
            lines.push(self.color(
                &format!("{} data issue(s) in batch", outcome.issues.len()),
                "yellow",
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn row(&self, item: &ScoredProduct, index: usize, config: &ReportConfig) -> String {
        let product = &item.product;
        let mut cells = vec![
            pad_left(&(index + 1).to_string(), 3),
            fit(&strip_control(listing_name(item)), TITLE_WIDTH),
            pad_left(&item.score.to_string(), 5),
            pad_left(&config.money(product.usable_price()), 10),
            pad_left(&item.quantity.to_string(), 5),
            pad_left(&config.money(item.unit_price.finite()), 10),
            pad_left(
                &product.rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}")),
                6,
            ),
            pad_left(&format_count(product.review_count), 9),
        ];
        if config.show_breakdown {
            cells.extend(
                item.breakdown
                    .iter()
                    .map(|(_, value)| pad_left(&format!("{value:.1}"), BREAKDOWN_WIDTH)),
            );
        }
        let line = cells.join("  ");
        if item.is_best_value {
            self.color(&line, "green")
        } else {
            line
        }
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

const TITLE_WIDTH: usize = 40;
const BREAKDOWN_WIDTH: usize = 10;

impl ReportGenerator for TableReporter {
    fn generate(
        &self,
        outcome: &RankingOutcome,
        config: &ReportConfig,
    ) -> Result<String, RankerError> {
        let mut header = vec![
            pad_left("#", 3),
            fit("LISTING", TITLE_WIDTH),
            pad_left("SCORE", 5),
            pad_left("PRICE", 10),
            pad_left("QTY", 5),
            pad_left("UNIT", 10),
            pad_left("RATING", 6),
            pad_left("REVIEWS", 9),
        ];
        if config.show_breakdown {
            header.extend(
                Dimension::ALL
                    .iter()
                    .map(|d| pad_left(&d.label().to_uppercase(), BREAKDOWN_WIDTH)),
            );
        }
        let header = header.join("  ");
        let rule = "─".repeat(header.width());

        let mut lines = vec![self.color(&header, "bold"), rule];

        let shown = config.visible_rows(outcome.ranked.len());
        for (i, item) in outcome.ranked.iter().take(shown).enumerate() {
            lines.push(self.row(item, i, config));
        }
        if shown < outcome.ranked.len() {
            lines.push(self.color(
                &format!("... and {} more listings", outcome.ranked.len() - shown),
                "dim",
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Total: {} listings | Weights: {}",
            outcome.ranked.len(),
            if outcome.sentiment_applied {
                "with sentiment"
            } else {
                "without sentiment"
            }
        ));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Truncate to `width` display columns (adding `…`) and pad on the right.
fn fit(s: &str, width: usize) -> String {
    if s.width() <= width {
        return format!("{s}{}", " ".repeat(width - s.width()));
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Right-align to `width` display columns.
fn pad_left(s: &str, width: usize) -> String {
    format!("{}{s}", " ".repeat(width.saturating_sub(s.width())))
}
