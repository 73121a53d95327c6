//! Markdown report generator.

use super::escape::escape_markdown_table;
use super::{listing_name, ReportConfig, ReportFormat, ReportGenerator};
use crate::error::RankerError;
use crate::model::Dimension;
use crate::pipeline::RankingOutcome;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Link titles to their source pages when known
    link_titles: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { link_titles: true }
    }

    /// Render titles as plain text
    #[must_use]
    pub const fn without_links(mut self) -> Self {
        self.link_titles = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        outcome: &RankingOutcome,
        config: &ReportConfig,
    ) -> Result<String, RankerError> {
        let mut md = String::new();

        writeln!(md, "# Product Ranking")?;
        writeln!(md)?;
        if let Some(source) = &config.source_name {
            writeln!(md, "**Source:** {}", escape_markdown_table(source))?;
            writeln!(md)?;
        }

        if outcome.ranked.is_empty() {
            writeln!(md, "_No listings to rank._")?;
            return Ok(md);
        }

        writeln!(md, "## Summary")?;
        writeln!(md)?;
        writeln!(md, "{}", outcome.summary.trim())?;
        writeln!(md)?;

        if let Some(cmp) = &outcome.comparison {
            write!(
                md,
                "- **Original listing:** ranked #{} of {}",
                cmp.rank,
                outcome.ranked.len()
            )?;
            if !cmp.is_best_value {
                write!(md, ", {} points behind the best value", cmp.score_gap)?;
            }
            writeln!(md)?;
            if let Some(savings) = cmp.unit_savings_percent.filter(|s| *s > 0.0) {
                writeln!(md, "- **Per-unit saving:** {savings:.1}%")?;
            }
            writeln!(md)?;
        }

        writeln!(md, "## Ranking")?;
        writeln!(md)?;
        let mut header = String::from("| # | Listing | Score | Price | Qty | Unit price | Rating | Reviews |");
        let mut divider = String::from("|--:|---|--:|--:|--:|--:|--:|--:|");
        if config.show_breakdown {
            for dimension in Dimension::ALL {
                write!(header, " {} |", dimension.label())?;
                divider.push_str("--:|");
            }
        }
        writeln!(md, "{header}")?;
        writeln!(md, "{divider}")?;

        let shown = config.visible_rows(outcome.ranked.len());
        for (i, item) in outcome.ranked.iter().take(shown).enumerate() {
            let product = &item.product;
            let name = escape_markdown_table(listing_name(item));
            let name = match (&product.source_url, self.link_titles) {
                (Some(url), true) if !url.is_empty() => format!("[{name}]({})", url.replace(')', "%29")),
                _ => name,
            };
            let name = if item.is_best_value {
                format!("**{name}**")
            } else {
                name
            };
            write!(
                md,
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                i + 1,
                name,
                item.score,
                config.money(product.usable_price()),
                item.quantity,
                config.money(item.unit_price.finite()),
                product.rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}")),
                product.review_count
            )?;
            if config.show_breakdown {
                for (_, value) in item.breakdown.iter() {
                    write!(md, " {value:.1} |")?;
                }
            }
            writeln!(md)?;
        }
        if shown < outcome.ranked.len() {
            writeln!(md)?;
            writeln!(md, "_{} more listing(s) not shown._", outcome.ranked.len() - shown)?;
        }

        if !outcome.issues.is_empty() {
            writeln!(md)?;
            writeln!(md, "## Data issues")?;
            writeln!(md)?;
            for issue in &outcome.issues {
                match &issue.product_id {
                    Some(id) => writeln!(md, "- `{}`: {}", id.replace('`', "'"), issue.message)?,
                    None => writeln!(md, "- {}", issue.message)?,
                }
            }
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawProduct;
    use crate::pipeline::rank;

    #[test]
    fn test_markdown_report() {
        let mut linked = RawProduct::new("a", "Mugs | Set of 4").with_price(20.0);
        linked.source_url = Some("https://shop.example/dp/a".to_string());
        let outcome = rank(
            &[
                linked,
                RawProduct::new("b", "Mug").with_price(9.0).as_original(),
            ],
            None,
            Some("Buy the set."),
        );
        let md = MarkdownReporter::new()
            .generate(&outcome, &ReportConfig::default())
            .unwrap();

        assert!(md.starts_with("# Product Ranking"));
        assert!(md.contains("Buy the set."));
        assert!(md.contains("[Mugs \\| Set of 4](https://shop.example/dp/a)"));
        assert!(md.contains("**Original listing:**"));
        assert!(md.contains("| 1 | **"));
    }

    #[test]
    fn test_markdown_breakdown_columns() {
        let outcome = rank(&[RawProduct::new("a", "Mug").with_price(9.0)], None, None);
        let config = ReportConfig {
            show_breakdown: true,
            ..ReportConfig::default()
        };
        let md = MarkdownReporter::new()
            .without_links()
            .generate(&outcome, &config)
            .unwrap();
        assert!(md.contains("| Unit price | Rating | Reviews |"));
        assert!(md.contains(" Sentiment | Reviews | Shipping | Price |"));
    }

    #[test]
    fn test_markdown_empty() {
        let md = MarkdownReporter::new()
            .generate(&rank(&[], None, None), &ReportConfig::default())
            .unwrap();
        assert!(md.contains("_No listings to rank._"));
    }
}
