//! Batch data-quality diagnostics.
//!
//! Scraped batches are only partially trusted. The scorer tolerates every
//! defect listed here; diagnostics exist so callers can see what was
//! defaulted. They never change scores.

use crate::model::{RawProduct, SentimentMap};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Severity of a batch issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// A default was substituted for missing data
    Info,
    /// The batch violates an expectation of the data model
    Warning,
}

/// Kind of batch issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum IssueKind {
    MultipleOriginals,
    DuplicateId,
    EmptyId,
    MissingPrice,
    RatingOutOfRange,
    SentimentOutOfRange,
    UnknownSentimentId,
}

impl IssueKind {
    #[must_use]
    pub const fn severity(&self) -> IssueSeverity {
        match self {
            Self::MultipleOriginals
            | Self::DuplicateId
            | Self::RatingOutOfRange
            | Self::SentimentOutOfRange => IssueSeverity::Warning,
            Self::EmptyId | Self::MissingPrice | Self::UnknownSentimentId => IssueSeverity::Info,
        }
    }
}

/// One non-fatal problem found in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    /// Product id the issue refers to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub message: String,
}

impl BatchIssue {
    fn new(kind: IssueKind, product_id: Option<&str>, message: String) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            product_id: product_id.map(str::to_string),
            message,
        }
    }
}

/// Inspect a batch (and its optional sentiment map) for data-quality issues.
///
/// Issues are reported in input order, batch-level issues last.
#[must_use]
pub fn inspect_batch(products: &[RawProduct], sentiments: Option<&SentimentMap>) -> Vec<BatchIssue> {
    let mut issues = Vec::new();
    let mut id_counts: HashMap<&str, usize> = HashMap::new();

    for (index, product) in products.iter().enumerate() {
        let id = product.id.as_str();
        let subject = (!id.is_empty()).then_some(id);
        if id.is_empty() {
            issues.push(BatchIssue::new(
                IssueKind::EmptyId,
                None,
                format!("Listing #{} has no id; sentiment cannot be matched", index + 1),
            ));
        } else {
            *id_counts.entry(id).or_default() += 1;
        }

        if product.usable_price().is_none() {
            issues.push(BatchIssue::new(
                IssueKind::MissingPrice,
                subject,
                "No usable price; unit price is unavailable and price scores 0".to_string(),
            ));
        }

        if let Some(rating) = product.rating {
            if !(0.0..=5.0).contains(&rating) {
                issues.push(BatchIssue::new(
                    IssueKind::RatingOutOfRange,
                    subject,
                    format!("Rating {rating} is outside 0-5"),
                ));
            }
        }
    }

    // Report duplicates once each, in first-seen order.
    let mut reported = HashSet::new();
    for product in products {
        let id = product.id.as_str();
        let count = id_counts.get(id).copied().unwrap_or(0);
        if count > 1 && reported.insert(id) {
            issues.push(BatchIssue::new(
                IssueKind::DuplicateId,
                Some(id),
                format!("Id appears {count} times; they share one sentiment entry"),
            ));
        }
    }

    let originals = products.iter().filter(|p| p.is_original).count();
    if originals > 1 {
        issues.push(BatchIssue::new(
            IssueKind::MultipleOriginals,
            None,
            format!("{originals} listings are marked as the original; expected at most one"),
        ));
    }

    if let Some(map) = sentiments {
        for (id, value) in map {
            if !value.is_finite() || !(0.0..=100.0).contains(value) {
                issues.push(BatchIssue::new(
                    IssueKind::SentimentOutOfRange,
                    Some(id.as_str()),
                    format!("Sentiment {value} is outside 0-100"),
                ));
            }
            if !id_counts.contains_key(id.as_str()) {
                issues.push(BatchIssue::new(
                    IssueKind::UnknownSentimentId,
                    Some(id.as_str()),
                    "Sentiment entry does not match any listing".to_string(),
                ));
            }
        }
    }

    issues
}
