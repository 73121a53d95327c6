//! Fallback search-query builder.
//!
//! Derives a short marketplace search query from a listing title when no
//! better query is available. Word lists are carried in an explicit,
//! immutable [`QueryVocabulary`] value rather than global state.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Default number of keywords kept in a query.
pub const DEFAULT_MAX_KEYWORDS: usize = 6;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "the", "of", "for", "with", "without", "in", "on", "to", "by", "from",
    "at", "or", "is", "it", "its", "this", "that", "your", "our", "new", "best", "premium",
    "quality", "pack", "set", "count", "size", "value", "bulk", "each", "per", "x", "plus",
    "free", "made", "use", "great", "perfect", "ideal",
];

const UNIT_WORDS: &[&str] = &[
    "oz", "ounce", "ounces", "fl", "lb", "lbs", "pound", "pounds", "g", "gram", "grams", "kg",
    "mg", "mcg", "ml", "l", "liter", "liters", "litre", "gallon", "gallons", "qt", "quart",
    "inch", "inches", "in", "ft", "feet", "cm", "mm", "m", "ct", "pk", "pcs", "pc", "piece",
    "pieces", "capsules", "tablets", "softgels", "rolls", "sheets", "iu",
];

/// A number immediately followed by a unit, e.g. `500mg`, `12oz`, `2.5l`.
static NUMBER_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+)?[a-z]{0,4}$").expect("static number regex")
});

/// Stop words and unit words dropped from queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVocabulary {
    stop_words: BTreeSet<String>,
    unit_words: BTreeSet<String>,
}

impl QueryVocabulary {
    /// The bundled English vocabulary.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            unit_words: UNIT_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Return a copy extended with extra words (lowercased).
    #[must_use]
    pub fn extended<S: AsRef<str>>(mut self, stop_words: &[S], unit_words: &[S]) -> Self {
        self.stop_words
            .extend(stop_words.iter().map(|w| w.as_ref().trim().to_lowercase()));
        self.unit_words
            .extend(unit_words.iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    #[must_use]
    pub fn is_unit_word(&self, word: &str) -> bool {
        self.unit_words.contains(word)
    }

    fn keeps(&self, token: &str) -> bool {
        token.chars().count() > 1
            && !self.is_stop_word(token)
            && !self.is_unit_word(token)
            && !NUMBER_WITH_UNIT.is_match(token)
    }
}

impl Default for QueryVocabulary {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Build a search query from a listing title.
///
/// Lowercases, strips punctuation, drops stop words, unit words, numbers and
/// number+unit tokens, removes duplicates (first occurrence wins) and keeps
/// at most `max_keywords` words.
///
/// ```
/// use product_ranker::query::{build_search_query, QueryVocabulary};
///
/// let vocab = QueryVocabulary::bundled();
/// assert_eq!(
///     build_search_query("Vitamin C 500mg, 120 Capsules - Immune Support", &vocab, 6),
///     "vitamin immune support"
/// );
/// ```
#[must_use]
pub fn build_search_query(title: &str, vocabulary: &QueryVocabulary, max_keywords: usize) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '.' { c } else { ' ' })
        .collect();

    let mut seen = BTreeSet::new();
    let keywords: Vec<&str> = cleaned
        .split_whitespace()
        .map(|t| t.trim_matches('.'))
        .filter(|t| vocabulary.keeps(t))
        .filter(|t| seen.insert(*t))
        .take(max_keywords)
        .collect();

    keywords.join(" ")
}
