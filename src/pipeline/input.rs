//! Batch and sentiment input loading.

use crate::error::{InputErrorKind, RankerError, Result};
use crate::model::{RawProduct, SentimentMap};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Everything one ranking run consumes from its collaborators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingRequest {
    /// Candidate listings
    pub products: Vec<RawProduct>,
    /// Optional per-product sentiment, 0-100
    pub sentiments: Option<SentimentMap>,
    /// Optional externally authored explanation
    pub narrative: Option<String>,
}

/// Object form of a batch document.
#[derive(Deserialize)]
struct BatchDocument {
    products: Vec<RawProduct>,
    #[serde(default)]
    sentiments: Option<Value>,
    #[serde(default)]
    narrative: Option<String>,
}

/// Parse a batch document.
///
/// Accepts either a bare JSON array of listings or an object with a
/// `products` array and optional `sentiments` / `narrative` fields.
pub fn parse_request(content: &str) -> Result<RankingRequest> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Array(_) => Ok(RankingRequest {
            products: serde_json::from_value(value)?,
            ..RankingRequest::default()
        }),
        Value::Object(ref map) if map.contains_key("products") => {
            let doc: BatchDocument = serde_json::from_value(value)?;
            let sentiments = doc.sentiments.map(sentiments_from_value).transpose()?;
            Ok(RankingRequest {
                products: doc.products,
                sentiments,
                narrative: doc.narrative,
            })
        }
        _ => Err(RankerError::input(
            "batch document",
            InputErrorKind::UnexpectedShape,
        )),
    }
}

/// Parse a sentiment map document (`{"<id>": <score>, ...}`).
///
/// `null` yields an empty map. Entries whose values are not numeric are
/// skipped; numeric strings are accepted.
pub fn parse_sentiments(content: &str) -> Result<SentimentMap> {
    let value: Value = serde_json::from_str(content)?;
    sentiments_from_value(value)
}

fn sentiments_from_value(value: Value) -> Result<SentimentMap> {
    match value {
        Value::Null => Ok(SentimentMap::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(id, v)| {
                let score = match v {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => crate::model::lenient::parse_number(&s),
                    _ => None,
                };
                if score.is_none() {
                    tracing::debug!("Skipping non-numeric sentiment for {id}");
                }
                score.map(|s| (id, s))
            })
            .collect()),
        _ => Err(RankerError::input(
            "sentiment map",
            InputErrorKind::InvalidSentimentMap,
        )),
    }
}

/// Read a file, or stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| RankerError::io(path, e))
}

/// Load a batch document from a file or stdin.
pub fn load_request(path: &Path) -> Result<RankingRequest> {
    let content = read_source(path)?;
    let request = parse_request(&content).map_err(|e| match e {
        RankerError::Input { source, .. } => {
            RankerError::input(format!("batch {}", path.display()), source)
        }
        other => other,
    })?;
    tracing::debug!(
        "Loaded {} listing(s) from {}",
        request.products.len(),
        path.display()
    );
    Ok(request)
}

/// Load a sentiment map from a file.
pub fn load_sentiments(path: &Path) -> Result<SentimentMap> {
    let content = read_source(path)?;
    parse_sentiments(&content).map_err(|e| match e {
        RankerError::Input { source, .. } => {
            RankerError::input(format!("sentiments {}", path.display()), source)
        }
        other => other,
    })
}
