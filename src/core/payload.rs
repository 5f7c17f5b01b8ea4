//! Backend response bodies: `/query` answers and `/compare` result maps.
//!
//! Decoding is lenient. A malformed piece is dropped (and logged) instead of failing the
//! whole payload, so a single bad field only blanks its own part of the rendered message.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::RenderError;

/// A cited source document page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub filename: String,
    pub page_num: i64,
}

impl Reference {
    #[cfg(test)]
    pub fn new(filename: impl Into<String>, page_num: i64) -> Self {
        Self {
            filename: filename.into(),
            page_num,
        }
    }
}

/// One model's answer to a query.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerPayload {
    /// Raw answer value; expected to be a string but kept as JSON so a wrong type can be
    /// reported when formatting.
    pub answer: Value,
    pub references: Vec<Reference>,
    /// Seconds spent by the backend producing the answer.
    pub time_taken: Option<f64>,
}

impl AnswerPayload {
    /// Payload with a text answer and no references or timing.
    #[cfg(test)]
    pub fn text(answer: impl Into<String>) -> Self {
        Self {
            answer: Value::String(answer.into()),
            references: Vec::new(),
            time_taken: None,
        }
    }

    /// Decode a `/query` response body.
    pub fn from_json(body: &Value) -> Self {
        let answer = body.get("answer").cloned().unwrap_or(Value::Null);
        let references = match body.get("references").and_then(Value::as_array) {
            Some(items) => items.iter().filter_map(decode_reference).collect(),
            None => {
                log::debug!("{}", RenderError::MissingField("references"));
                Vec::new()
            }
        };
        let time_taken = body.get("time_taken").and_then(decode_seconds);
        Self {
            answer,
            references,
            time_taken,
        }
    }
}

/// Seconds as a JSON number or a numeric string ("3.5"). Anything else is dropped.
fn decode_seconds(value: &Value) -> Option<f64> {
    let secs = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("Ignoring non-numeric time_taken {:?}", s);
                None
            }
        },
        _ => None,
    };
    secs.filter(|t| t.is_finite())
}

fn decode_reference(item: &Value) -> Option<Reference> {
    match Reference::deserialize(item) {
        Ok(r) => Some(r),
        Err(e) => {
            log::warn!("Skipping malformed reference {}: {}", item, e);
            None
        }
    }
}

/// Per-model answers returned by `/compare`, keyed by model key.
pub type ComparisonResults = HashMap<String, AnswerPayload>;

/// Decode a `/compare` response body. A body that is not an object yields no results.
pub fn comparison_from_json(body: &Value) -> ComparisonResults {
    match body.as_object() {
        Some(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), AnswerPayload::from_json(value)))
            .collect(),
        None => {
            log::warn!("{}", RenderError::MissingField("results"));
            ComparisonResults::new()
        }
    }
}

/// Parse a response body read from a file or stdin.
pub fn parse_json(input: &str) -> Result<Value, RenderError> {
    Ok(serde_json::from_str(input)?)
}
