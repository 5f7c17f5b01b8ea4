//! Rendering and marshaling error types.

/// Errors raised while turning backend payloads into markup.
///
/// Only [`RenderError::MissingModel`], [`RenderError::EmptyQuery`] and the I/O or JSON
/// variants are returned to callers. `TypeFormat` and `MissingField` are logged where they
/// occur and the offending piece renders as empty markup.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Expected a string message, but received {found}")]
    TypeFormat { found: &'static str },
    #[error("Payload has no usable `{0}` field")]
    MissingField(&'static str),
    #[error("Comparison results have no entry for model `{0}`")]
    MissingModel(String),
    #[error("Please enter a query.")]
    EmptyQuery,
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON type name used in `TypeFormat` diagnostics.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
