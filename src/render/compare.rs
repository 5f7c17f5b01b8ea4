//! Side-by-side model comparison cards.

use crate::core::config::Config;
use crate::core::error::RenderError;
use crate::core::payload::ComparisonResults;
use crate::render::message::payload_body;
use crate::render::references::escape_html;

/// Render one card per model key, in the given order.
///
/// Every key must be present in `results`; a missing key means the backend and caller
/// disagree about the compared models and is returned as [`RenderError::MissingModel`].
pub fn build_comparison_markup<S: AsRef<str>>(
    results: &ComparisonResults,
    model_keys: &[S],
    config: &Config,
) -> Result<String, RenderError> {
    let mut out = String::new();
    for key in model_keys {
        let key = key.as_ref();
        let payload = results
            .get(key)
            .ok_or_else(|| RenderError::MissingModel(key.to_string()))?;
        out.push_str(&format!(
            "<div class=\"compare-card\"><strong>{}:</strong><br>{}</div>",
            escape_html(&model_label(key)),
            payload_body(payload, config)
        ));
    }
    Ok(out)
}

/// Display label for a model key: the first `.` becomes a space ("llama3.1" -> "llama3 1").
pub fn model_label(key: &str) -> String {
    key.replacen('.', " ", 1)
}
