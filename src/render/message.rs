//! Chat message containers: user query, single answer, and model comparison.

use crate::core::config::Config;
use crate::core::error::RenderError;
use crate::core::payload::{AnswerPayload, ComparisonResults};
use crate::render::compare::build_comparison_markup;
use crate::render::markdown::{format_answer, format_answer_text};
use crate::render::references::references_block;

/// The user's own query, formatted like an answer.
pub fn render_user_message(text: &str) -> String {
    format!(
        "<div class=\"user-query\">{}</div>",
        format_answer_text(text)
    )
}

/// A single model's answer with its references and timing.
pub fn render_bot_message(payload: &AnswerPayload, config: &Config) -> String {
    format!(
        "<div class=\"bot-message\">{}</div>",
        payload_body(payload, config)
    )
}

/// All compared models' answers, one card per key in `model_keys` order.
pub fn render_comparison_message<S: AsRef<str>>(
    results: &ComparisonResults,
    model_keys: &[S],
    config: &Config,
) -> Result<String, RenderError> {
    let cards = build_comparison_markup(results, model_keys, config)?;
    Ok(format!(
        "<div class=\"bot-message compare-results\">{}</div>",
        cards
    ))
}

/// Formatted answer followed by the optional references and time blocks.
pub(crate) fn payload_body(payload: &AnswerPayload, config: &Config) -> String {
    let mut out = format_answer(&payload.answer);
    if let Some(refs) = references_block(&payload.references, &config.data_directory) {
        out.push_str(&refs);
    }
    if let Some(time) = payload.time_taken.and_then(time_block) {
        out.push_str(&time);
    }
    out
}

/// Whole seconds shown for `time_taken`, truncated toward zero.
/// Zero and non-finite values are treated as absent.
pub(crate) fn elapsed_seconds(time_taken: f64) -> Option<i64> {
    if time_taken == 0.0 || !time_taken.is_finite() {
        return None;
    }
    Some(time_taken.trunc() as i64)
}

fn time_block(time_taken: f64) -> Option<String> {
    elapsed_seconds(time_taken).map(|secs| format!("<div class=\"time\">Time: {} s</div>", secs))
}
