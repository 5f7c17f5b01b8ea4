//! Markup rendering for chat messages: answer formatting, references, and comparisons.

mod compare;
mod markdown;
mod message;
mod references;

pub use compare::{build_comparison_markup, model_label};
pub use markdown::{format_answer, format_answer_text};
pub use message::{render_bot_message, render_comparison_message, render_user_message};
pub use references::{build_references_markup, reference_url};

#[cfg(test)]
mod tests;
