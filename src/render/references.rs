//! Reference citations: links into the document directory, one per cited page.

use crate::core::payload::Reference;

/// Build the references heading and list. Returns an empty string for no references,
/// in which case the caller skips the references block.
pub fn build_references_markup(refs: &[Reference], data_directory: &str) -> String {
    if refs.is_empty() {
        return String::new();
    }
    let mut out = String::from("<br/><br/><strong>References:</strong><ul>");
    for r in refs {
        let url = reference_url(r, data_directory);
        out.push_str(&format!(
            "<li><a href=\"{}\" target=\"_blank\">{} - Page {}</a></li>",
            escape_html(&url),
            escape_html(&r.filename),
            r.page_num
        ));
    }
    out.push_str("</ul>");
    out
}

/// Document locator: directory + filename + `#page=N`.
pub fn reference_url(r: &Reference, data_directory: &str) -> String {
    format!("{}{}#page={}", data_directory, r.filename, r.page_num)
}

/// `<div class="references">` wrapper, or `None` when there is nothing to cite.
pub(crate) fn references_block(refs: &[Reference], data_directory: &str) -> Option<String> {
    let inner = build_references_markup(refs, data_directory);
    if inner.is_empty() {
        None
    } else {
        Some(format!("<div class=\"references\">{}</div>", inner))
    }
}

/// Escape text for use in element content or a double-quoted attribute.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
