//! Answer text formatting: `**bold**` spans and numbered lists to HTML.
//!
//! Formatting runs in three passes: strong spans are applied to the whole text, the result
//! is split into lines and folded into [`Block`]s, and the blocks are rendered in order.

use serde_json::Value;

use crate::core::error::{RenderError, json_type_name};

/// Characters a `**...**` span may not cross.
const LINE_TERMINATORS: &[char] = &['\n', '\r', '\u{2028}', '\u{2029}'];

/// A block of formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    /// Plain line, rendered with a trailing `<br>`.
    Line(&'a str),
    /// Run of consecutive numbered lines, rendered as one `<ol>`.
    List(Vec<ListItem<'a>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListItem<'a> {
    /// Item text with the `N.` prefix and following whitespace removed.
    Item(&'a str),
    /// Numbered line with nothing usable after the prefix; kept verbatim.
    Bare(&'a str),
}

/// Format an answer value from a backend payload.
/// Anything other than a JSON string is logged and formats as empty markup.
pub fn format_answer(answer: &Value) -> String {
    match answer {
        Value::String(s) => format_answer_text(s),
        other => {
            let err = RenderError::TypeFormat {
                found: json_type_name(other),
            };
            log::error!("{}", err);
            String::new()
        }
    }
}

/// Format answer text: strong spans, then line and list structure.
pub fn format_answer_text(raw: &str) -> String {
    let strong = apply_strong(raw);
    render_blocks(&parse_blocks(&strong))
}

/// Wrap each `**...**` span in `<strong>`. The first `**` after an opener closes it;
/// an opener with no closer on the same line is left as-is.
pub(crate) fn apply_strong(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let line_end = after.find(LINE_TERMINATORS).unwrap_or(after.len());
        match after[..line_end].find("**") {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str("<strong>");
                out.push_str(&after[..end]);
                out.push_str("</strong>");
                rest = &after[end + 2..];
            }
            None => {
                // No closer on this line, so no later opener on it can close either.
                out.push_str(&rest[..start + 2 + line_end]);
                rest = &after[line_end..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Split on runs of `\n`. Blank lines collapse; a leading or trailing run yields one empty line.
pub(crate) fn split_lines(s: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut in_run = false;
    for (i, c) in s.char_indices() {
        if c == '\n' {
            if !in_run {
                lines.push(&s[start..i]);
                in_run = true;
            }
            start = i + 1;
        } else {
            in_run = false;
        }
    }
    lines.push(&s[start..]);
    lines
}

/// Whitespace skipped between a list marker and its text. Includes U+FEFF, excludes U+0085.
fn is_marker_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Classify a line as a numbered list line ("N." prefix with ASCII digits).
///
/// Item text is what follows the prefix and its spacing. When only spacing follows, the item
/// keeps the last spacing character. A line with nothing after the prefix, or whose item text
/// would hold a line terminator, is kept verbatim.
pub(crate) fn parse_list_line(line: &str) -> Option<ListItem<'_>> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let trimmed = rest.trim_start_matches(is_marker_space);
    let content = if trimmed.is_empty() {
        match rest.char_indices().last() {
            Some((i, _)) => &rest[i..],
            None => return Some(ListItem::Bare(line)),
        }
    } else {
        trimmed
    };
    if content.contains(LINE_TERMINATORS) {
        Some(ListItem::Bare(line))
    } else {
        Some(ListItem::Item(content))
    }
}

/// Fold lines into blocks: consecutive numbered lines share one list.
pub(crate) fn parse_blocks(s: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut list: Vec<ListItem<'_>> = Vec::new();
    for line in split_lines(s) {
        match parse_list_line(line) {
            Some(item) => list.push(item),
            None => {
                if !list.is_empty() {
                    blocks.push(Block::List(std::mem::take(&mut list)));
                }
                blocks.push(Block::Line(line));
            }
        }
    }
    if !list.is_empty() {
        blocks.push(Block::List(list));
    }
    blocks
}

pub(crate) fn render_blocks(blocks: &[Block<'_>]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Line(line) => {
                out.push_str(line);
                out.push_str("<br>");
            }
            Block::List(items) => {
                out.push_str("<ol>");
                for item in items {
                    match item {
                        ListItem::Item(text) => {
                            out.push_str("<li>");
                            out.push_str(text);
                            out.push_str("</li>");
                        }
                        ListItem::Bare(line) => out.push_str(line),
                    }
                }
                out.push_str("</ol>");
            }
        }
    }
    out
}
