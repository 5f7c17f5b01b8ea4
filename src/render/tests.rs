use serde_json::json;

use super::markdown::{Block, ListItem, apply_strong, parse_blocks, parse_list_line, split_lines};
use super::message::elapsed_seconds;
use super::{
    build_comparison_markup, build_references_markup, format_answer, format_answer_text,
    model_label, reference_url, render_bot_message, render_comparison_message,
    render_user_message,
};
use crate::core::config::Config;
use crate::core::error::RenderError;
use crate::core::payload::{AnswerPayload, ComparisonResults, Reference};

fn comparison(entries: &[(&str, AnswerPayload)]) -> ComparisonResults {
    entries
        .iter()
        .map(|(k, p)| (k.to_string(), p.clone()))
        .collect()
}

// ---- answer text ----

#[test]
fn bold_then_plain_text() {
    assert_eq!(
        format_answer_text("**Hi** there"),
        "<strong>Hi</strong> there<br>"
    );
}

#[test]
fn bold_is_non_greedy() {
    assert_eq!(
        apply_strong("**a** and **b**"),
        "<strong>a</strong> and <strong>b</strong>"
    );
    assert_eq!(apply_strong("***x**"), "<strong>*x</strong>");
    assert_eq!(apply_strong("****"), "<strong></strong>");
}

#[test]
fn bold_without_closer_is_left_alone() {
    assert_eq!(format_answer_text("**a"), "**a<br>");
}

#[test]
fn bold_does_not_cross_lines() {
    assert_eq!(format_answer_text("**a\nb**"), "**a<br>b**<br>");
    assert_eq!(
        format_answer_text("**a\n**b**"),
        "**a<br><strong>b</strong><br>"
    );
    assert_eq!(apply_strong("**a\rb**"), "**a\rb**");
}

#[test]
fn plain_lines_get_breaks() {
    assert_eq!(format_answer_text("one\ntwo"), "one<br>two<br>");
}

#[test]
fn blank_lines_collapse() {
    assert_eq!(format_answer_text("a\n\n\nb"), "a<br>b<br>");
}

#[test]
fn leading_and_trailing_newlines_yield_empty_lines() {
    assert_eq!(format_answer_text("\na\n"), "<br>a<br><br>");
    assert_eq!(format_answer_text("\n\n\na"), "<br>a<br>");
}

#[test]
fn empty_text_is_one_empty_line() {
    assert_eq!(format_answer_text(""), "<br>");
}

#[test]
fn all_numbered_lines_form_one_list() {
    assert_eq!(
        format_answer_text("1. first\n2. second\n10. third"),
        "<ol><li>first</li><li>second</li><li>third</li></ol>"
    );
}

#[test]
fn list_between_paragraphs() {
    assert_eq!(
        format_answer_text("Steps:\n1. open\n\n2. close\nDone."),
        "Steps:<br><ol><li>open</li><li>close</li></ol>Done.<br>"
    );
}

#[test]
fn interrupted_list_starts_a_new_list() {
    assert_eq!(
        format_answer_text("1. a\nx\n2. b"),
        "<ol><li>a</li></ol>x<br><ol><li>b</li></ol>"
    );
}

#[test]
fn text_without_numbered_lines_has_no_list() {
    for input in ["plain", "a\nb\nc", "1) not a list", " 1. indented", "x 1. y", "-1. no"] {
        let out = format_answer_text(input);
        assert!(!out.contains("<ol>"), "unexpected list for {:?}: {}", input, out);
    }
}

#[test]
fn list_item_keeps_text_after_prefix() {
    assert_eq!(format_answer_text("1.5 apples"), "<ol><li>5 apples</li></ol>");
    assert_eq!(
        format_answer_text("3.   spaced  "),
        "<ol><li>spaced  </li></ol>"
    );
    assert_eq!(format_answer_text("2.no space"), "<ol><li>no space</li></ol>");
}

#[test]
fn bare_numbered_line_is_kept_verbatim_in_list() {
    assert_eq!(format_answer_text("1."), "<ol>1.</ol>");
    assert_eq!(
        format_answer_text("1. a\n2.\n3. c"),
        "<ol><li>a</li>2.<li>c</li></ol>"
    );
}

#[test]
fn bold_prefix_hides_list_marker() {
    assert_eq!(
        format_answer_text("**1.** item"),
        "<strong>1.</strong> item<br>"
    );
}

#[test]
fn bold_inside_list_item() {
    assert_eq!(
        format_answer_text("1. **Fee:** 2%"),
        "<ol><li><strong>Fee:</strong> 2%</li></ol>"
    );
}

#[test]
fn spacing_only_item_keeps_last_space() {
    assert_eq!(format_answer_text("1. "), "<ol><li> </li></ol>");
    assert_eq!(
        format_answer_text("1. a\n2.\t\t"),
        "<ol><li>a</li><li>\t</li></ol>"
    );
    assert_eq!(parse_list_line("3. \t "), Some(ListItem::Item(" ")));
}

#[test]
fn line_terminator_in_item_keeps_line_verbatim() {
    assert_eq!(parse_list_line("1. a\r"), Some(ListItem::Bare("1. a\r")));
    assert_eq!(parse_list_line("1. \r"), Some(ListItem::Bare("1. \r")));
    assert_eq!(
        parse_list_line("2. x\u{2028}y"),
        Some(ListItem::Bare("2. x\u{2028}y"))
    );
    assert_eq!(
        format_answer_text("1. a\r\n2. b"),
        "<ol>1. a\r<li>b</li></ol>"
    );
}

#[test]
fn marker_spacing_set() {
    assert_eq!(parse_list_line("1.\u{feff}x"), Some(ListItem::Item("x")));
    assert_eq!(parse_list_line("1.\u{3000}x"), Some(ListItem::Item("x")));
    assert_eq!(
        parse_list_line("1.\u{85}x"),
        Some(ListItem::Item("\u{85}x"))
    );
}

#[test]
fn non_ascii_digits_are_not_list_markers() {
    assert_eq!(parse_list_line("١. x"), None);
}

#[test]
fn formatting_is_repeatable() {
    let raw = "**Summary**\n1. a\n2. b\n\nend";
    assert_eq!(format_answer_text(raw), format_answer_text(raw));
}

#[test]
fn non_string_answer_formats_empty() {
    assert_eq!(format_answer(&json!(42)), "");
    assert_eq!(format_answer(&json!(null)), "");
    assert_eq!(format_answer(&json!({"text": "x"})), "");
    assert_eq!(format_answer(&json!("ok")), "ok<br>");
}

#[test]
fn split_lines_collapses_runs() {
    assert_eq!(split_lines("a\n\nb"), ["a", "b"]);
    assert_eq!(split_lines("a\n"), ["a", ""]);
    assert_eq!(split_lines("\n\na"), ["", "a"]);
    assert_eq!(split_lines(""), [""]);
}

#[test]
fn parse_blocks_structure() {
    assert_eq!(
        parse_blocks("intro\n1. a\n2.\nouter"),
        vec![
            Block::Line("intro"),
            Block::List(vec![ListItem::Item("a"), ListItem::Bare("2.")]),
            Block::Line("outer"),
        ]
    );
}

// ---- references ----

#[test]
fn no_references_is_empty() {
    assert_eq!(build_references_markup(&[], "../data/TCA/"), "");
}

#[test]
fn single_reference_markup() {
    let refs = [Reference::new("a.pdf", 3)];
    assert_eq!(
        build_references_markup(&refs, "../data/TCA/"),
        "<br/><br/><strong>References:</strong><ul>\
         <li><a href=\"../data/TCA/a.pdf#page=3\" target=\"_blank\">a.pdf - Page 3</a></li>\
         </ul>"
    );
}

#[test]
fn reference_url_joins_directory_file_and_page() {
    let r = Reference::new("a.pdf", 3);
    assert!(reference_url(&r, "/docs/").ends_with("a.pdf#page=3"));
    assert_eq!(reference_url(&r, "/docs/"), "/docs/a.pdf#page=3");
}

#[test]
fn references_keep_order_and_duplicates() {
    let refs = [
        Reference::new("b.pdf", 2),
        Reference::new("a.pdf", 1),
        Reference::new("b.pdf", 2),
    ];
    let out = build_references_markup(&refs, "");
    assert_eq!(out.matches("<li>").count(), 3);
    let first_b = out.find("b.pdf - Page 2").unwrap();
    let a = out.find("a.pdf - Page 1").unwrap();
    assert!(first_b < a);
    assert!(out.rfind("b.pdf - Page 2").unwrap() > a);
}

#[test]
fn reference_filenames_are_escaped() {
    let refs = [Reference::new("R&D \"Q1\".pdf", 4)];
    let out = build_references_markup(&refs, "");
    assert!(out.contains("href=\"R&amp;D &quot;Q1&quot;.pdf#page=4\""));
    assert!(out.contains(">R&amp;D &quot;Q1&quot;.pdf - Page 4</a>"));
}

// ---- timing ----

#[test]
fn elapsed_seconds_truncates() {
    assert_eq!(elapsed_seconds(2.9), Some(2));
    assert_eq!(elapsed_seconds(0.4), Some(0));
    assert_eq!(elapsed_seconds(-1.5), Some(-1));
    assert_eq!(elapsed_seconds(0.0), None);
    assert_eq!(elapsed_seconds(f64::NAN), None);
}

// ---- comparison ----

#[test]
fn comparison_cards_follow_key_order() {
    let config = Config::default();
    let results = comparison(&[
        ("llama3.1", AnswerPayload::text("**A**")),
        ("gpt-3.5-turbo", AnswerPayload::text("B")),
    ]);
    let out = build_comparison_markup(&results, &["llama3.1", "gpt-3.5-turbo"], &config).unwrap();
    assert_eq!(
        out,
        "<div class=\"compare-card\"><strong>llama3 1:</strong><br><strong>A</strong><br></div>\
         <div class=\"compare-card\"><strong>gpt-3 5-turbo:</strong><br>B<br></div>"
    );

    let swapped =
        build_comparison_markup(&results, &["gpt-3.5-turbo", "llama3.1"], &config).unwrap();
    assert!(swapped.find("gpt-3 5-turbo").unwrap() < swapped.find("llama3 1").unwrap());
    assert_eq!(swapped.matches("compare-card").count(), 2);
}

#[test]
fn comparison_card_includes_references_and_time() {
    let config = Config::default();
    let payload = AnswerPayload {
        answer: json!("ok"),
        references: vec![Reference::new("a.pdf", 1)],
        time_taken: Some(12.8),
    };
    let results = comparison(&[("m", payload)]);
    let out = build_comparison_markup(&results, &["m"], &config).unwrap();
    assert!(out.contains("<div class=\"references\"><br/><br/><strong>References:</strong>"));
    assert!(out.ends_with("<div class=\"time\">Time: 12 s</div></div>"));
}

#[test]
fn comparison_without_time_has_no_time_block() {
    let config = Config::default();
    let results = comparison(&[("m", AnswerPayload::text("ok"))]);
    let out = build_comparison_markup(&results, &["m"], &config).unwrap();
    assert!(!out.contains("class=\"time\""));
    assert!(!out.contains("class=\"references\""));
}

#[test]
fn comparison_missing_model_is_an_error() {
    let config = Config::default();
    let results = comparison(&[("llama3.1", AnswerPayload::text("A"))]);
    let err = build_comparison_markup(&results, &["llama3.1", "gpt-3.5-turbo"], &config)
        .unwrap_err();
    match err {
        RenderError::MissingModel(key) => assert_eq!(key, "gpt-3.5-turbo"),
        other => panic!("expected MissingModel, got {:?}", other),
    }
}

#[test]
fn model_label_replaces_first_dot_only() {
    assert_eq!(model_label("llama3.1"), "llama3 1");
    assert_eq!(model_label("a.b.c"), "a b.c");
    assert_eq!(model_label("plain"), "plain");
}

// ---- messages ----

#[test]
fn user_message_is_formatted() {
    assert_eq!(
        render_user_message("**why** 1?"),
        "<div class=\"user-query\"><strong>why</strong> 1?<br></div>"
    );
}

#[test]
fn bot_message_with_references_and_time() {
    let config = Config {
        data_directory: "/docs/".to_string(),
        ..Config::default()
    };
    let payload = AnswerPayload {
        answer: json!("Yes."),
        references: vec![Reference::new("a.pdf", 3)],
        time_taken: Some(3.2),
    };
    assert_eq!(
        render_bot_message(&payload, &config),
        "<div class=\"bot-message\">Yes.<br>\
         <div class=\"references\"><br/><br/><strong>References:</strong><ul>\
         <li><a href=\"/docs/a.pdf#page=3\" target=\"_blank\">a.pdf - Page 3</a></li></ul></div>\
         <div class=\"time\">Time: 3 s</div></div>"
    );
}

#[test]
fn bot_message_time_from_numeric_string() {
    let config = Config::default();
    let payload = AnswerPayload::from_json(&json!({"answer": "ok", "time_taken": "3.5"}));
    assert!(
        render_bot_message(&payload, &config).ends_with("<div class=\"time\">Time: 3 s</div></div>")
    );
}

#[test]
fn bot_message_with_bad_answer_keeps_references() {
    let config = Config::default();
    let payload = AnswerPayload {
        answer: json!(["not", "text"]),
        references: vec![Reference::new("a.pdf", 1)],
        time_taken: Some(0.0),
    };
    let out = render_bot_message(&payload, &config);
    assert!(out.starts_with("<div class=\"bot-message\"><div class=\"references\">"));
    assert!(!out.contains("Time:"));
}

#[test]
fn comparison_message_wraps_cards() {
    let config = Config::default();
    let results = comparison(&[
        ("llama3.1", AnswerPayload::text("A")),
        ("gpt-3.5-turbo", AnswerPayload::text("B")),
    ]);
    let out = render_comparison_message(&results, &config.compare_models, &config).unwrap();
    assert!(out.starts_with("<div class=\"bot-message compare-results\"><div class=\"compare-card\">"));
    assert!(out.ends_with("</div></div>"));
}

#[test]
fn comparison_message_propagates_missing_model() {
    let config = Config::default();
    let results = ComparisonResults::new();
    assert!(matches!(
        render_comparison_message(&results, &config.compare_models, &config),
        Err(RenderError::MissingModel(_))
    ));
}
