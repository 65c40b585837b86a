//! Tests for whole-document scans and token lookup by position.

use crate::get_token_at_position;
use crate::run_online_parser;
use crate::OnlineParser;
use crate::Position;
use crate::RuleKind;
use crate::Style;
use std::ops::ControlFlow;

/// Verifies that the word being typed is found when the cursor sits just
/// after it.
#[test]
fn test_token_at_end_of_word() {
    let token = get_token_at_position("{ user }", Position::new(0, 4), 1);
    assert_eq!(token.string, "user");
    assert_eq!(token.line, 0);
    assert_eq!(token.start, 2);
    assert_eq!(token.end, 6);
    assert_eq!(token.style, Style::Property);
    assert_eq!(token.state.kind(), Some(RuleKind::Field));
}

/// Verifies how `offset` decides between a token ending at the cursor and
/// the one after it.
#[test]
fn test_offset_selects_token_ending_at_cursor() {
    let with_offset = get_token_at_position("{ id }", Position::new(0, 4), 1);
    assert_eq!(with_offset.string, "id");

    let without_offset = get_token_at_position("{ id }", Position::new(0, 4), 0);
    assert_eq!(without_offset.string, " ");
    assert_eq!(without_offset.style, Style::Ws);

    let inside = get_token_at_position("{ id }", Position::new(0, 3), 0);
    assert_eq!(inside.string, "id");
}

/// Verifies that an empty line yields an empty token carrying the state of
/// the enclosing construct.
#[test]
fn test_token_on_empty_line() {
    let token = get_token_at_position("{\n\n}", Position::new(1, 0), 1);
    assert_eq!(token.string, "");
    assert_eq!(token.line, 1);
    assert_eq!(token.state.kind(), Some(RuleKind::SelectionSet));
}

/// Verifies that columns count characters rather than bytes.
#[test]
fn test_columns_are_characters() {
    let token = get_token_at_position(r#"{ f(a: "é") b }"#, Position::new(0, 13), 1);
    assert_eq!(token.string, "b");
    assert_eq!(token.start, 12);
    assert_eq!(token.end, 13);
}

/// Verifies the callback sees every token plus one end-of-line call per
/// line.
#[test]
fn test_callback_sees_every_token_and_line_end() {
    let mut calls = vec![];
    run_online_parser(
        &OnlineParser::graphql(),
        "{ id }\nquery",
        |_, _, token, line| {
            calls.push((line, token.value.to_string()));
            ControlFlow::Continue(())
        },
    );
    assert_eq!(
        calls,
        vec![
            (0, "{".to_string()),
            (0, " ".to_string()),
            (0, "id".to_string()),
            (0, " ".to_string()),
            (0, "}".to_string()),
            (0, "".to_string()),
            (1, "query".to_string()),
            (1, "".to_string()),
        ],
    );
}

/// Verifies that breaking stops the scan at the current token.
#[test]
fn test_break_stops_scan() {
    let mut seen = 0;
    let token = run_online_parser(
        &OnlineParser::graphql(),
        "query Q { a b c }",
        |_, _, token, _| {
            seen += 1;
            if token.value == "Q" {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        },
    );
    assert_eq!(token.string, "Q");
    assert_eq!(token.style, Style::Def);
    assert_eq!(seen, 3);
}

/// Verifies that a position past the end of the document yields the last
/// token and the final state.
#[test]
fn test_position_past_end_returns_last_token() {
    let token = get_token_at_position("{ id }", Position::new(5, 0), 0);
    assert_eq!(token.string, "}");
    assert_eq!(token.start, 5);
    assert_eq!(token.end, 6);
    assert_eq!(token.state.kind(), Some(RuleKind::Document));
}
