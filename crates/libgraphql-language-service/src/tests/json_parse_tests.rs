//! Tests for [`crate::json_parse`].

use crate::json_parse::JsonNodeKind;
use crate::json_parse::parse_json_object;
use crate::Position;
use crate::Range;

/// Verifies that members, keys and values carry their ranges.
#[test]
fn test_ranges() {
    let root = parse_json_object("{\n  \"a\": [1, true],\n  \"b\": null\n}").unwrap();
    assert_eq!(root.range, Range::new(Position::new(0, 0), Position::new(3, 1)));
    let JsonNodeKind::Object(members) = &root.kind else {
        panic!("expected an object, got {:?}", root.kind);
    };
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].key, "a");
    assert_eq!(members[0].key_range, Range::on_line(1, 2, 5));
    assert_eq!(members[0].value.range, Range::on_line(1, 7, 16));
    assert_eq!(members[1].value.kind, JsonNodeKind::Null);
    assert_eq!(members[1].value.range, Range::on_line(2, 7, 11));
}

/// Verifies that scalars decode to their values.
#[test]
fn test_scalar_values() {
    let root = parse_json_object(r#"{"s": "a\"bA", "n": -1.5e2, "t": false}"#).unwrap();
    let JsonNodeKind::Object(members) = root.kind else {
        panic!("expected an object");
    };
    assert_eq!(members[0].value.kind, JsonNodeKind::String("a\"bA".to_string()));
    assert_eq!(members[1].value.kind, JsonNodeKind::Number("-1.5e2".to_string(), -150.0));
    assert_eq!(members[2].value.kind, JsonNodeKind::Boolean(false));
}

/// Verifies the messages and ranges of syntax errors.
#[test]
fn test_syntax_errors() {
    let err = parse_json_object(r#"{"a": }"#).unwrap_err();
    assert_eq!(err.message, "Expected Value but found `}`.");
    assert_eq!(err.range, Range::on_line(0, 6, 7));

    assert_eq!(
        parse_json_object(r#"{"a": 1"#).unwrap_err().message,
        "Expected } but found [end of file].",
    );
    assert_eq!(
        parse_json_object(r#"{"a": "b"#).unwrap_err().message,
        "Unterminated string.",
    );
    assert_eq!(
        parse_json_object(r#"{"a": "\x"}"#).unwrap_err().message,
        "Bad character escape sequence.",
    );
    assert_eq!(
        parse_json_object(r#"{"a": 1.}"#).unwrap_err().message,
        "Expected decimal digit.",
    );
    assert_eq!(
        parse_json_object(r#"{"a": nope}"#).unwrap_err().message,
        "Expected Value but found `nope`.",
    );
    assert_eq!(
        parse_json_object("[1]").unwrap_err().message,
        "Expected { but found `[`.",
    );
}
