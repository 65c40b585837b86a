//! Tests for [`crate::get_diagnostics`] and its helpers.

use crate::diagnostics::SyntaxError;
use crate::diagnostics::get_range;
use crate::tests::utils::star_wars_schema;
use crate::validation::DocumentValidator;
use crate::Diagnostic;
use crate::Position;
use crate::Range;
use crate::Schema;
use crate::Severity;
use crate::get_diagnostics;
use crate::get_diagnostics_with_validators;
use crate::validation::rules::FieldsOnCorrectType;

// =============================================================================
// get_diagnostics()
// =============================================================================

/// Verifies that selecting an undefined field is reported as a validation
/// error on the field's name.
#[test]
fn test_unknown_field() {
    let schema: Schema = "schema { query: Test } type Test { id: ID }".parse().unwrap();
    assert_eq!(
        get_diagnostics("{ doesNotExist }", Some(&schema)),
        vec![Diagnostic::new(
            Severity::Error,
            "Cannot query field \"doesNotExist\" on type \"Test\".",
            Range::on_line(0, 2, 14),
            "Validation",
        )],
    );
}

/// Verifies that a valid document produces no diagnostics.
#[test]
fn test_valid_document() {
    let schema = star_wars_schema();
    let text = "query Hero($ep: Episode) {\n  hero(episode: $ep) {\n    name\n  }\n}";
    assert_eq!(get_diagnostics(text, Some(&schema)), vec![]);
}

/// Verifies that without a schema only syntax is checked.
#[test]
fn test_no_schema() {
    assert_eq!(get_diagnostics("{ doesNotExist }", None), vec![]);
}

/// Verifies that SDL documents produce no diagnostics.
#[test]
fn test_type_system_document() {
    let schema = star_wars_schema();
    assert_eq!(get_diagnostics("type Foo { id: ID }", Some(&schema)), vec![]);
}

/// Verifies that type system definitions in an executable document are
/// reported as not executable rather than as a syntax error.
#[test]
fn test_mixed_document() {
    let schema = star_wars_schema();
    let text = "{ hero { name } }\ntype X { a: Int }";
    assert_eq!(
        get_diagnostics(text, Some(&schema)),
        vec![Diagnostic::new(
            Severity::Error,
            "The \"X\" definition is not executable.",
            Range::on_line(1, 5, 6),
            "Validation",
        )],
    );
    assert_eq!(get_diagnostics(text, None), vec![]);
}

/// Verifies that the operations of a mixed document are still validated.
#[test]
fn test_mixed_document_validates_operations() {
    let schema = star_wars_schema();
    let diagnostics = get_diagnostics(
        "schema { query: Query }\n{ hero { nope } }",
        Some(&schema),
    );
    let messages: Vec<&str> = diagnostics.iter()
        .map(|diagnostic| diagnostic.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "The schema definition is not executable.",
            "Cannot query field \"nope\" on type \"Character\".",
        ],
    );
    assert_eq!(diagnostics[1].range, Range::on_line(1, 9, 13));
}

/// Verifies that a syntax error inside one half of a mixed document is
/// reported where it occurs.
#[test]
fn test_mixed_document_syntax_error() {
    let diagnostics = get_diagnostics("{ hero { name } }\ntype X { a: }", None);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].source, "Syntax");
    assert_eq!(diagnostics[0].range.start.line, 1);
}

/// Verifies that a document neither parser accepts produces one syntax
/// error.
#[test]
fn test_syntax_error() {
    let diagnostics = get_diagnostics("{ hero(episode: ) }", None);
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.source, "Syntax");
    assert!(diagnostic.message.starts_with("Syntax Error: "));
    assert_eq!(diagnostic.range.start.line, 0);
}

/// Verifies that deprecated fields are reported as warnings.
#[test]
fn test_deprecated_field() {
    let schema = star_wars_schema();
    assert_eq!(
        get_diagnostics("{ leader { name } }", Some(&schema)),
        vec![Diagnostic::new(
            Severity::Warning,
            "The field Query.leader is deprecated. Use `hero`.",
            Range::on_line(0, 2, 8),
            "Deprecation",
        )],
    );
}

/// Verifies that an error implicating several nodes yields one diagnostic
/// per node.
#[test]
fn test_error_with_several_ranges() {
    let schema = star_wars_schema();
    let text = "query A { hero { name } }\nquery A { hero { id } }";
    let diagnostics = get_diagnostics(text, Some(&schema));
    let messages: Vec<&str> = diagnostics.iter()
        .map(|diagnostic| diagnostic.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "There can be only one operation named \"A\".",
            "There can be only one operation named \"A\".",
        ],
    );
    assert_eq!(diagnostics[0].range.start.line, 0);
    assert_eq!(diagnostics[1].range.start.line, 1);
}

/// Verifies that callers may run their own selection of rules.
#[test]
fn test_custom_validators() {
    let schema = star_wars_schema();
    let validators: Vec<Box<dyn DocumentValidator>> = vec![Box::new(FieldsOnCorrectType)];
    let diagnostics = get_diagnostics_with_validators(
        "query Unused($a: Int) { hero { nope } }",
        Some(&schema),
        &validators,
    );
    let messages: Vec<&str> = diagnostics.iter()
        .map(|diagnostic| diagnostic.message.as_str())
        .collect();
    assert_eq!(messages, vec!["Cannot query field \"nope\" on type \"Character\"."]);
}

/// Verifies the JSON shape of a diagnostic.
#[test]
fn test_diagnostic_serializes() {
    let diagnostic = Diagnostic::new(
        Severity::Warning,
        "careful",
        Range::on_line(2, 4, 6),
        "Deprecation",
    );
    assert_eq!(
        serde_json::to_value(&diagnostic).unwrap(),
        serde_json::json!({
            "severity": 2,
            "message": "careful",
            "range": {
                "start": { "line": 2, "character": 4 },
                "end": { "line": 2, "character": 6 },
            },
            "source": "Deprecation",
        }),
    );
}

// =============================================================================
// Syntax error helpers
// =============================================================================

/// Verifies that parse error text is converted to a zero-based position and
/// a single-line message.
#[test]
fn test_syntax_error_from_parse_error() {
    let error = SyntaxError::from_parse_error(
        "query parse error: Parse error at 3:8\nUnexpected `}`\nExpected Name\n",
    );
    assert_eq!(error.position, Position::new(2, 7));
    assert_eq!(error.message, "Syntax Error: Unexpected `}`, Expected Name.");
}

/// Verifies that a tokenizer error already worded as "unexpected ..." is
/// not prefixed with a second "Unexpected".
#[test]
fn test_syntax_error_unexpected_not_doubled() {
    let error = SyntaxError::from_parse_error(
        "query parse error: Parse error at 1:8\nUnexpected `unexpected character 'é'`\nExpected }\n",
    );
    assert_eq!(error.position, Position::new(0, 7));
    assert_eq!(error.message, "Syntax Error: Unexpected character 'é', Expected }.");

    let error = SyntaxError::from_parse_error(
        "query parse error: Parse error at 1:8\nUnexpected unexpected character 'é'\nExpected }\n",
    );
    assert_eq!(error.message, "Syntax Error: Unexpected character 'é', Expected }.");
}

/// Verifies the fallback message when the parser gives no details.
#[test]
fn test_syntax_error_without_details() {
    let error = SyntaxError::from_parse_error("query parse error: Parse error at 1:1\n");
    assert_eq!(error.position, Position::new(0, 0));
    assert_eq!(error.message, "Syntax Error: Unexpected input.");
}

/// Verifies that `get_range()` underlines the token at the position.
#[test]
fn test_range_of_token_at_position() {
    assert_eq!(
        get_range("{ hero(episode: JEDI) }", Position::new(0, 17)),
        Range::on_line(0, 16, 20),
    );
}

/// Verifies that `get_range()` falls back to the line's invalid token, then
/// to the line's last token.
#[test]
fn test_range_fallbacks() {
    assert_eq!(
        get_range("{ hero % }", Position::new(0, 40)),
        Range::on_line(0, 7, 8),
    );
    assert_eq!(
        get_range("{ hero }", Position::new(0, 40)),
        Range::on_line(0, 7, 8),
    );
}

/// Verifies that `get_range()` returns an empty range on a blank line.
#[test]
fn test_range_on_blank_line() {
    let position = Position::new(1, 0);
    assert_eq!(get_range("{ hero\n\n}", position), Range::new(position, position));
}
