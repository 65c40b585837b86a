//! Tests for the lexical rules.

use crate::lexer;
use crate::CharacterCursor;
use crate::LexDialect;
use crate::TokenKind;

/// Lexes `line` to completion, skipping ignored characters, and returns each
/// token's `(kind, text)`.
fn lex_all(line: &str, dialect: LexDialect) -> Vec<(TokenKind, String)> {
    let mut cursor = CharacterCursor::new(line);
    let mut out = vec![];
    loop {
        lexer::eat_ignored(&mut cursor, dialect);
        if cursor.eol() {
            break;
        }
        let token = lexer::lex(&mut cursor, dialect);
        out.push((token.kind, token.value.to_string()));
    }
    out
}

fn kinds(line: &str, dialect: LexDialect) -> Vec<TokenKind> {
    lex_all(line, dialect).into_iter().map(|(kind, _)| kind).collect()
}

// =============================================================================
// GraphQL dialect
// =============================================================================

/// Verifies punctuation, names and the spread operator.
#[test]
fn test_graphql_punctuation_and_names() {
    assert_eq!(
        lex_all("{ ...on Foo @skip }", LexDialect::GraphQL),
        vec![
            (TokenKind::Punctuation, "{".to_string()),
            (TokenKind::Punctuation, "...".to_string()),
            (TokenKind::Name, "on".to_string()),
            (TokenKind::Name, "Foo".to_string()),
            (TokenKind::Punctuation, "@".to_string()),
            (TokenKind::Name, "skip".to_string()),
            (TokenKind::Punctuation, "}".to_string()),
        ],
    );
}

/// Verifies that commas are ignored in GraphQL.
#[test]
fn test_graphql_commas_are_ignored() {
    assert_eq!(
        kinds("a,b,,c", LexDialect::GraphQL),
        vec![TokenKind::Name, TokenKind::Name, TokenKind::Name],
    );
}

/// Verifies the number grammar, including floats and exponents.
#[test]
fn test_graphql_numbers() {
    for number in ["0", "-1", "42", "3.14", "1e10", "-2.5E-3", "6."] {
        assert_eq!(
            lex_all(number, LexDialect::GraphQL),
            vec![(TokenKind::Number, number.to_string())],
            "lexing {number}",
        );
    }
}

/// Verifies that an exponent marker without digits is not part of the number.
#[test]
fn test_graphql_number_incomplete_exponent() {
    assert_eq!(
        lex_all("1e", LexDialect::GraphQL),
        vec![
            (TokenKind::Number, "1".to_string()),
            (TokenKind::Name, "e".to_string()),
        ],
    );
}

/// Verifies quoted strings with escapes and without a closing quote.
#[test]
fn test_graphql_strings() {
    assert_eq!(
        lex_all(r#""a\"bé" "open"#, LexDialect::GraphQL),
        vec![
            (TokenKind::String, r#""a\"bé""#.to_string()),
            (TokenKind::String, r#""open"#.to_string()),
        ],
    );
}

/// Verifies that a block string runs to its closing delimiter, honoring the
/// `\"""` escape, or to the end of the line when unterminated.
#[test]
fn test_graphql_block_strings() {
    assert_eq!(
        lex_all(r#""""a \""" b""" x"#, LexDialect::GraphQL),
        vec![
            (TokenKind::BlockString, r#""""a \""" b""""#.to_string()),
            (TokenKind::Name, "x".to_string()),
        ],
    );
    assert_eq!(
        lex_all(r#""""unterminated"#, LexDialect::GraphQL),
        vec![(TokenKind::BlockString, r#""""unterminated"#.to_string())],
    );
}

/// Verifies that comments run to the end of the line.
#[test]
fn test_graphql_comment() {
    assert_eq!(
        lex_all("id # a { comment }", LexDialect::GraphQL),
        vec![
            (TokenKind::Name, "id".to_string()),
            (TokenKind::Comment, "# a { comment }".to_string()),
        ],
    );
}

/// Verifies that unknown characters become single-character invalid tokens
/// and never stall the lexer.
#[test]
fn test_graphql_invalid_characters() {
    assert_eq!(
        lex_all("%^..", LexDialect::GraphQL),
        vec![
            (TokenKind::Invalid, "%".to_string()),
            (TokenKind::Invalid, "^".to_string()),
            (TokenKind::Invalid, ".".to_string()),
            (TokenKind::Invalid, ".".to_string()),
        ],
    );
}

// =============================================================================
// JSON dialect
// =============================================================================

/// Verifies that commas are punctuation in JSON.
#[test]
fn test_json_commas_are_punctuation() {
    assert_eq!(
        kinds("[1,2]", LexDialect::Json),
        vec![
            TokenKind::Punctuation,
            TokenKind::Number,
            TokenKind::Punctuation,
            TokenKind::Number,
            TokenKind::Punctuation,
        ],
    );
}

/// Verifies that only the JSON keywords lex as names and any other bare word
/// is a single invalid token.
#[test]
fn test_json_bare_words() {
    assert_eq!(
        lex_all("true null nope", LexDialect::Json),
        vec![
            (TokenKind::Name, "true".to_string()),
            (TokenKind::Name, "null".to_string()),
            (TokenKind::Invalid, "nope".to_string()),
        ],
    );
}

/// Verifies that JSON has no block strings or comments.
#[test]
fn test_json_has_no_block_strings_or_comments() {
    assert_eq!(
        kinds(r#""""#, LexDialect::Json),
        vec![TokenKind::String],
    );
    assert_eq!(
        kinds("#", LexDialect::Json),
        vec![TokenKind::Invalid],
    );
}

// =============================================================================
// Scanners
// =============================================================================

/// Verifies `find_block_string_end()` skips escaped delimiters.
#[test]
fn test_find_block_string_end() {
    assert_eq!(lexer::find_block_string_end(r#"abc""" rest"#), Some(6));
    assert_eq!(lexer::find_block_string_end(r#"\""" still open"#), None);
    assert_eq!(lexer::find_block_string_end("no end"), None);
}

/// Verifies that `scan_number()` rejects text that does not start a number.
#[test]
fn test_scan_number_rejects_non_numbers() {
    assert_eq!(lexer::scan_number("-"), None);
    assert_eq!(lexer::scan_number("x1"), None);
    assert_eq!(lexer::scan_number("007"), Some(1));
}
