//! Lexical rules shared by every grammar.
//!
//! Lexing never fails: input that matches no rule becomes a
//! [`TokenKind::Invalid`] token that still consumes at least one character, so
//! the caller always makes progress.

use crate::token::Token;
use crate::token::TokenKind;
use crate::CharacterCursor;
use memchr::memmem;

/// Which set of lexical rules to apply.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LexDialect {
    /// GraphQL executable and SDL documents.
    GraphQL,

    /// The JSON-like variables and results panels.
    Json,
}

/// Consumes a run of ignored characters. Returns whether anything was
/// consumed.
///
/// In the GraphQL dialect commas are insignificant and are skipped here; in
/// the JSON dialect they are punctuation.
pub fn eat_ignored(cursor: &mut CharacterCursor<'_>, dialect: LexDialect) -> bool {
    let eaten = match dialect {
        LexDialect::GraphQL => cursor.eat_while(is_graphql_ignored),
        LexDialect::Json => cursor.eat_while(is_json_ignored),
    };
    !eaten.is_empty()
}

/// Scans the next token starting at the cursor's current position.
pub fn lex<'src>(
    cursor: &mut CharacterCursor<'src>,
    dialect: LexDialect,
) -> Token<'src> {
    cursor.start_token();
    let kind = match dialect {
        LexDialect::GraphQL => lex_graphql(cursor),
        LexDialect::Json => lex_json(cursor),
    };
    Token::from_cursor(kind, cursor)
}

pub fn is_graphql_ignored(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | ',' | '\n' | '\r' | '\u{feff}' | '\u{a0}'
    )
}

fn is_json_ignored(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

fn lex_graphql(cursor: &mut CharacterCursor<'_>) -> TokenKind {
    let Some(ch) = cursor.peek() else {
        return TokenKind::Eof;
    };
    match ch {
        '#' => {
            cursor.skip_to_end();
            TokenKind::Comment
        },
        '.' => {
            if cursor.match_literal("...", true).is_some() {
                TokenKind::Punctuation
            } else {
                cursor.next_char();
                TokenKind::Invalid
            }
        },
        '!' | '$' | '(' | ')' | ':' | '=' | '&' | '@' | '[' | ']' | '{'
        | '|' | '}' => {
            cursor.next_char();
            TokenKind::Punctuation
        },
        '"' => lex_string(cursor, true),
        '-' | '0'..='9' => lex_number(cursor),
        ch if is_name_start(ch) => {
            cursor.eat_while(is_name_continue);
            TokenKind::Name
        },
        _ => {
            cursor.next_char();
            TokenKind::Invalid
        },
    }
}

fn lex_json(cursor: &mut CharacterCursor<'_>) -> TokenKind {
    let Some(ch) = cursor.peek() else {
        return TokenKind::Eof;
    };
    match ch {
        '[' | ']' | '{' | '}' | ':' | ',' => {
            cursor.next_char();
            TokenKind::Punctuation
        },
        '"' => lex_string(cursor, false),
        '-' | '0'..='9' => lex_number(cursor),
        // A bare word is invalid as a whole unless it is one of the JSON
        // keywords.
        ch if ch.is_alphanumeric() || ch == '_' => {
            let word = cursor.eat_while(|ch| ch.is_alphanumeric() || ch == '_');
            if matches!(word, "true" | "false" | "null") {
                TokenKind::Name
            } else {
                TokenKind::Invalid
            }
        },
        _ => {
            cursor.next_char();
            TokenKind::Invalid
        },
    }
}

fn lex_number(cursor: &mut CharacterCursor<'_>) -> TokenKind {
    if cursor.match_pattern(scan_number, true).is_some() {
        TokenKind::Number
    } else {
        cursor.next_char();
        TokenKind::Invalid
    }
}

fn lex_string(cursor: &mut CharacterCursor<'_>, allow_block: bool) -> TokenKind {
    if allow_block && cursor.match_literal("\"\"\"", true).is_some() {
        match find_block_string_end(cursor.remaining()) {
            Some(len) => cursor.skip_to(cursor.current_position() + len),
            None => cursor.skip_to_end(),
        }
        return TokenKind::BlockString;
    }
    match cursor.match_pattern(scan_quoted_string, true) {
        Some(_) => TokenKind::String,
        None => {
            cursor.next_char();
            TokenKind::Invalid
        },
    }
}

/// Scans `-?(0|[1-9][0-9]*)(\.[0-9]*)?([eE][+-]?[0-9]+)?` and returns the
/// length of the match.
pub fn scan_number(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut idx = 0;
    if bytes.first() == Some(&b'-') {
        idx += 1;
    }
    match bytes.get(idx) {
        Some(b'0') => idx += 1,
        Some(b'1'..=b'9') => {
            idx += 1;
            while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
                idx += 1;
            }
        },
        _ => return None,
    }
    if bytes.get(idx) == Some(&b'.') {
        idx += 1;
        while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
            idx += 1;
        }
    }
    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut exp = idx + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            while bytes.get(exp).is_some_and(u8::is_ascii_digit) {
                exp += 1;
            }
            idx = exp;
        }
    }
    Some(idx)
}

/// Scans a single-line `"..."` string. The closing quote is optional; an
/// invalid escape sequence ends the match just before the backslash.
pub fn scan_quoted_string(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }
    let mut idx = 1;
    while let Some(byte) = bytes.get(idx) {
        match byte {
            b'"' => return Some(idx + 1),
            b'\\' => match bytes.get(idx + 1) {
                Some(b'"' | b'/' | b'\\' | b'b' | b'f' | b'n' | b'r' | b't') => {
                    idx += 2;
                },
                Some(b'u')
                    if bytes.len() >= idx + 6
                        && bytes[idx + 2..idx + 6]
                            .iter()
                            .all(u8::is_ascii_hexdigit) =>
                {
                    idx += 6;
                },
                _ => return Some(idx),
            },
            _ => idx += 1,
        }
    }
    Some(idx)
}

/// Finds the closing `"""` of a block string in `text` (which starts just
/// after the opening delimiter, or at the start of a continuation line).
/// Returns the byte length up to and including the delimiter, skipping
/// escaped `\"""` sequences.
pub fn find_block_string_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(found) = memmem::find(&bytes[from..], b"\"\"\"") {
        let at = from + found;
        if at > 0 && bytes[at - 1] == b'\\' {
            from = at + 3;
            continue;
        }
        return Some(at + 3);
    }
    None
}
