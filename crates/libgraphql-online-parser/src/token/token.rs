use crate::token::Style;
use crate::token::TokenKind;
use crate::CharacterCursor;

/// A single lexeme of one line, as classified by the lexer and styled by the
/// parser.
///
/// Tokens borrow the line they were scanned from and are not meant to be
/// retained: everything the parser needs across tokens lives in
/// [`State`](crate::State).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: &'src str,

    /// Byte offset of the first byte of `value` within the line.
    pub start: usize,

    /// Byte offset one past the last byte of `value` within the line.
    pub end: usize,

    pub style: Style,
}

impl<'src> Token<'src> {
    /// Builds a token spanning the cursor's current token text.
    pub fn from_cursor(kind: TokenKind, cursor: &CharacterCursor<'src>) -> Self {
        Self {
            kind,
            value: cursor.current(),
            start: cursor.start_of_token(),
            end: cursor.current_position(),
            style: kind.lexical_style(),
        }
    }

    /// An empty token at the end of the cursor's line.
    pub fn eol(cursor: &CharacterCursor<'src>) -> Self {
        let end = cursor.line().len();
        Self {
            kind: TokenKind::Eof,
            value: "",
            start: end,
            end,
            style: Style::Ws,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn is_punctuation(&self, value: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.value == value
    }

    pub fn is_name(&self, value: &str) -> bool {
        self.kind == TokenKind::Name && self.value == value
    }
}
