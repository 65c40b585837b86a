use crate::token::Style;

/// The lexical class of a [`Token`](crate::Token).
///
/// The kind says what a lexeme *is*; the [`Style`] attached by the parser says
/// what it *means* at its grammatical position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TokenKind {
    /// One of `! $ ( ) ... : = & @ [ ] { | }` (or `[ ] { } : ,` in the JSON
    /// dialect).
    Punctuation,

    /// A name matching `[_A-Za-z][_0-9A-Za-z]*`. In the JSON dialect only
    /// `true`, `false` and `null` lex as names.
    Name,

    /// An integer or float literal.
    Number,

    /// A `"quoted"` string. The closing quote may be missing.
    String,

    /// A `"""block"""` string, or the portion of one that fits on this line.
    BlockString,

    /// A `#` comment running to the end of the line.
    Comment,

    /// A run of ignored characters.
    Whitespace,

    /// The end of the line.
    Eof,

    /// Input that matches no lexical rule.
    Invalid,
}

impl TokenKind {
    /// The style a token of this kind carries before the parser has placed it
    /// in the grammar.
    pub fn lexical_style(self) -> Style {
        match self {
            Self::Punctuation => Style::Punctuation,
            Self::Name => Style::Property,
            Self::Number => Style::Number,
            Self::String | Self::BlockString => Style::String,
            Self::Comment => Style::Comment,
            Self::Whitespace | Self::Eof => Style::Ws,
            Self::Invalid => Style::InvalidChar,
        }
    }
}
