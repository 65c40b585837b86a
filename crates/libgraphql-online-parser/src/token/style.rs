/// The presentation tag the parser assigns to every token.
///
/// This is the fixed vocabulary editors map to highlighting classes. It is
/// intentionally decoupled from [`TokenKind`](crate::TokenKind): a `String`
/// token is `Variable` when it is a key in the variables panel and `String`
/// everywhere else.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Keyword,
    Def,
    Punctuation,
    Property,
    Attribute,
    String,
    Number,
    Builtin,
    Variable,
    Comment,
    InvalidChar,
    Ws,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Def => "def",
            Self::Punctuation => "punctuation",
            Self::Property => "property",
            Self::Attribute => "attribute",
            Self::String => "string",
            Self::Number => "number",
            Self::Builtin => "builtin",
            Self::Variable => "variable",
            Self::Comment => "comment",
            Self::InvalidChar => "invalidchar",
            Self::Ws => "ws",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
