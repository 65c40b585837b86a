use crate::grammar::RuleKind;
use crate::token::Style;
use crate::token::Token;
use crate::token::TokenKind;

/// One node of a grammar production.
///
/// Rules are immutable and shared by every parse; all per-parse progress
/// lives in [`RuleFrame`](crate::RuleFrame)s.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    /// A reference to another production, matched by pushing a new frame.
    Named(RuleKind),

    /// A terminal matched directly against a token.
    Token(TokenRule),

    /// A rule that may be skipped.
    Optional(Box<Rule>),

    /// Zero or more repetitions of `item`, optionally separated. A separator
    /// that is itself [`Rule::Optional`] lets the list keep going when the
    /// separator is missing.
    List {
        item: Box<Rule>,
        separator: Option<Box<Rule>>,
    },

    /// Matches `inner` only when none of `exclusions` also match the token.
    ButNot {
        inner: Box<Rule>,
        exclusions: Vec<Rule>,
    },
}

impl Rule {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// Whether the parser may move past this rule without matching it.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::Optional(_) | Self::List { .. })
    }

    pub fn separator(&self) -> Option<&Rule> {
        match self {
            Self::List { separator, .. } => separator.as_deref(),
            _ => None,
        }
    }

    /// Strips `Optional` and `List` wrappers down to the rule that has to
    /// match the next token.
    pub fn unwrapped(&self) -> &Rule {
        let mut rule = self;
        loop {
            rule = match rule {
                Self::Optional(inner) => inner,
                Self::List { item, .. } => item,
                _ => return rule,
            };
        }
    }

    /// The terminal this rule ultimately matches with, if it is one.
    pub fn terminal(&self) -> Option<&TokenRule> {
        match self {
            Self::Token(token_rule) => Some(token_rule),
            Self::ButNot { inner, .. } => inner.terminal(),
            _ => None,
        }
    }

    pub fn matches(&self, token: &Token<'_>) -> bool {
        match self {
            Self::Token(token_rule) => token_rule.matches(token),
            Self::ButNot { inner, exclusions } => {
                inner.matches(token)
                    && !exclusions.iter().any(|exclusion| exclusion.matches(token))
            },
            _ => false,
        }
    }
}

/// A terminal: a token kind with an optional exact value, the style a
/// matching token is given, and what to record in the parser state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenRule {
    pub kind: TokenKind,
    pub value: Option<&'static str>,
    pub style: Style,
    pub capture: Capture,
}

impl TokenRule {
    pub fn matches(&self, token: &Token<'_>) -> bool {
        token.kind == self.kind
            && self.value.is_none_or(|value| value == token.value)
    }
}

/// What a matched terminal records in the parser state.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Capture {
    None,

    /// Record the token as the current frame's name.
    Name,

    /// Record the token as the current frame's name and as the type of the
    /// frame two levels up (e.g. the fragment a type condition belongs to).
    Type,

    /// Record a quoted JSON key, without its quotes, as the frame's name.
    Key,

    /// Enter block-string mode if the token opens a block string that does
    /// not close on this line.
    BlockString,
}
