//! A small builder DSL for writing grammar tables.
//!
//! ```rust
//! use libgraphql_online_parser::grammar::builders::*;
//! use libgraphql_online_parser::RuleKind;
//!
//! let selection_set = seq([
//!     punct("{"),
//!     list(named(RuleKind::Selection)),
//!     punct("}"),
//! ]);
//! assert_eq!(selection_set.steps().map(|steps| steps.len()), Some(3));
//! ```

use crate::grammar::Capture;
use crate::grammar::Production;
use crate::grammar::Resolver;
use crate::grammar::Rule;
use crate::grammar::RuleKind;
use crate::grammar::TokenRule;
use crate::token::Style;
use crate::token::TokenKind;

pub fn seq<const N: usize>(steps: [Rule; N]) -> Production {
    Production::Sequence(steps.into())
}

pub fn resolve(resolver: Resolver) -> Production {
    Production::Resolve(resolver)
}

pub fn named(kind: RuleKind) -> Rule {
    Rule::Named(kind)
}

pub fn opt(rule: Rule) -> Rule {
    Rule::Optional(Box::new(rule))
}

pub fn list(item: Rule) -> Rule {
    Rule::List {
        item: Box::new(item),
        separator: None,
    }
}

pub fn list_sep(item: Rule, separator: Rule) -> Rule {
    Rule::List {
        item: Box::new(item),
        separator: Some(Box::new(separator)),
    }
}

pub fn but_not<const N: usize>(inner: Rule, exclusions: [Rule; N]) -> Rule {
    Rule::ButNot {
        inner: Box::new(inner),
        exclusions: exclusions.into(),
    }
}

/// Any token of `kind`.
pub fn tok(kind: TokenKind, style: Style) -> Rule {
    Rule::Token(TokenRule {
        kind,
        value: None,
        style,
        capture: Capture::None,
    })
}

/// A token of `kind` that records `capture` in the parser state.
pub fn tok_capture(kind: TokenKind, style: Style, capture: Capture) -> Rule {
    Rule::Token(TokenRule {
        kind,
        value: None,
        style,
        capture,
    })
}

/// The keyword `value`.
pub fn word(value: &'static str) -> Rule {
    Rule::Token(TokenRule {
        kind: TokenKind::Name,
        value: Some(value),
        style: Style::Keyword,
        capture: Capture::None,
    })
}

/// The punctuator `value`.
pub fn punct(value: &'static str) -> Rule {
    punct_styled(value, Style::Punctuation)
}

pub fn punct_styled(value: &'static str, style: Style) -> Rule {
    Rule::Token(TokenRule {
        kind: TokenKind::Punctuation,
        value: Some(value),
        style,
        capture: Capture::None,
    })
}

/// Any name, recorded as the current frame's name.
pub fn name(style: Style) -> Rule {
    tok_capture(TokenKind::Name, style, Capture::Name)
}

/// Any name, recorded as a type name.
pub fn type_name(style: Style) -> Rule {
    tok_capture(TokenKind::Name, style, Capture::Type)
}

/// A quoted JSON key, recorded without its quotes.
pub fn key(style: Style) -> Rule {
    tok_capture(TokenKind::String, style, Capture::Key)
}
