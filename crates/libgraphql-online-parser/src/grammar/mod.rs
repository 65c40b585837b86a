//! Declarative grammar tables for the online parser.
//!
//! A grammar maps every [`RuleKind`] it uses to a [`Production`]: either a
//! sequence of [`Rule`]s or a [`Resolver`] that picks a sub-rule from the next
//! token. Three grammars are bundled: GraphQL (executable documents and SDL),
//! the JSON-like variables panel, and the JSON results panel.

pub mod builders;
#[allow(clippy::module_inception)]
mod grammar;
mod graphql_grammar;
mod production;
mod resolver;
mod results_grammar;
mod rule;
mod rule_kind;
mod variables_grammar;

pub use grammar::Grammar;
pub(crate) use grammar::GrammarBuilder;
pub use production::Production;
pub use resolver::Resolver;
pub use rule::Capture;
pub use rule::Rule;
pub use rule::TokenRule;
pub use rule_kind::RuleKind;

use builders::seq;
use builders::tok;
use crate::token::Style;
use crate::token::TokenKind;

/// The scalar JSON value productions shared by the variables and results
/// grammars.
fn json_values(builder: GrammarBuilder) -> GrammarBuilder {
    builder
        .rule(RuleKind::NumberValue, seq([tok(TokenKind::Number, Style::Number)]))
        .rule(RuleKind::StringValue, seq([tok(TokenKind::String, Style::String)]))
        .rule(RuleKind::BooleanValue, seq([tok(TokenKind::Name, Style::Builtin)]))
        .rule(RuleKind::NullValue, seq([tok(TokenKind::Name, Style::Keyword)]))
}
