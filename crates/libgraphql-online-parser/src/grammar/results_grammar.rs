use crate::grammar::builders::list_sep;
use crate::grammar::builders::named;
use crate::grammar::builders::punct;
use crate::grammar::builders::resolve;
use crate::grammar::builders::seq;
use crate::grammar::builders::tok;
use crate::grammar::json_values;
use crate::grammar::Grammar;
use crate::grammar::GrammarBuilder;
use crate::grammar::Resolver;
use crate::grammar::RuleKind as K;
use crate::token::Style;
use crate::token::TokenKind;
use crate::LexDialect;

/// The results panel: strict JSON with top-level keys styled as definitions
/// and nested keys as properties.
pub(crate) fn build() -> Grammar {
    let builder = GrammarBuilder::new("results", K::Document, LexDialect::Json)
        .rule(K::Document, seq([
            punct("{"),
            list_sep(named(K::Entry), punct(",")),
            punct("}"),
        ]))
        .rule(K::Entry, seq([
            tok(TokenKind::String, Style::Def),
            punct(":"),
            named(K::Value),
        ]))
        .rule(K::ListValue, seq([
            punct("["),
            list_sep(named(K::Value), punct(",")),
            punct("]"),
        ]))
        .rule(K::ObjectValue, seq([
            punct("{"),
            list_sep(named(K::ObjectField), punct(",")),
            punct("}"),
        ]))
        .rule(K::ObjectField, seq([
            tok(TokenKind::String, Style::Property),
            punct(":"),
            named(K::Value),
        ]))
        .rule(K::Value, resolve(Resolver::JsonValue));
    json_values(builder).build()
}
