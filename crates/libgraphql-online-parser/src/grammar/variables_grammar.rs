use crate::grammar::builders::key;
use crate::grammar::builders::list_sep;
use crate::grammar::builders::named;
use crate::grammar::builders::opt;
use crate::grammar::builders::punct;
use crate::grammar::builders::resolve;
use crate::grammar::builders::seq;
use crate::grammar::json_values;
use crate::grammar::Grammar;
use crate::grammar::GrammarBuilder;
use crate::grammar::Resolver;
use crate::grammar::RuleKind as K;
use crate::token::Style;
use crate::LexDialect;

/// The variables panel: a JSON object whose keys are variable names. Commas
/// between entries are optional so a missing separator never stalls the
/// parse.
pub(crate) fn build() -> Grammar {
    let builder = GrammarBuilder::new("variables", K::Document, LexDialect::Json)
        .rule(K::Document, seq([
            punct("{"),
            list_sep(named(K::Variable), opt(punct(","))),
            punct("}"),
        ]))
        .rule(K::Variable, seq([
            key(Style::Variable),
            punct(":"),
            named(K::Value),
        ]))
        .rule(K::ListValue, seq([
            punct("["),
            list_sep(named(K::Value), opt(punct(","))),
            punct("]"),
        ]))
        .rule(K::ObjectValue, seq([
            punct("{"),
            list_sep(named(K::ObjectField), opt(punct(","))),
            punct("}"),
        ]))
        .rule(K::ObjectField, seq([
            key(Style::Attribute),
            punct(":"),
            named(K::Value),
        ]))
        .rule(K::Value, resolve(Resolver::JsonValue));
    json_values(builder).build()
}
