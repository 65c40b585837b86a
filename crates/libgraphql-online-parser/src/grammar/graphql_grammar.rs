use crate::grammar::builders::but_not;
use crate::grammar::builders::list;
use crate::grammar::builders::list_sep;
use crate::grammar::builders::name;
use crate::grammar::builders::named;
use crate::grammar::builders::opt;
use crate::grammar::builders::punct;
use crate::grammar::builders::punct_styled;
use crate::grammar::builders::resolve;
use crate::grammar::builders::seq;
use crate::grammar::builders::tok;
use crate::grammar::builders::tok_capture;
use crate::grammar::builders::type_name;
use crate::grammar::builders::word;
use crate::grammar::Capture;
use crate::grammar::Grammar;
use crate::grammar::GrammarBuilder;
use crate::grammar::Production;
use crate::grammar::Resolver;
use crate::grammar::RuleKind as K;
use crate::token::Style;
use crate::token::TokenKind;
use crate::LexDialect;

pub(crate) fn build() -> Grammar {
    GrammarBuilder::new("graphql", K::Document, LexDialect::GraphQL)
        .rule(K::Document, seq([list(named(K::Definition))]))
        .rule(K::Definition, resolve(Resolver::Definition))
        .rule(
            K::DescribedDefinition,
            seq([named(K::Description), named(K::Definition)]),
        )
        .rule(K::Description, resolve(Resolver::Description))

        // Operations
        .rule(K::ShortQuery, seq([named(K::SelectionSet)]))
        .rule(K::Query, operation("query"))
        .rule(K::Mutation, operation("mutation"))
        .rule(K::Subscription, operation("subscription"))
        .rule(K::VariableDefinitions, seq([
            punct("("),
            list(named(K::VariableDefinition)),
            punct(")"),
        ]))
        .rule(K::VariableDefinition, seq([
            named(K::Variable),
            punct(":"),
            named(K::Type),
            opt(named(K::DefaultValue)),
            list(named(K::Directive)),
        ]))
        .rule(K::Variable, seq([
            punct_styled("$", Style::Variable),
            name(Style::Variable),
        ]))
        .rule(K::DefaultValue, seq([punct("="), named(K::Value)]))

        // Selections
        .rule(K::SelectionSet, seq([
            punct("{"),
            list(named(K::Selection)),
            punct("}"),
        ]))
        .rule(K::Selection, resolve(Resolver::Selection))
        .rule(K::AliasedField, seq([
            name(Style::Def),
            punct(":"),
            name(Style::Property),
            opt(named(K::Arguments)),
            list(named(K::Directive)),
            opt(named(K::SelectionSet)),
        ]))
        .rule(K::Field, seq([
            name(Style::Property),
            opt(named(K::Arguments)),
            list(named(K::Directive)),
            opt(named(K::SelectionSet)),
        ]))
        .rule(K::Arguments, seq([
            punct("("),
            list(named(K::Argument)),
            punct(")"),
        ]))
        .rule(K::Argument, seq([
            name(Style::Attribute),
            punct(":"),
            named(K::Value),
        ]))

        // Fragments
        .rule(K::FragmentSpread, seq([
            punct("..."),
            name(Style::Def),
            list(named(K::Directive)),
        ]))
        .rule(K::InlineFragment, seq([
            punct("..."),
            opt(named(K::TypeCondition)),
            list(named(K::Directive)),
            named(K::SelectionSet),
        ]))
        .rule(K::FragmentDefinition, seq([
            word("fragment"),
            opt(but_not(name(Style::Def), [word("on")])),
            named(K::TypeCondition),
            list(named(K::Directive)),
            named(K::SelectionSet),
        ]))
        .rule(K::TypeCondition, seq([word("on"), named(K::NamedType)]))

        // Values
        .rule(K::Value, resolve(Resolver::Value))
        .rule(K::NumberValue, seq([tok(TokenKind::Number, Style::Number)]))
        .rule(K::StringValue, seq([tok(TokenKind::String, Style::String)]))
        .rule(K::BlockStringValue, seq([tok_capture(
            TokenKind::BlockString,
            Style::String,
            Capture::BlockString,
        )]))
        .rule(K::BooleanValue, seq([tok(TokenKind::Name, Style::Builtin)]))
        .rule(K::NullValue, seq([tok(TokenKind::Name, Style::Keyword)]))
        .rule(K::EnumValue, seq([name(Style::Builtin)]))
        .rule(K::ListValue, seq([
            punct("["),
            list(named(K::Value)),
            punct("]"),
        ]))
        .rule(K::ObjectValue, seq([
            punct("{"),
            list(named(K::ObjectField)),
            punct("}"),
        ]))
        .rule(K::ObjectField, seq([
            name(Style::Attribute),
            punct(":"),
            named(K::Value),
        ]))

        // Type references
        .rule(K::Type, resolve(Resolver::Type))
        .rule(K::ListType, seq([
            punct("["),
            named(K::Type),
            punct("]"),
            opt(punct("!")),
        ]))
        .rule(K::NonNullType, seq([named(K::NamedType), opt(punct("!"))]))
        .rule(K::NamedType, seq([type_name(Style::Builtin)]))

        .rule(K::Directive, seq([
            punct_styled("@", Style::Attribute),
            name(Style::Attribute),
            opt(named(K::Arguments)),
        ]))

        // Type system definitions
        .rule(K::DirectiveDef, seq([
            word("directive"),
            punct_styled("@", Style::Attribute),
            name(Style::Attribute),
            opt(named(K::ArgumentsDef)),
            opt(word("repeatable")),
            word("on"),
            list_sep(named(K::DirectiveLocation), punct("|")),
        ]))
        .rule(K::DirectiveLocation, seq([name(Style::Builtin)]))
        .rule(K::SchemaDef, seq([
            word("schema"),
            list(named(K::Directive)),
            punct("{"),
            list(named(K::OperationTypeDef)),
            punct("}"),
        ]))
        .rule(K::OperationTypeDef, seq([
            name(Style::Keyword),
            punct(":"),
            tok(TokenKind::Name, Style::Builtin),
        ]))
        .rule(K::ScalarDef, seq([
            word("scalar"),
            name(Style::Builtin),
            list(named(K::Directive)),
        ]))
        .rule(K::ObjectTypeDef, fielded_type("type"))
        .rule(K::InterfaceDef, fielded_type("interface"))
        .rule(K::Implements, seq([
            word("implements"),
            opt(punct("&")),
            list_sep(named(K::NamedType), opt(punct("&"))),
        ]))
        .rule(K::FieldDef, seq([
            opt(named(K::Description)),
            name(Style::Property),
            opt(named(K::ArgumentsDef)),
            punct(":"),
            named(K::Type),
            list(named(K::Directive)),
        ]))
        .rule(K::ArgumentsDef, seq([
            punct("("),
            list(named(K::InputValueDef)),
            punct(")"),
        ]))
        .rule(K::InputValueDef, seq([
            opt(named(K::Description)),
            name(Style::Attribute),
            punct(":"),
            named(K::Type),
            opt(named(K::DefaultValue)),
            list(named(K::Directive)),
        ]))
        .rule(K::UnionDef, seq([
            word("union"),
            name(Style::Builtin),
            list(named(K::Directive)),
            punct("="),
            opt(punct("|")),
            list_sep(named(K::UnionMember), punct("|")),
        ]))
        .rule(K::UnionMember, seq([named(K::NamedType)]))
        .rule(K::EnumDef, seq([
            word("enum"),
            name(Style::Builtin),
            list(named(K::Directive)),
            punct("{"),
            list(named(K::EnumValueDef)),
            punct("}"),
        ]))
        .rule(K::EnumValueDef, seq([
            opt(named(K::Description)),
            name(Style::Builtin),
            list(named(K::Directive)),
        ]))
        .rule(K::InputDef, seq([
            word("input"),
            name(Style::Builtin),
            list(named(K::Directive)),
            punct("{"),
            list(named(K::InputValueDef)),
            punct("}"),
        ]))
        .rule(K::ExtendDef, seq([
            word("extend"),
            named(K::ExtensionDefinition),
        ]))
        .rule(K::ExtensionDefinition, resolve(Resolver::ExtensionDefinition))
        .build()
}

fn operation(keyword: &'static str) -> Production {
    seq([
        word(keyword),
        opt(name(Style::Def)),
        opt(named(K::VariableDefinitions)),
        list(named(K::Directive)),
        named(K::SelectionSet),
    ])
}

/// `type` and `interface` definitions share a shape.
fn fielded_type(keyword: &'static str) -> Production {
    seq([
        word(keyword),
        name(Style::Builtin),
        opt(named(K::Implements)),
        list(named(K::Directive)),
        punct("{"),
        list(named(K::FieldDef)),
        punct("}"),
    ])
}
