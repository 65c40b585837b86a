use crate::grammar::RuleKind;
use crate::lexer::is_graphql_ignored;
use crate::token::Token;
use crate::token::TokenKind;

/// Context-sensitive productions that choose their concrete sub-rule from the
/// next (not yet consumed) token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Resolver {
    /// A top-level definition, chosen by its leading keyword.
    Definition,

    /// The definition following `extend`.
    ExtensionDefinition,

    /// A description string preceding a type system definition.
    Description,

    /// A field, aliased field, fragment spread or inline fragment. Uses
    /// lookahead on the rest of the line.
    Selection,

    /// A GraphQL input value literal.
    Value,

    /// A GraphQL type reference.
    Type,

    /// A JSON value in the variables and results grammars.
    JsonValue,
}

impl Resolver {
    /// Chooses the production for `token`. `rest` is the unread remainder of
    /// the line after `token`.
    pub fn resolve(self, token: &Token<'_>, rest: &str) -> Option<RuleKind> {
        match self {
            Self::Definition => resolve_definition(token),
            Self::ExtensionDefinition => resolve_extension(token),
            Self::Description => resolve_string(token),
            Self::Selection => resolve_selection(token, rest),
            Self::Value => resolve_value(token),
            Self::Type => resolve_type(token),
            Self::JsonValue => resolve_json_value(token),
        }
    }
}

fn resolve_definition(token: &Token<'_>) -> Option<RuleKind> {
    match token.kind {
        TokenKind::Punctuation if token.value == "{" => Some(RuleKind::ShortQuery),
        TokenKind::String | TokenKind::BlockString => {
            Some(RuleKind::DescribedDefinition)
        },
        TokenKind::Name => match token.value {
            "query" => Some(RuleKind::Query),
            "mutation" => Some(RuleKind::Mutation),
            "subscription" => Some(RuleKind::Subscription),
            "fragment" => Some(RuleKind::FragmentDefinition),
            "directive" => Some(RuleKind::DirectiveDef),
            "extend" => Some(RuleKind::ExtendDef),
            _ => resolve_extension(token),
        },
        _ => None,
    }
}

fn resolve_extension(token: &Token<'_>) -> Option<RuleKind> {
    if token.kind != TokenKind::Name {
        return None;
    }
    match token.value {
        "schema" => Some(RuleKind::SchemaDef),
        "scalar" => Some(RuleKind::ScalarDef),
        "type" => Some(RuleKind::ObjectTypeDef),
        "interface" => Some(RuleKind::InterfaceDef),
        "union" => Some(RuleKind::UnionDef),
        "enum" => Some(RuleKind::EnumDef),
        "input" => Some(RuleKind::InputDef),
        _ => None,
    }
}

fn resolve_string(token: &Token<'_>) -> Option<RuleKind> {
    match token.kind {
        TokenKind::String => Some(RuleKind::StringValue),
        TokenKind::BlockString => Some(RuleKind::BlockStringValue),
        _ => None,
    }
}

fn resolve_selection(token: &Token<'_>, rest: &str) -> Option<RuleKind> {
    match token.kind {
        TokenKind::Punctuation if token.value == "..." => {
            let after = skip_ignored(rest);
            let is_inline = after.starts_with('@')
                || after.starts_with('{')
                || starts_with_word(after, "on");
            Some(if is_inline {
                RuleKind::InlineFragment
            } else {
                RuleKind::FragmentSpread
            })
        },
        TokenKind::Name => Some(if skip_ignored(rest).starts_with(':') {
            RuleKind::AliasedField
        } else {
            RuleKind::Field
        }),
        _ => None,
    }
}

fn resolve_value(token: &Token<'_>) -> Option<RuleKind> {
    match token.kind {
        TokenKind::Number => Some(RuleKind::NumberValue),
        TokenKind::String => Some(RuleKind::StringValue),
        TokenKind::BlockString => Some(RuleKind::BlockStringValue),
        TokenKind::Punctuation => match token.value {
            "[" => Some(RuleKind::ListValue),
            "{" => Some(RuleKind::ObjectValue),
            "$" => Some(RuleKind::Variable),
            _ => None,
        },
        TokenKind::Name => Some(match token.value {
            "true" | "false" => RuleKind::BooleanValue,
            "null" => RuleKind::NullValue,
            _ => RuleKind::EnumValue,
        }),
        _ => None,
    }
}

fn resolve_type(token: &Token<'_>) -> Option<RuleKind> {
    match token.kind {
        TokenKind::Punctuation if token.value == "[" => Some(RuleKind::ListType),
        TokenKind::Name => Some(RuleKind::NonNullType),
        _ => None,
    }
}

fn resolve_json_value(token: &Token<'_>) -> Option<RuleKind> {
    match token.kind {
        TokenKind::Number => Some(RuleKind::NumberValue),
        TokenKind::String => Some(RuleKind::StringValue),
        TokenKind::Punctuation => match token.value {
            "[" => Some(RuleKind::ListValue),
            "{" => Some(RuleKind::ObjectValue),
            _ => None,
        },
        TokenKind::Name => match token.value {
            "true" | "false" => Some(RuleKind::BooleanValue),
            "null" => Some(RuleKind::NullValue),
            _ => None,
        },
        _ => None,
    }
}

fn skip_ignored(text: &str) -> &str {
    text.trim_start_matches(is_graphql_ignored)
}

fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word).is_some_and(|after| {
        !after.starts_with(|ch: char| ch == '_' || ch.is_ascii_alphanumeric())
    })
}
