use crate::schema::DefLocation;
use crate::Position;
use crate::Range;
use crate::Schema;
use libgraphql_online_parser::OnlineParser;
use libgraphql_online_parser::RuleKind;
use libgraphql_online_parser::Style;
use libgraphql_online_parser::TokenKind;
use libgraphql_online_parser::get_token_at_position;
use libgraphql_online_parser::run_online_parser;
use std::ops::ControlFlow;

/// Where a fragment spread's fragment is defined.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionQueryResult {
    pub name: String,

    /// The whole fragment definition, from `fragment` to its closing brace.
    pub range: Range,

    /// The spread's name, as it appears at the cursor.
    pub query_range: Range,
}

/// Jumps from the name of a fragment spread at `position` to the definition
/// of that fragment in the same document.
///
/// Returns `None` when the cursor is not on a spread's name or the document
/// defines no fragment by that name.
pub fn get_definition(text: &str, position: Position) -> Option<DefinitionQueryResult> {
    let token = get_token_at_position(text, position, 0);
    let frame = token.state.top().filter(|frame| frame.kind == RuleKind::FragmentSpread)?;
    let name = frame.name.clone()?;
    if token.string != name {
        return None;
    }
    let query_range = Range::on_line(token.line, token.start, token.end);
    let range = find_fragment_definition(text, &name)?;
    log::debug!("fragment `{name}` is defined at {}", range.start);
    Some(DefinitionQueryResult {
        name,
        range,
        query_range,
    })
}

/// Where the schema defines a type named at the cursor.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedTypeDefinition {
    pub name: String,
    pub location: DefLocation,

    /// The type's name, as it appears at the cursor.
    pub query_range: Range,
}

/// Jumps from a type reference at `position` (a variable's type, a type
/// condition, or a field, argument, interface or union member type in SDL)
/// to where `schema` defines that type.
///
/// Returns `None` when the cursor is not on a type name, or the type is
/// unknown or built in.
pub fn get_named_type_definition(
    schema: &Schema,
    text: &str,
    position: Position,
) -> Option<NamedTypeDefinition> {
    let token = get_token_at_position(text, position, 0);
    let frame = token.state.top().filter(|frame| frame.kind == RuleKind::NamedType)?;
    let name = frame.name.clone()?;
    if token.string != name {
        return None;
    }
    let location = schema.get_type(&name)?.location.clone()?;
    log::debug!("type `{name}` is defined at {location}");
    Some(NamedTypeDefinition {
        name,
        location,
        query_range: Range::on_line(token.line, token.start, token.end),
    })
}

/// The range of the first complete definition of fragment `name`.
fn find_fragment_definition(text: &str, name: &str) -> Option<Range> {
    let mut found = None;
    let mut start: Option<Position> = None;
    let mut defines_name = false;

    run_online_parser(&OnlineParser::graphql(), text, |cursor, state, token, line_idx| {
        if token.kind == TokenKind::Eof || token.style == Style::Ws {
            return ControlFlow::Continue(());
        }
        match (start, state.find(RuleKind::FragmentDefinition)) {
            (None, Some(_)) => {
                start = Some(Position::new(line_idx, cursor.column_of(token.start)));
                defines_name = false;
            },
            (Some(_), Some(frame)) => {
                defines_name = frame.name.as_deref() == Some(name);
            },
            (Some(fragment_start), None) => {
                start = None;
                if defines_name && token.value == "}" {
                    let end = Position::new(line_idx, cursor.column_of(token.end));
                    found = Some(Range::new(fragment_start, end));
                    return ControlFlow::Break(());
                }
            },
            (None, None) => (),
        }
        ControlFlow::Continue(())
    });

    found
}
