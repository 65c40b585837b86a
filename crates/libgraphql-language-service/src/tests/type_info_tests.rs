//! Tests for [`crate::get_type_info`] and [`crate::get_context_at_position`].

use crate::tests::utils::end_of;
use crate::tests::utils::star_wars_schema;
use crate::types::TypeRef;
use crate::DocumentMode;
use crate::Position;
use crate::get_context_at_position;
use crate::get_definition_state;
use libgraphql_online_parser::RuleKind;

/// Verifies that a field's selection set resolves to the field's type.
#[test]
fn test_nested_selection_set() {
    let schema = star_wars_schema();
    let text = "{ hero { ";
    let ctx = get_context_at_position(&schema, text, end_of(text), None);
    assert_eq!(ctx.state.kind(), Some(RuleKind::SelectionSet));
    assert_eq!(ctx.type_info.parent_type.map(|t| t.name.as_str()), Some("Character"));
    assert_eq!(ctx.type_info.field_def.map(|f| f.name.as_str()), Some("hero"));
}

/// Verifies argument resolution.
#[test]
fn test_argument() {
    let schema = star_wars_schema();
    let text = "{ human(id: ";
    let ctx = get_context_at_position(&schema, text, end_of(text), None);
    let info = &ctx.type_info;
    assert_eq!(info.arg_defs.map(<[_]>::len), Some(1));
    assert_eq!(info.arg_def.map(|arg| arg.name.as_str()), Some("id"));
    assert_eq!(info.input_type, Some(TypeRef::non_null(TypeRef::named("String"))));
}

/// Verifies that list values resolve to the list's item type.
#[test]
fn test_list_value() {
    let schema: crate::Schema =
        "type Query { pick(eps: [Episode]): Int } enum Episode { A B }".parse().unwrap();
    let text = "{ pick(eps: [";
    let ctx = get_context_at_position(&schema, text, end_of(text), None);
    assert_eq!(ctx.state.kind(), Some(RuleKind::ListValue));
    assert_eq!(ctx.type_info.input_type, Some(TypeRef::named("Episode")));
}

/// Verifies that inline fragments switch the type being selected from.
#[test]
fn test_inline_fragment() {
    let schema = star_wars_schema();
    let text = "{ hero { ... on Human { ";
    let ctx = get_context_at_position(&schema, text, end_of(text), None);
    assert_eq!(ctx.type_info.parent_type.map(|t| t.name.as_str()), Some("Human"));
}

/// Verifies that SDL positions record the type being defined.
#[test]
fn test_object_type_definition() {
    let schema = star_wars_schema();
    let text = "type Foo implements ";
    let ctx = get_context_at_position(&schema, text, end_of(text), None);
    assert_eq!(ctx.type_info.object_type_def.as_deref(), Some("Foo"));
    assert_eq!(ctx.type_info.interface_def, None);
}

/// Verifies that an explicit mode overrides classification of the text.
#[test]
fn test_mode_override() {
    let schema = star_wars_schema();
    let ctx = get_context_at_position(
        &schema,
        "{ hero }",
        Position::new(0, 0),
        Some(DocumentMode::TypeSystem),
    );
    assert_eq!(ctx.mode, DocumentMode::TypeSystem);
    let ctx = get_context_at_position(&schema, "{ hero }", Position::new(0, 0), None);
    assert_eq!(ctx.mode, DocumentMode::Executable);
}

/// Verifies that the innermost operation or fragment frame is found.
#[test]
fn test_definition_state() {
    let schema = star_wars_schema();
    let text = "fragment F on Human { name ";
    let ctx = get_context_at_position(&schema, text, end_of(text), None);
    let frame = get_definition_state(&ctx.state).unwrap();
    assert_eq!(frame.kind, RuleKind::FragmentDefinition);
    assert_eq!(frame.name.as_deref(), Some("F"));
    assert_eq!(frame.type_name.as_deref(), Some("Human"));

    let text = "query Q { hero ";
    let ctx = get_context_at_position(&schema, text, end_of(text), None);
    let frame = get_definition_state(&ctx.state).unwrap();
    assert_eq!(frame.kind, RuleKind::Query);
}
