//! Tests for [`crate::get_autocomplete_suggestions`].

use crate::tests::utils::end_of;
use crate::tests::utils::labels;
use crate::tests::utils::star_wars_schema;
use crate::CompletionItem;
use crate::CompletionItemKind;
use crate::DocumentMode;
use crate::Position;
use crate::get_autocomplete_suggestions;
use crate::get_autocomplete_suggestions_with_mode;

fn suggest_at_end(text: &str) -> Vec<CompletionItem> {
    get_autocomplete_suggestions(&star_wars_schema(), text, end_of(text))
}

fn suggest_at_end_in(text: &str, mode: DocumentMode) -> Vec<CompletionItem> {
    get_autocomplete_suggestions_with_mode(&star_wars_schema(), text, end_of(text), Some(mode))
}

// =============================================================================
// Definition keywords
// =============================================================================

/// Verifies that an empty executable document offers the operation keywords
/// and the query shorthand.
#[test]
fn test_executable_keywords() {
    let items = suggest_at_end_in("", DocumentMode::Executable);
    assert_eq!(
        labels(&items),
        vec!["query", "mutation", "subscription", "fragment", "{"],
    );
    assert_eq!(items[4].kind, CompletionItemKind::Constructor);
}

/// Verifies that an empty SDL document offers `extend` and the type system
/// keywords.
#[test]
fn test_type_system_keywords() {
    let items = suggest_at_end_in("", DocumentMode::TypeSystem);
    assert_eq!(
        labels(&items),
        vec![
            "extend",
            "type",
            "interface",
            "union",
            "enum",
            "input",
            "scalar",
            "schema",
            "directive",
        ],
    );
}

/// Verifies that a partially typed keyword ranks the closest matches first
/// and drops distant ones.
#[test]
fn test_partial_keyword() {
    let items = suggest_at_end_in("q", DocumentMode::Executable);
    assert_eq!(labels(&items), vec!["{", "query"]);
}

/// Verifies the keywords offered after `extend`.
#[test]
fn test_extend_keywords() {
    let items = suggest_at_end_in("extend ", DocumentMode::TypeSystem);
    assert_eq!(
        labels(&items),
        vec!["type", "interface", "union", "enum", "input", "scalar", "schema"],
    );
}

/// Verifies that a type extension suggests existing types of the same kind.
#[test]
fn test_extension_names() {
    assert_eq!(
        labels(&suggest_at_end_in("extend type ", DocumentMode::TypeSystem)),
        vec!["Human", "Droid", "Query", "Mutation"],
    );
    assert_eq!(
        labels(&suggest_at_end_in("extend enum ", DocumentMode::TypeSystem)),
        vec!["Episode"],
    );
}

// =============================================================================
// Fields
// =============================================================================

/// Verifies field suggestions for a partially typed field name, including
/// meta fields, and the details carried by each item.
#[test]
fn test_field_names_for_partial_name() {
    let items = get_autocomplete_suggestions(
        &star_wars_schema(),
        "{ h",
        Position::new(0, 3),
    );
    assert_eq!(labels(&items), vec!["hero", "human", "__schema"]);

    let hero = &items[0];
    assert_eq!(hero.kind, CompletionItemKind::Field);
    assert_eq!(hero.detail.as_deref(), Some("Character"));
    assert_eq!(hero.documentation.as_deref(), Some("Finds the hero of a film."));
    assert_eq!(hero.sort_text.as_deref(), Some("0hero"));
    assert_eq!(items[2].sort_text.as_deref(), Some("7__schema"));
}

/// Verifies that an empty selection set lists every non-deprecated field in
/// declaration order.
#[test]
fn test_field_names_in_empty_selection_set() {
    assert_eq!(
        labels(&suggest_at_end("{ ")),
        vec![
            "hero",
            "human",
            "droid",
            "find",
            "inputTypeTest",
            "__typename",
            "__schema",
            "__type",
        ],
    );
}

/// Verifies that nested selection sets complete against the field's type,
/// which only has `__typename` as a meta field.
#[test]
fn test_field_names_in_nested_selection_set() {
    assert_eq!(
        labels(&suggest_at_end("{ hero { ")),
        vec!["id", "name", "friends", "appearsIn", "__typename"],
    );
}

/// Verifies that a selection set on an unknown field offers nothing.
#[test]
fn test_field_names_on_unknown_field() {
    assert!(suggest_at_end("{ nope { ").is_empty());
}

// =============================================================================
// Arguments and input values
// =============================================================================

/// Verifies argument suggestions and that they insert a trailing colon.
#[test]
fn test_argument_names() {
    let items = suggest_at_end("{ human(");
    assert_eq!(labels(&items), vec!["id"]);
    assert_eq!(items[0].kind, CompletionItemKind::Variable);
    assert_eq!(items[0].detail.as_deref(), Some("String!"));
    assert_eq!(items[0].insert_text.as_deref(), Some("id: "));
}

/// Verifies that arguments of an aliased field are found through the real
/// field name.
#[test]
fn test_argument_names_of_aliased_field() {
    assert_eq!(labels(&suggest_at_end("{ alias: human(")), vec!["id"]);
}

/// Verifies enum value suggestions, which skip deprecated values.
#[test]
fn test_enum_values() {
    let items = suggest_at_end("{ hero(episode: ");
    assert_eq!(labels(&items), vec!["NEWHOPE", "EMPIRE", "JEDI"]);
    assert!(items.iter().all(|item| item.kind == CompletionItemKind::EnumMember));
    assert!(items.iter().all(|item| item.detail.as_deref() == Some("Episode")));
    assert_eq!(items[2].documentation.as_deref(), Some("Released in 1983."));
}

/// Verifies that `Boolean` arguments suggest the two literals.
#[test]
fn test_boolean_values() {
    let items = suggest_at_end("{ hero @include(if: ");
    assert_eq!(labels(&items), vec!["true", "false"]);
    assert_eq!(items[0].documentation.as_deref(), Some("Not false."));
}

/// Verifies that input object literals suggest the type's fields.
#[test]
fn test_input_object_fields() {
    let items = suggest_at_end("{ inputTypeTest(args: {");
    assert_eq!(labels(&items), vec!["key", "value", "obj"]);
    assert_eq!(items[0].kind, CompletionItemKind::Value);
    assert_eq!(items[0].insert_text.as_deref(), Some("key: "));
}

/// Verifies that nested input object literals resolve the nested field's
/// type.
#[test]
fn test_nested_input_object_fields() {
    assert_eq!(
        labels(&suggest_at_end("{ inputTypeTest(args: { obj: {")),
        vec!["key", "value", "obj"],
    );
}

// =============================================================================
// Variables
// =============================================================================

/// Verifies that after `$` only variables of the expected type are offered,
/// inserted without the sigil.
#[test]
fn test_variables_after_sigil() {
    let items = suggest_at_end(
        "query($id: String!, $ep: Episode) { hero(episode: $",
    );
    assert_eq!(labels(&items), vec!["$ep"]);
    assert_eq!(items[0].detail.as_deref(), Some("Episode"));
    assert_eq!(items[0].insert_text.as_deref(), Some("ep"));
}

/// Verifies that matching variables follow the enum values and keep their
/// sigil when inserted in a bare value position.
#[test]
fn test_variables_alongside_enum_values() {
    let items = suggest_at_end("query($ep: Episode) { hero(episode: ");
    assert_eq!(labels(&items), vec!["NEWHOPE", "EMPIRE", "JEDI", "$ep"]);
    assert_eq!(items[3].insert_text.as_deref(), Some("$ep"));
}

/// Verifies that variable definitions complete to input types only.
#[test]
fn test_variable_definition_types() {
    let items = suggest_at_end("query($a: ");
    let names = labels(&items);
    assert!(names.contains(&"Episode"));
    assert!(names.contains(&"InputType"));
    assert!(names.contains(&"String"));
    assert!(!names.contains(&"Human"));
    assert!(items.iter().all(|item| item.kind == CompletionItemKind::Variable));
}

// =============================================================================
// Fragments
// =============================================================================

/// Verifies that an inline fragment on an interface suggests its
/// implementations and the interface itself.
#[test]
fn test_type_conditions_on_interface() {
    assert_eq!(
        labels(&suggest_at_end("{ hero { ... on ")),
        vec!["Human", "Droid", "Character"],
    );
}

/// Verifies that an inline fragment on an object type suggests only that
/// type.
#[test]
fn test_type_conditions_on_object() {
    assert_eq!(labels(&suggest_at_end("{ human { ... on ")), vec!["Human"]);
}

/// Verifies that a fragment definition's type condition suggests every
/// composite type.
#[test]
fn test_type_conditions_of_fragment_definition() {
    assert_eq!(
        labels(&suggest_at_end("fragment F on ")),
        vec!["Character", "Human", "Droid", "Query", "Mutation"],
    );
}

/// Verifies that fragment spreads suggest the document's fragments whose
/// type can apply within the selection.
#[test]
fn test_fragment_spreads() {
    let text = "fragment HumanFields on Human { id }\n\
                fragment DroidFields on Droid { id }\n\
                { hero { ...";
    let items = suggest_at_end(text);
    assert_eq!(labels(&items), vec!["HumanFields", "DroidFields"]);
    assert_eq!(items[0].detail.as_deref(), Some("Human"));
    assert_eq!(
        items[0].documentation.as_deref(),
        Some("fragment HumanFields on Human"),
    );

    let text = "fragment HumanFields on Human { id }\n\
                fragment DroidFields on Droid { id }\n\
                { human { ...";
    assert_eq!(labels(&suggest_at_end(text)), vec!["HumanFields"]);
}

/// Verifies that a fragment never suggests spreading itself.
#[test]
fn test_fragment_spreads_exclude_current_fragment() {
    let text = "fragment Any on Character { id }\n\
                fragment Other on Droid { id }\n\
                fragment Current on Human { ...";
    assert_eq!(labels(&suggest_at_end(text)), vec!["Any"]);
}

// =============================================================================
// Directives
// =============================================================================

/// Verifies that directives are filtered by the location they are typed in.
#[test]
fn test_directives_on_field() {
    assert_eq!(labels(&suggest_at_end("{ hero @")), vec!["skip", "include"]);
}

/// Verifies that no directive is offered where none may be used.
#[test]
fn test_directives_on_query() {
    assert!(suggest_at_end("query @").is_empty());
}

// =============================================================================
// Type system definitions
// =============================================================================

/// Verifies that a field definition's type completes to output types.
#[test]
fn test_field_definition_type() {
    let items = suggest_at_end_in("type Foo {\n  bar: Hu", DocumentMode::TypeSystem);
    assert_eq!(items.first().map(|item| item.label.as_str()), Some("Human"));
    assert!(!labels(&items).contains(&"InputType"));
}

/// Verifies that an input field definition's type completes to input types.
#[test]
fn test_input_value_definition_type() {
    let items = suggest_at_end_in("input Foo {\n  bar: In", DocumentMode::TypeSystem);
    let names = labels(&items);
    assert!(names.contains(&"InputType"));
    assert!(names.contains(&"Int"));
    assert!(!names.contains(&"Human"));
}

/// Verifies that `implements` suggests the schema's interfaces.
#[test]
fn test_implements() {
    let items = suggest_at_end_in("type Foo implements ", DocumentMode::TypeSystem);
    assert_eq!(labels(&items), vec!["Character"]);
    assert_eq!(items[0].kind, CompletionItemKind::Interface);
    assert_eq!(
        items[0].documentation.as_deref(),
        Some("A character in the Star Wars Trilogy."),
    );
}

/// Verifies that interfaces defined in the document are offered and that
/// already implemented interfaces are not offered again.
#[test]
fn test_implements_skips_listed_interfaces() {
    let text = "interface Node { id: ID }\ntype Foo implements Node & ";
    assert_eq!(
        labels(&suggest_at_end_in(text, DocumentMode::TypeSystem)),
        vec!["Character"],
    );

    let text = "interface Node { id: ID }\ntype Foo implements ";
    assert_eq!(
        labels(&suggest_at_end_in(text, DocumentMode::TypeSystem)),
        vec!["Character", "Node"],
    );
}

/// Verifies that nothing is suggested between two interface names without
/// a separator.
#[test]
fn test_implements_requires_separator() {
    let text = "type Foo implements Character ";
    assert!(suggest_at_end_in(text, DocumentMode::TypeSystem).is_empty());
}
