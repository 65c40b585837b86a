//! Tests for the bundled validation rules and the deprecation finder.

use crate::ast;
use crate::tests::utils::star_wars_schema;
use crate::validation;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::Range;

fn errors(text: &str) -> Vec<ValidationError> {
    let schema = star_wars_schema();
    let document = ast::query::parse(text).unwrap();
    let ctx = ValidationContext::new(&schema, &document, text);
    validation::validate(&ctx, &validation::default_validators())
}

/// Every message the bundled rules report for `text`, in report order.
fn messages(text: &str) -> Vec<String> {
    errors(text)
        .into_iter()
        .map(|error| error.message)
        .collect()
}

fn deprecations(text: &str) -> Vec<String> {
    let schema = star_wars_schema();
    let document = ast::query::parse(text).unwrap();
    let ctx = ValidationContext::new(&schema, &document, text);
    validation::find_deprecated_usages(&ctx)
        .into_iter()
        .map(|error| error.message)
        .collect()
}

// =============================================================================
// Operations and fragments
// =============================================================================

/// Verifies that an anonymous operation must stand alone.
#[test]
fn test_lone_anonymous_operation() {
    assert_eq!(
        messages("{ hero { name } }\nquery Named { hero { id } }"),
        vec!["This anonymous operation must be the only defined operation."],
    );
}

/// Verifies that fragment names must be unique.
#[test]
fn test_unique_fragment_names() {
    let text = "{ hero { ...F } }\n\
                fragment F on Character { name }\n\
                fragment F on Character { id }";
    assert_eq!(
        messages(text),
        vec!["There can be only one fragment named \"F\"."],
    );
}

/// Verifies unknown and unused fragments.
#[test]
fn test_fragment_usage() {
    assert_eq!(
        messages("{ hero { ...Missing } }"),
        vec!["Unknown fragment \"Missing\"."],
    );
    assert_eq!(
        messages("{ hero { name } }\nfragment Unused on Human { name }"),
        vec!["Fragment \"Unused\" is never used."],
    );
}

/// Verifies that type conditions and variable types must be defined.
#[test]
fn test_known_type_names() {
    let found = messages("query($a: Nope) { hero { ... on Alien { name } } }");
    assert!(found.contains(&"Unknown type \"Nope\".".to_string()), "{found:?}");
    assert!(found.contains(&"Unknown type \"Alien\".".to_string()), "{found:?}");
}

/// Verifies that fragments may only condition on composite types.
#[test]
fn test_fragments_on_composite_types() {
    let found = messages("{ hero { name } }\nfragment F on Episode { x }");
    assert!(
        found.contains(&"Fragment \"F\" cannot condition on non composite type \"Episode\".".to_string()),
        "{found:?}",
    );

    let found = messages("{ hero { ... on Episode { name } } }");
    assert!(
        found.contains(&"Fragment cannot condition on non composite type \"Episode\".".to_string()),
        "{found:?}",
    );
}

/// Verifies that a fragment cannot be spread where its type can never
/// apply.
#[test]
fn test_possible_fragment_spreads() {
    assert_eq!(
        messages("{ human(id: \"1\") { ... on Droid { primaryFunction } } }"),
        vec![
            "Fragment cannot be spread here as objects of type \"Human\" can never \
            be of type \"Droid\".",
        ],
    );
    assert_eq!(
        messages("{ human(id: \"1\") { ...D } }\nfragment D on Droid { primaryFunction }"),
        vec![
            "Fragment \"D\" cannot be spread here as objects of type \"Human\" can \
            never be of type \"Droid\".",
        ],
    );
    assert_eq!(
        messages("{ hero { ... on Droid { primaryFunction } } }"),
        Vec::<String>::new(),
    );
}

/// Verifies that fragments spreading themselves (directly or through
/// another fragment) are reported once per cycle.
#[test]
fn test_no_fragment_cycles() {
    let text = "{ hero { ...A } }\n\
                fragment A on Character { name ...B }\n\
                fragment B on Character { ...A }";
    let found = errors(text);
    assert_eq!(found.len(), 1, "{found:?}");
    assert_eq!(found[0].message, "Cannot spread fragment \"A\" within itself via \"B\".");
    assert_eq!(
        found[0].ranges,
        vec![Range::on_line(1, 34, 35), Range::on_line(2, 29, 30)],
    );

    assert_eq!(
        messages("{ hero { ...A } }\nfragment A on Character { name ...A }"),
        vec!["Cannot spread fragment \"A\" within itself."],
    );
}

// =============================================================================
// Fields and arguments
// =============================================================================

/// Verifies that leaf fields take no selection and composite fields need
/// one.
#[test]
fn test_scalar_leafs() {
    assert_eq!(
        messages("{ hero }"),
        vec![
            "Field \"hero\" of type \"Character\" must have a selection of \
            subfields. Did you mean \"hero { ... }\"?",
        ],
    );
    assert_eq!(
        messages("{ hero { name { x } } }"),
        vec!["Field \"name\" must not have a selection since type \"String\" has no subfields."],
    );
}

/// Verifies unknown and missing arguments.
#[test]
fn test_arguments() {
    assert_eq!(
        messages("{ hero(nope: 1) { name } }"),
        vec!["Unknown argument \"nope\" on field \"Query.hero\"."],
    );
    assert_eq!(
        messages("{ human { name } }"),
        vec![
            "Field \"Query.human\" argument \"id\" of type \"String!\" is required, \
            but it was not provided.",
        ],
    );
}

/// Verifies that an argument may be passed only once, with every
/// occurrence underlined.
#[test]
fn test_unique_argument_names() {
    let found = errors("{ hero(episode: JEDI, episode: EMPIRE) { name } }");
    assert_eq!(found.len(), 1, "{found:?}");
    assert_eq!(found[0].message, "There can be only one argument named \"episode\".");
    assert_eq!(
        found[0].ranges,
        vec![Range::on_line(0, 7, 14), Range::on_line(0, 22, 29)],
    );
}

/// Verifies that literal values must fit the argument's input type.
#[test]
fn test_values_of_correct_type() {
    assert_eq!(
        messages("{ hero(episode: NOPE) { name } }"),
        vec!["Value \"NOPE\" does not exist in \"Episode\" enum."],
    );
    assert_eq!(
        messages("{ hero(episode: \"JEDI\") { name } }"),
        vec!["Enum \"Episode\" cannot represent non-enum value: \"JEDI\"."],
    );
    assert_eq!(
        messages("{ human(id: 4) { name } }"),
        vec!["String cannot represent a non string value: 4"],
    );
    assert_eq!(
        messages("{ human(id: null) { name } }"),
        vec!["Expected value of type \"String!\", found null."],
    );
    assert_eq!(
        messages("{ find(text: \"x\", limit: 3000000000) { name } }"),
        vec!["Int cannot represent non 32-bit signed integer value: 3000000000"],
    );
}

/// Verifies unknown and missing input object fields.
#[test]
fn test_values_of_correct_type_input_objects() {
    assert_eq!(
        messages("{ inputTypeTest(args: { value: 1, nope: 2 }) { name } }"),
        vec![
            "Field \"nope\" is not defined by type \"InputType\".",
            "Field \"InputType.key\" of required type \"String!\" was not provided.",
        ],
    );
    assert_eq!(
        messages("{ inputTypeTest(args: { key: \"k\", obj: { key: true } }) { name } }"),
        vec!["String cannot represent a non string value: true"],
    );
    assert_eq!(
        messages("{ inputTypeTest(args: { key: \"k\", value: 2 }) { name } }"),
        Vec::<String>::new(),
    );
}

/// Verifies that fields sharing a response name must be mergeable.
#[test]
fn test_overlapping_fields_can_be_merged() {
    assert_eq!(
        messages("{ hero { name: id name } }"),
        vec![
            "Fields \"name\" conflict because \"id\" and \"name\" are different \
            fields. Use different aliases on the fields to fetch both if this was \
            intentional.",
        ],
    );
    assert_eq!(
        messages("{ hero(episode: JEDI) { name } hero(episode: EMPIRE) { name } }"),
        vec![
            "Fields \"hero\" conflict because they have differing arguments. Use \
            different aliases on the fields to fetch both if this was intentional.",
        ],
    );
    assert_eq!(
        messages("{ hero { name } hero { name: id } }"),
        vec![
            "Fields \"hero\" conflict because subfields \"name\" conflict because \
            \"name\" and \"id\" are different fields. Use different aliases on the \
            fields to fetch both if this was intentional.",
        ],
    );
}

/// Verifies that fields of different object types only need matching
/// shapes.
#[test]
fn test_overlapping_fields_on_exclusive_types() {
    assert_eq!(
        messages(
            "{ hero { ... on Human { x: homePlanet } ... on Droid { x: primaryFunction } } }",
        ),
        Vec::<String>::new(),
    );
    assert_eq!(
        messages("{ hero { ... on Human { x: homePlanet } ... on Droid { x: id } } }"),
        vec![
            "Fields \"x\" conflict because they return conflicting types \"String\" \
            and \"String!\". Use different aliases on the fields to fetch both if this \
            was intentional.",
        ],
    );
}

/// Verifies unknown directives and directives with missing arguments.
#[test]
fn test_directives() {
    assert_eq!(
        messages("{ hero @nope { name } }"),
        vec!["Unknown directive \"@nope\"."],
    );
    assert_eq!(
        messages("{ hero @skip { name } }"),
        vec![
            "Directive \"@skip\" argument \"if\" of type \"Boolean!\" is required, \
            but it was not provided.",
        ],
    );
    assert_eq!(messages("query @skip(if: true) { hero { name } }").len(), 1);
}

// =============================================================================
// Variables
// =============================================================================

/// Verifies undefined and unused variables.
#[test]
fn test_variables() {
    assert_eq!(
        messages("query Q { hero(episode: $ep) { name } }"),
        vec!["Variable \"$ep\" is not defined by operation \"Q\"."],
    );
    assert_eq!(
        messages("query Q($ep: Episode) { hero { name } }"),
        vec!["Variable \"$ep\" is never used in operation \"Q\"."],
    );
}

/// Verifies that an operation may declare each variable once.
#[test]
fn test_unique_variable_names() {
    let found = errors("query ($a: Int, $a: Int) { find(text: \"x\", limit: $a) { name } }");
    assert_eq!(found.len(), 1, "{found:?}");
    assert_eq!(found[0].message, "There can be only one variable named \"$a\".");
    assert_eq!(
        found[0].ranges,
        vec![Range::on_line(0, 7, 9), Range::on_line(0, 16, 18)],
    );
}

/// Verifies that a variable's type must fit where it is used.
#[test]
fn test_variables_in_allowed_position() {
    assert_eq!(
        messages("query ($e: String) { hero(episode: $e) { name } }"),
        vec!["Variable \"$e\" of type \"String\" used in position expecting type \"Episode\"."],
    );
    assert_eq!(
        messages("query ($id: String) { human(id: $id) { name } }"),
        vec!["Variable \"$id\" of type \"String\" used in position expecting type \"String!\"."],
    );
    assert_eq!(
        messages("query ($id: String = \"1\") { human(id: $id) { name } }"),
        Vec::<String>::new(),
    );
}

/// Verifies that variable usages inside spread fragments are checked
/// against the operation's declarations.
#[test]
fn test_variables_in_allowed_position_through_fragments() {
    let text = "query Q($ep: String) { ...F }\n\
                fragment F on Query { hero(episode: $ep) { name } }";
    assert_eq!(
        messages(text),
        vec!["Variable \"$ep\" of type \"String\" used in position expecting type \"Episode\"."],
    );
}

/// Verifies that variable defaults must fit the declared type.
#[test]
fn test_variable_default_values() {
    assert_eq!(
        messages("query ($l: Int = \"x\") { find(text: \"a\", limit: $l) { name } }"),
        vec!["Int cannot represent non-integer value: \"x\""],
    );
}

/// Verifies that variables used through fragment spreads count as used.
#[test]
fn test_variables_used_in_fragments() {
    let text = "query Q($ep: Episode) { ...F }\n\
                fragment F on Query { hero(episode: $ep) { name } }";
    assert_eq!(messages(text), Vec::<String>::new());
}

// =============================================================================
// Deprecations
// =============================================================================

/// Verifies that deprecated fields and enum values are found.
#[test]
fn test_deprecated_usages() {
    assert_eq!(
        deprecations("{ leader { name } hero(episode: HOLIDAY_SPECIAL) { name } }"),
        vec![
            "The field Query.leader is deprecated. Use `hero`.",
            "The enum value \"Episode.HOLIDAY_SPECIAL\" is deprecated. Never aired again.",
        ],
    );
}

/// Verifies that documents without deprecated usages have no warnings.
#[test]
fn test_no_deprecated_usages() {
    assert!(deprecations("{ hero(episode: JEDI) { name } }").is_empty());
}
