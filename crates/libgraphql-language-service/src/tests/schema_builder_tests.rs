//! Tests for [`crate::SchemaBuilder`].

use crate::schema::GraphQLOperationType;
use crate::tests::utils::star_wars_schema;
use crate::types::TypeRef;
use crate::Schema;
use crate::SchemaBuildError;

fn build(sdl: &str) -> Result<Schema, SchemaBuildError> {
    Schema::builder().load_str(None, sdl)?.build()
}

// =============================================================================
// Building
// =============================================================================

/// Verifies that root operation types default to their conventional names.
#[test]
fn test_default_root_types() {
    let schema = star_wars_schema();
    assert_eq!(schema.query_type().map(|t| t.name.as_str()), Some("Query"));
    assert_eq!(schema.mutation_type().map(|t| t.name.as_str()), Some("Mutation"));
    assert!(schema.subscription_type().is_none());
}

/// Verifies that a `schema` block names the root operation types.
#[test]
fn test_declared_root_types() {
    let schema = build("schema { query: Root } type Root { id: ID }").unwrap();
    assert!(schema.is_query_type("Root"));
    assert!(schema.field_def("Root", "id").is_some());
}

/// Verifies that a schema without a query type still builds.
#[test]
fn test_no_query_type() {
    let schema = build("type Foo { id: ID }").unwrap();
    assert!(schema.query_type().is_none());
}

/// Verifies that builtin scalars and directives are always present.
#[test]
fn test_builtins_are_injected() {
    let schema = build("type Query { id: ID }").unwrap();
    for scalar in ["Int", "Float", "String", "Boolean", "ID"] {
        assert!(schema.get_type(scalar).is_some(), "missing {scalar}");
    }
    for directive in ["skip", "include", "deprecated", "specifiedBy"] {
        assert!(schema.get_directive(directive).is_some(), "missing @{directive}");
    }
}

/// Verifies that field types, descriptions and deprecations are recorded.
#[test]
fn test_field_definitions() {
    let schema = star_wars_schema();
    let hero = schema.field_def("Query", "hero").unwrap();
    assert_eq!(hero.type_ref, TypeRef::named("Character"));
    assert_eq!(hero.description.as_deref(), Some("Finds the hero of a film."));
    assert_eq!(hero.arguments[0].name, "episode");

    let leader = schema.field_def("Query", "leader").unwrap();
    assert_eq!(leader.deprecation_reason.as_deref(), Some("Use `hero`."));

    let id = schema.field_def("Human", "id").unwrap();
    assert_eq!(id.type_ref.to_string(), "String!");
}

/// Verifies that meta fields resolve on the types they belong to.
#[test]
fn test_meta_fields() {
    let schema = star_wars_schema();
    assert!(schema.field_def("Human", "__typename").is_some());
    assert!(schema.field_def("Query", "__schema").is_some());
    assert!(schema.field_def("Human", "__schema").is_none());
    let names: Vec<&str> = schema.meta_fields("Query")
        .into_iter()
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(names, vec!["__typename", "__schema", "__type"]);
}

/// Verifies the possible types of interfaces, objects and unions.
#[test]
fn test_possible_types() {
    let schema = build(
        "interface Pet { name: String }\n\
         type Cat implements Pet { name: String }\n\
         type Dog implements Pet { name: String }\n\
         type Rock { weight: Int }\n\
         union Thing = Cat | Rock",
    ).unwrap();
    let names = |type_name: &str| -> Vec<String> {
        schema.possible_types(type_name)
            .into_iter()
            .map(|t| t.name.clone())
            .collect()
    };
    assert_eq!(names("Pet"), vec!["Cat", "Dog"]);
    assert_eq!(names("Thing"), vec!["Cat", "Rock"]);
    assert_eq!(names("Rock"), vec!["Rock"]);
    assert!(schema.do_types_overlap("Pet", "Thing"));
    assert!(!schema.do_types_overlap("Dog", "Thing"));
    assert!(schema.is_possible_type("Pet", "Dog"));
}

/// Verifies that type extensions are merged into the extended type.
#[test]
fn test_type_extensions() {
    let schema = build(
        "type Query { a: Int }\n\
         extend type Query { b: Int }\n\
         enum Color { RED }\n\
         extend enum Color { BLUE }",
    ).unwrap();
    assert!(schema.field_def("Query", "b").is_some());
    let colors: Vec<&str> = schema.get_type("Color")
        .and_then(|t| t.enum_values())
        .map(|values| values.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(colors, vec!["RED", "BLUE"]);
}

// =============================================================================
// Errors
// =============================================================================

/// Verifies that a type defined twice is rejected.
#[test]
fn test_duplicate_type() {
    let err = build("type A { x: Int }\ntype A { y: Int }").unwrap_err();
    assert!(
        matches!(err, SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. } if type_name == "A"),
        "unexpected error: {err:?}",
    );
}

/// Verifies that builtin directives may not be redefined.
#[test]
fn test_redefined_builtin_directive() {
    let err = build("directive @skip on FIELD").unwrap_err();
    assert!(matches!(err, SchemaBuildError::RedefinitionOfBuiltinDirective { .. }));
}

/// Verifies that `__`-prefixed names are reserved.
#[test]
fn test_dunder_prefixed_names() {
    assert!(matches!(
        build("type __Foo { x: Int }").unwrap_err(),
        SchemaBuildError::InvalidDunderPrefixedTypeName { .. },
    ));
    assert!(matches!(
        build("directive @__foo on FIELD").unwrap_err(),
        SchemaBuildError::InvalidDunderPrefixedDirectiveName { .. },
    ));
}

/// Verifies that extending an undefined type is rejected.
#[test]
fn test_extension_of_undefined_type() {
    assert!(matches!(
        build("extend type Nope { a: Int }").unwrap_err(),
        SchemaBuildError::ExtensionOfUndefinedType { .. },
    ));
}

/// Verifies that extending a type with the wrong kind of extension is
/// rejected.
#[test]
fn test_invalid_extension_type() {
    assert!(matches!(
        build("enum Color { RED }\nextend type Color { a: Int }").unwrap_err(),
        SchemaBuildError::InvalidExtensionType { .. },
    ));
}

/// Verifies that a root operation type must name a defined object type.
#[test]
fn test_undefined_root_operation_type() {
    let err = build("schema { query: Missing }").unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::UndefinedRootOperationType {
            operation: GraphQLOperationType::Query,
            type_name: "Missing".to_string(),
        },
    );
}

/// Verifies that SDL syntax errors name the source they came from.
#[test]
fn test_parse_error() {
    let err = build("type {").unwrap_err();
    assert!(matches!(err, SchemaBuildError::ParseError { .. }));
    assert!(err.to_string().contains("str://0"), "{err}");
}

/// Verifies that errors about a definition point at the later definition.
#[test]
fn test_error_location() {
    let err = build("type A { x: Int }\ntype A { y: Int }").unwrap_err();
    let location = err.location().unwrap();
    assert_eq!(location.position, crate::Position::new(1, 0));
    assert_eq!(location.file, std::path::PathBuf::from("str://0"));

    assert!(build("type {").unwrap_err().location().is_none());
}

/// Verifies that defined types remember where they were defined and that
/// built-in scalars do not.
#[test]
fn test_type_locations() {
    let schema = build("type Query { a: Int }\n\ntype A { b: String }").unwrap();
    let location = schema.get_type("A").unwrap().location.clone().unwrap();
    assert_eq!(location.position, crate::Position::new(2, 0));
    assert_eq!(location.file, std::path::PathBuf::from("str://0"));
    assert_eq!(schema.get_type("Query").unwrap().location.as_ref().unwrap().position,
        crate::Position::new(0, 0));
    assert!(schema.get_type("Int").unwrap().location.is_none());
}
