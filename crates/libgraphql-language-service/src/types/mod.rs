mod directive_def;
mod directive_location;
mod enum_value_def;
mod field_def;
mod input_value_def;
mod schema_type;
mod schema_type_kind;
mod type_ref;

pub use directive_def::DirectiveDef;
pub use directive_location::DirectiveLocation;
pub use enum_value_def::EnumValueDef;
pub use field_def::FieldDef;
pub use input_value_def::InputValueDef;
pub use schema_type::SchemaType;
pub use schema_type_kind::SchemaTypeKind;
pub use type_ref::TypeRef;

/// The reason recorded by a `@deprecated` directive among `directives`, if
/// any. A bare `@deprecated` uses the directive's default reason.
pub(crate) fn deprecation_reason(
    directives: &[crate::ast::schema::Directive],
) -> Option<String> {
    let directive = directives.iter().find(|d| d.name == "deprecated")?;
    let reason = directive.arguments
        .iter()
        .find(|(name, _)| name == "reason")
        .and_then(|(_, value)| match value {
            crate::ast::schema::Value::String(reason) => Some(reason.clone()),
            _ => None,
        });
    Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
}

pub(crate) const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";
