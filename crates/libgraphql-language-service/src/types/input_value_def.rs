use crate::types::TypeRef;

/// An argument of a field or directive, or a field of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDef {
    pub name: String,
    pub description: Option<String>,
    pub type_ref: TypeRef,

    /// The default value, printed as GraphQL.
    pub default_value: Option<String>,

    pub deprecation_reason: Option<String>,
}
impl InputValueDef {
    pub(crate) fn from_ast(input_value: &crate::ast::schema::InputValue) -> Self {
        Self {
            name: input_value.name.to_string(),
            description: input_value.description.clone(),
            type_ref: TypeRef::from_ast(&input_value.value_type),
            default_value: input_value.default_value
                .as_ref()
                .map(|value| value.to_string()),
            deprecation_reason: crate::types::deprecation_reason(
                &input_value.directives,
            ),
        }
    }

    pub(crate) fn builtin(name: &str, type_ref: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            type_ref,
            default_value: None,
            deprecation_reason: None,
        }
    }

    /// Whether this value must be provided: it is non-null and has no
    /// default.
    pub fn is_required(&self) -> bool {
        self.type_ref.is_non_null() && self.default_value.is_none()
    }
}
