use crate::types::InputValueDef;
use crate::types::TypeRef;

/// A field of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValueDef>,
    pub type_ref: TypeRef,
    pub deprecation_reason: Option<String>,
}
impl FieldDef {
    pub(crate) fn from_ast(field: &crate::ast::schema::Field) -> Self {
        Self {
            name: field.name.to_string(),
            description: field.description.clone(),
            arguments: field.arguments.iter().map(InputValueDef::from_ast).collect(),
            type_ref: TypeRef::from_ast(&field.field_type),
            deprecation_reason: crate::types::deprecation_reason(&field.directives),
        }
    }

    pub fn argument(&self, name: &str) -> Option<&InputValueDef> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}
