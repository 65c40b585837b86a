#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDef {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}
impl EnumValueDef {
    pub(crate) fn from_ast(value: &crate::ast::schema::EnumValue) -> Self {
        Self {
            name: value.name.to_string(),
            description: value.description.clone(),
            deprecation_reason: crate::types::deprecation_reason(&value.directives),
        }
    }
}
