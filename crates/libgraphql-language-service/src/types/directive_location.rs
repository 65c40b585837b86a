use crate::ast;

/// Where in a document a directive may be applied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}
impl DirectiveLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    pub(crate) fn from_ast(location: &ast::schema::DirectiveLocation) -> Self {
        use ast::schema::DirectiveLocation as AstLocation;
        match location {
            AstLocation::Query => Self::Query,
            AstLocation::Mutation => Self::Mutation,
            AstLocation::Subscription => Self::Subscription,
            AstLocation::Field => Self::Field,
            AstLocation::FragmentDefinition => Self::FragmentDefinition,
            AstLocation::FragmentSpread => Self::FragmentSpread,
            AstLocation::InlineFragment => Self::InlineFragment,
            AstLocation::VariableDefinition => Self::VariableDefinition,
            AstLocation::Schema => Self::Schema,
            AstLocation::Scalar => Self::Scalar,
            AstLocation::Object => Self::Object,
            AstLocation::FieldDefinition => Self::FieldDefinition,
            AstLocation::ArgumentDefinition => Self::ArgumentDefinition,
            AstLocation::Interface => Self::Interface,
            AstLocation::Union => Self::Union,
            AstLocation::Enum => Self::Enum,
            AstLocation::EnumValue => Self::EnumValue,
            AstLocation::InputObject => Self::InputObject,
            AstLocation::InputFieldDefinition => Self::InputFieldDefinition,
        }
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
