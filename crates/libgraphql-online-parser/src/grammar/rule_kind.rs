/// Names every production in the bundled grammars.
///
/// A [`RuleFrame`](crate::RuleFrame) records the kind of the production it is
/// matching, and completion/hover consumers branch on these kinds to decide
/// what the cursor is inside of. The variables and results grammars reuse the
/// value-related kinds with their own (JSON) productions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum RuleKind {
    Document,
    Definition,
    DescribedDefinition,
    Description,

    // Executable definitions
    ShortQuery,
    Query,
    Mutation,
    Subscription,
    VariableDefinitions,
    VariableDefinition,
    Variable,
    DefaultValue,
    SelectionSet,
    Selection,
    AliasedField,
    Field,
    Arguments,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    TypeCondition,

    // Values
    Value,
    NumberValue,
    StringValue,
    BlockStringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,

    // Type references
    Type,
    ListType,
    NonNullType,
    NamedType,

    Directive,

    // Type system definitions
    DirectiveDef,
    DirectiveLocation,
    SchemaDef,
    OperationTypeDef,
    ScalarDef,
    ObjectTypeDef,
    InterfaceDef,
    Implements,
    FieldDef,
    ArgumentsDef,
    InputValueDef,
    UnionDef,
    UnionMember,
    EnumDef,
    EnumValueDef,
    InputDef,
    ExtendDef,
    ExtensionDefinition,

    /// A top-level `"key": value` entry of a results document.
    Entry,

    /// Zero-length frame pushed for a token the grammar could not place.
    Invalid,

    /// Zero-length frame pushed for a comment.
    Comment,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Definition => "Definition",
            Self::DescribedDefinition => "DescribedDefinition",
            Self::Description => "Description",
            Self::ShortQuery => "ShortQuery",
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
            Self::VariableDefinitions => "VariableDefinitions",
            Self::VariableDefinition => "VariableDefinition",
            Self::Variable => "Variable",
            Self::DefaultValue => "DefaultValue",
            Self::SelectionSet => "SelectionSet",
            Self::Selection => "Selection",
            Self::AliasedField => "AliasedField",
            Self::Field => "Field",
            Self::Arguments => "Arguments",
            Self::Argument => "Argument",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::TypeCondition => "TypeCondition",
            Self::Value => "Value",
            Self::NumberValue => "NumberValue",
            Self::StringValue => "StringValue",
            Self::BlockStringValue => "BlockStringValue",
            Self::BooleanValue => "BooleanValue",
            Self::NullValue => "NullValue",
            Self::EnumValue => "EnumValue",
            Self::ListValue => "ListValue",
            Self::ObjectValue => "ObjectValue",
            Self::ObjectField => "ObjectField",
            Self::Type => "Type",
            Self::ListType => "ListType",
            Self::NonNullType => "NonNullType",
            Self::NamedType => "NamedType",
            Self::Directive => "Directive",
            Self::DirectiveDef => "DirectiveDef",
            Self::DirectiveLocation => "DirectiveLocation",
            Self::SchemaDef => "SchemaDef",
            Self::OperationTypeDef => "OperationTypeDef",
            Self::ScalarDef => "ScalarDef",
            Self::ObjectTypeDef => "ObjectTypeDef",
            Self::InterfaceDef => "InterfaceDef",
            Self::Implements => "Implements",
            Self::FieldDef => "FieldDef",
            Self::ArgumentsDef => "ArgumentsDef",
            Self::InputValueDef => "InputValueDef",
            Self::UnionDef => "UnionDef",
            Self::UnionMember => "UnionMember",
            Self::EnumDef => "EnumDef",
            Self::EnumValueDef => "EnumValueDef",
            Self::InputDef => "InputDef",
            Self::ExtendDef => "ExtendDef",
            Self::ExtensionDefinition => "ExtensionDefinition",
            Self::Entry => "Entry",
            Self::Invalid => "Invalid",
            Self::Comment => "Comment",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
