use crate::schema::DefLocation;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}
impl std::fmt::Display for GraphQLOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        })
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error(
        "The `@{directive_name}` directive is defined more than once \
        ({location1} and {location2})"
    )]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: DefLocation,
        location2: DefLocation,
    },

    #[error("The `{type_name}.{field_name}` field is defined more than once")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        location: DefLocation,
    },

    #[error("The {operation} root operation type is defined more than once")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: DefLocation,
        location2: DefLocation,
    },

    #[error(
        "The `{type_name}` type is defined more than once ({def1} and {def2})"
    )]
    DuplicateTypeDefinition {
        type_name: String,
        def1: DefLocation,
        def2: DefLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: DefLocation,
    },

    #[error(
        "Attempted to extend `{type_name}` (a {type_kind} type) with a \
        different kind of type extension"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: &'static str,
        extension_loc: DefLocation,
    },

    #[error("Directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: DefLocation,
        directive_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: DefLocation,
        type_name: String,
    },

    #[error("Error parsing schema `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: DefLocation,
    },

    #[error(
        "The {operation} root operation type is declared as `{type_name}`, \
        which is not a defined object type"
    )]
    UndefinedRootOperationType {
        operation: GraphQLOperationType,
        type_name: String,
    },
}
impl SchemaBuildError {
    /// Where the offending definition is, when the error concerns one.
    pub fn location(&self) -> Option<&DefLocation> {
        match self {
            Self::DuplicateDirectiveDefinition { location2: location, .. }
            | Self::DuplicateOperationDefinition { location2: location, .. }
            | Self::DuplicateTypeDefinition { def2: location, .. }
            | Self::DuplicateFieldDefinition { location, .. }
            | Self::ExtensionOfUndefinedType { extension_loc: location, .. }
            | Self::InvalidExtensionType { extension_loc: location, .. }
            | Self::InvalidDunderPrefixedDirectiveName { def_location: location, .. }
            | Self::InvalidDunderPrefixedTypeName { def_location: location, .. }
            | Self::RedefinitionOfBuiltinDirective { location, .. } => Some(location),
            Self::ParseError { .. } | Self::UndefinedRootOperationType { .. } => None,
        }
    }
}
