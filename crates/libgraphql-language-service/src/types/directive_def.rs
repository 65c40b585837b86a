use crate::types::DirectiveLocation;
use crate::types::InputValueDef;
use crate::types::TypeRef;

/// A directive the schema declares, either in SDL or as one of the built-in
/// directives every schema has.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDef {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValueDef>,
    pub locations: Vec<DirectiveLocation>,
    pub repeatable: bool,
}
impl DirectiveDef {
    pub(crate) fn from_ast(def: &crate::ast::schema::DirectiveDefinition) -> Self {
        Self {
            name: def.name.to_string(),
            description: def.description.clone(),
            arguments: def.arguments.iter().map(InputValueDef::from_ast).collect(),
            locations: def.locations.iter().map(DirectiveLocation::from_ast).collect(),
            repeatable: def.repeatable,
        }
    }

    pub fn argument(&self, name: &str) -> Option<&InputValueDef> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    pub fn is_valid_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    pub(crate) fn skip() -> Self {
        Self::conditional(
            "skip",
            "Directs the executor to skip this field or fragment when the `if` \
            argument is true.",
            "Skipped when true.",
        )
    }

    pub(crate) fn include() -> Self {
        Self::conditional(
            "include",
            "Directs the executor to include this field or fragment only when \
            the `if` argument is true.",
            "Included when true.",
        )
    }

    pub(crate) fn deprecated() -> Self {
        let mut reason = InputValueDef::builtin("reason", TypeRef::named("String"));
        reason.description = Some(
            "Explains why this element was deprecated, usually also including \
            a suggestion for how to access supported similar data."
                .to_string(),
        );
        reason.default_value = Some(format!(
            "\"{}\"",
            crate::types::DEFAULT_DEPRECATION_REASON,
        ));
        Self {
            name: "deprecated".to_string(),
            description: Some(
                "Marks an element of a GraphQL schema as no longer supported."
                    .to_string(),
            ),
            arguments: vec![reason],
            locations: vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            repeatable: false,
        }
    }

    pub(crate) fn specified_by() -> Self {
        let mut url = InputValueDef::builtin(
            "url",
            TypeRef::non_null(TypeRef::named("String")),
        );
        url.description = Some(
            "The URL that specifies the behavior of this scalar.".to_string(),
        );
        Self {
            name: "specifiedBy".to_string(),
            description: Some(
                "Exposes a URL that specifies the behavior of this scalar."
                    .to_string(),
            ),
            arguments: vec![url],
            locations: vec![DirectiveLocation::Scalar],
            repeatable: false,
        }
    }

    fn conditional(name: &str, description: &str, if_description: &str) -> Self {
        let mut if_arg = InputValueDef::builtin(
            "if",
            TypeRef::non_null(TypeRef::named("Boolean")),
        );
        if_arg.description = Some(if_description.to_string());
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            arguments: vec![if_arg],
            locations: vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            repeatable: false,
        }
    }
}
