use crate::schema::SchemaBuilder;
use crate::types::DirectiveDef;
use crate::types::FieldDef;
use crate::types::InputValueDef;
use crate::types::SchemaType;
use crate::types::SchemaTypeKind;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::sync::LazyLock;

static TYPENAME_FIELD: LazyLock<FieldDef> = LazyLock::new(|| FieldDef {
    name: "__typename".to_string(),
    description: Some(
        "The name of the current Object type at runtime.".to_string(),
    ),
    arguments: vec![],
    type_ref: TypeRef::non_null(TypeRef::named("String")),
    deprecation_reason: None,
});

static SCHEMA_FIELD: LazyLock<FieldDef> = LazyLock::new(|| FieldDef {
    name: "__schema".to_string(),
    description: Some(
        "Access the current type schema of this server.".to_string(),
    ),
    arguments: vec![],
    type_ref: TypeRef::non_null(TypeRef::named("__Schema")),
    deprecation_reason: None,
});

static TYPE_FIELD: LazyLock<FieldDef> = LazyLock::new(|| FieldDef {
    name: "__type".to_string(),
    description: Some("Request the type information of a single type.".to_string()),
    arguments: vec![InputValueDef::builtin(
        "name",
        TypeRef::non_null(TypeRef::named("String")),
    )],
    type_ref: TypeRef::named("__Type"),
    deprecation_reason: None,
});

/// An immutable, read-only index over a GraphQL schema.
///
/// A `Schema` is `Send + Sync` and is meant to be built once and shared by
/// every document (and thread) that needs it.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directives: IndexMap<String, DirectiveDef>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, SchemaType>,
}
impl Schema {
    /// Starts a [`SchemaBuilder`] for loading SDL sources.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Every directive of the schema, built-in directives included.
    pub fn all_directives(&self) -> &IndexMap<String, DirectiveDef> {
        &self.directives
    }

    /// Every named type of the schema in declaration order, followed by any
    /// built-in scalar the SDL did not declare.
    pub fn all_types(&self) -> &IndexMap<String, SchemaType> {
        &self.types
    }

    pub fn get_type(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    pub fn get_directive(&self, name: &str) -> Option<&DirectiveDef> {
        self.directives.get(name)
    }

    /// The query root type. GraphQL names it `Query` unless a `schema`
    /// definition says otherwise.
    pub fn query_type(&self) -> Option<&SchemaType> {
        self.query_type.as_deref().and_then(|name| self.get_type(name))
    }

    pub fn mutation_type(&self) -> Option<&SchemaType> {
        self.mutation_type.as_deref().and_then(|name| self.get_type(name))
    }

    pub fn subscription_type(&self) -> Option<&SchemaType> {
        self.subscription_type.as_deref().and_then(|name| self.get_type(name))
    }

    pub fn is_query_type(&self, type_name: &str) -> bool {
        self.query_type.as_deref() == Some(type_name)
    }

    /// Looks up `field_name` on the composite type `parent_type`, including
    /// the `__typename` meta field and, on the query type, `__schema` and
    /// `__type`.
    pub fn field_def(&self, parent_type: &str, field_name: &str) -> Option<&FieldDef> {
        let parent = self.get_type(parent_type)?;
        match field_name {
            "__typename" if parent.is_composite() => return Some(&TYPENAME_FIELD),
            "__schema" if self.is_query_type(parent_type) => return Some(&SCHEMA_FIELD),
            "__type" if self.is_query_type(parent_type) => return Some(&TYPE_FIELD),
            _ => (),
        }
        parent.fields()?.get(field_name)
    }

    /// The meta fields selectable on `parent_type`, in the order completion
    /// offers them.
    pub fn meta_fields(&self, parent_type: &str) -> Vec<&FieldDef> {
        let mut meta_fields = vec![];
        if self.get_type(parent_type).is_some_and(SchemaType::is_composite) {
            meta_fields.push(&*TYPENAME_FIELD);
        }
        if self.is_query_type(parent_type) {
            meta_fields.push(&*SCHEMA_FIELD);
            meta_fields.push(&*TYPE_FIELD);
        }
        meta_fields
    }

    /// The object types a value of `type_name` may be at runtime: the type
    /// itself for an object, the members of a union, or every implementor
    /// of an interface.
    pub fn possible_types(&self, type_name: &str) -> Vec<&SchemaType> {
        let Some(schema_type) = self.get_type(type_name) else {
            return vec![];
        };
        match &schema_type.kind {
            SchemaTypeKind::Object { .. } => vec![schema_type],
            SchemaTypeKind::Union { members } => members
                .iter()
                .filter_map(|member| self.get_type(member))
                .collect(),
            SchemaTypeKind::Interface { .. } => self.types
                .values()
                .filter(|candidate| {
                    matches!(candidate.kind, SchemaTypeKind::Object { .. })
                        && candidate.interfaces().iter().any(|iface| iface == type_name)
                })
                .collect(),
            _ => vec![],
        }
    }

    /// Whether some object type could be both `type_a` and `type_b`, e.g.
    /// whether a fragment on `type_b` can apply within a selection on
    /// `type_a`.
    pub fn do_types_overlap(&self, type_a: &str, type_b: &str) -> bool {
        if type_a == type_b {
            return true;
        }
        let possible_a = self.possible_types(type_a);
        self.possible_types(type_b)
            .iter()
            .any(|candidate| possible_a.iter().any(|a| a.name == candidate.name))
    }

    /// Whether the object type `object_type` is one of the possible types
    /// of `abstract_type`.
    pub fn is_possible_type(&self, abstract_type: &str, object_type: &str) -> bool {
        self.possible_types(abstract_type)
            .iter()
            .any(|candidate| candidate.name == object_type)
    }
}
impl std::str::FromStr for Schema {
    type Err = crate::schema::SchemaBuildError;

    /// Builds a schema from a single SDL string.
    fn from_str(sdl: &str) -> Result<Self, Self::Err> {
        SchemaBuilder::new().load_str(None, sdl)?.build()
    }
}
