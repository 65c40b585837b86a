use crate::schema::DefLocation;
use crate::types::EnumValueDef;
use crate::types::FieldDef;
use crate::types::InputValueDef;
use crate::types::SchemaTypeKind;
use indexmap::IndexMap;

/// A named type defined by a schema.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaType {
    pub name: String,
    pub description: Option<String>,
    pub kind: SchemaTypeKind,

    /// Where the type was defined; `None` for built-in types.
    pub location: Option<DefLocation>,
}
impl SchemaType {
    pub(crate) fn builtin_scalar(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            kind: SchemaTypeKind::Scalar,
            location: None,
        }
    }

    /// Objects, interfaces and unions: the types a selection set applies to.
    pub fn is_composite(&self) -> bool {
        matches!(
            self.kind,
            SchemaTypeKind::Object { .. }
                | SchemaTypeKind::Interface { .. }
                | SchemaTypeKind::Union { .. },
        )
    }

    pub fn is_abstract(&self) -> bool {
        matches!(
            self.kind,
            SchemaTypeKind::Interface { .. } | SchemaTypeKind::Union { .. },
        )
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, SchemaTypeKind::Scalar | SchemaTypeKind::Enum { .. })
    }

    pub fn is_input(&self) -> bool {
        matches!(
            self.kind,
            SchemaTypeKind::Scalar
                | SchemaTypeKind::Enum { .. }
                | SchemaTypeKind::InputObject { .. },
        )
    }

    pub fn is_output(&self) -> bool {
        !matches!(self.kind, SchemaTypeKind::InputObject { .. })
    }

    /// Declared fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDef>> {
        match &self.kind {
            SchemaTypeKind::Object { fields, .. }
            | SchemaTypeKind::Interface { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Interfaces an object or interface type declares it implements.
    pub fn interfaces(&self) -> &[String] {
        match &self.kind {
            SchemaTypeKind::Object { interfaces, .. }
            | SchemaTypeKind::Interface { interfaces, .. } => interfaces,
            _ => &[],
        }
    }

    pub fn input_fields(&self) -> Option<&IndexMap<String, InputValueDef>> {
        match &self.kind {
            SchemaTypeKind::InputObject { fields } => Some(fields),
            _ => None,
        }
    }

    pub fn enum_values(&self) -> Option<&IndexMap<String, EnumValueDef>> {
        match &self.kind {
            SchemaTypeKind::Enum { values } => Some(values),
            _ => None,
        }
    }
}
