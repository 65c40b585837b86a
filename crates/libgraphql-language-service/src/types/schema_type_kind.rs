use crate::types::EnumValueDef;
use crate::types::FieldDef;
use crate::types::InputValueDef;
use indexmap::IndexMap;

/// The kind-specific half of a [`SchemaType`](crate::types::SchemaType).
///
/// Every map preserves the order members were declared in, which is the
/// order completion lists them in.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaTypeKind {
    Scalar,
    Object {
        fields: IndexMap<String, FieldDef>,
        interfaces: Vec<String>,
    },
    Interface {
        fields: IndexMap<String, FieldDef>,
        interfaces: Vec<String>,
    },
    Union {
        members: Vec<String>,
    },
    Enum {
        values: IndexMap<String, EnumValueDef>,
    },
    InputObject {
        fields: IndexMap<String, InputValueDef>,
    },
}
impl SchemaTypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Object { .. } => "type",
            Self::Interface { .. } => "interface",
            Self::Union { .. } => "union",
            Self::Enum { .. } => "enum",
            Self::InputObject { .. } => "input",
        }
    }
}
