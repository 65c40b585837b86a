use crate::ast;

/// A (possibly wrapped) reference to a named type, as written in a field,
/// argument or variable declaration.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn from_ast(ast_type: &ast::query::Type) -> Self {
        use ast::query::Type;
        match ast_type {
            Type::NamedType(name) => Self::Named(name.to_string()),
            Type::ListType(inner) => Self::list(Self::from_ast(inner)),
            Type::NonNullType(inner) => Self::non_null(Self::from_ast(inner)),
        }
    }

    /// The name of the innermost named type.
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }

    /// This type with a non-null wrapper (if any) removed.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            Self::NonNull(inner) => inner,
            _ => self,
        }
    }

    /// The item type if this is a (possibly non-null) list.
    pub fn list_item(&self) -> Option<&TypeRef> {
        match self.nullable() {
            Self::List(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        self.list_item().is_some()
    }

    /// Whether a value of type `self` may be used where `expected` is
    /// required (e.g. `Int!` may be passed to an `Int` argument).
    pub fn is_compatible_with(&self, expected: &TypeRef) -> bool {
        match (self, expected) {
            (Self::NonNull(inner), Self::NonNull(expected_inner)) =>
                inner.is_compatible_with(expected_inner),
            (Self::NonNull(inner), _) => inner.is_compatible_with(expected),
            (_, Self::NonNull(_)) => false,
            (Self::List(inner), Self::List(expected_inner)) =>
                inner.is_compatible_with(expected_inner),
            (Self::Named(name), Self::Named(expected_name)) =>
                name == expected_name,
            _ => false,
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
