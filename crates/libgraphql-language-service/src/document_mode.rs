use crate::ast;
use crate::top_level_definitions::DefinitionKind;
use crate::top_level_definitions::top_level_definitions;

/// Whether a document holds operations, type system definitions, both, or
/// cannot be told apart yet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum DocumentMode {
    TypeSystem,
    Executable,

    /// Operations and type system definitions side by side. Neither batch
    /// parser accepts these as a whole.
    Mixed,

    Unknown,
}
impl DocumentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypeSystem => "type-system",
            Self::Executable => "executable",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}
impl std::fmt::Display for DocumentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `text`. A `uri` ending in `.graphqls` is always SDL; otherwise
/// the document is classified by which batch parser accepts it. A document
/// neither accepts is [`DocumentMode::Mixed`] when its top-level definitions
/// include both kinds, and [`DocumentMode::Unknown`] otherwise.
pub fn get_document_mode(text: &str, uri: Option<&str>) -> DocumentMode {
    if uri.is_some_and(|uri| uri.ends_with(".graphqls")) {
        return DocumentMode::TypeSystem;
    }
    if ast::query::parse(text).is_ok() {
        DocumentMode::Executable
    } else if ast::schema::parse(text).is_ok() {
        DocumentMode::TypeSystem
    } else if is_mixed(text) {
        DocumentMode::Mixed
    } else {
        DocumentMode::Unknown
    }
}

fn is_mixed(text: &str) -> bool {
    let definitions = top_level_definitions(text);
    let has = |kind: DefinitionKind| definitions.iter().any(|definition| definition.kind == kind);
    has(DefinitionKind::Executable) && has(DefinitionKind::TypeSystem)
}
