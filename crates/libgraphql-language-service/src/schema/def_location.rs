use crate::Position;
use std::path::Path;
use std::path::PathBuf;

/// Where a schema element was defined: the source it was loaded from and a
/// zero-based position within it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct DefLocation {
    pub file: PathBuf,
    pub position: Position,
}
impl DefLocation {
    pub(crate) fn from_pos(file: &Path, pos: graphql_parser::Pos) -> Self {
        Self {
            file: file.to_path_buf(),
            position: Position::new(
                pos.line.saturating_sub(1),
                pos.column.saturating_sub(1),
            ),
        }
    }
}
impl std::fmt::Display for DefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.position)
    }
}
