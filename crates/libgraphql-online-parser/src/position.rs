/// A zero-based `(line, character)` position in a document.
///
/// `character` counts characters, not bytes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Serialize,
)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    pub fn less_than_or_equal_to(&self, other: &Position) -> bool {
        self <= other
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// A half-open `[start, end)` span between two [`Position`]s.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A range covering `start..end` characters of a single line.
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Self {
            start: Position::new(line, start),
            end: Position::new(line, end),
        }
    }

    /// Whether `position` lies within the range. The end position is
    /// included so a cursor just after a token still counts as inside it.
    pub fn contains_position(&self, position: &Position) -> bool {
        self.start.less_than_or_equal_to(position)
            && position.less_than_or_equal_to(&self.end)
    }
}
