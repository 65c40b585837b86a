use crate::Range;

/// A problem found by a [`DocumentValidator`](crate::validation::DocumentValidator).
///
/// `ranges` lists every node the problem implicates; each one becomes its own
/// diagnostic.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub ranges: Vec<Range>,
}
impl ValidationError {
    pub fn new(message: impl Into<String>, ranges: Vec<Range>) -> Self {
        Self {
            message: message.into(),
            ranges,
        }
    }

    pub fn at(message: impl Into<String>, range: Range) -> Self {
        Self::new(message, vec![range])
    }
}
