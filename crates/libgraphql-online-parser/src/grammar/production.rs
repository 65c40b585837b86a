use crate::grammar::Resolver;
use crate::grammar::Rule;

/// The right-hand side of a named rule.
#[derive(Clone, Debug, PartialEq)]
pub enum Production {
    /// An ordered sequence of steps. An empty sequence is a zero-length
    /// placeholder frame that is popped before the next token.
    Sequence(Vec<Rule>),

    /// A context-sensitive production resolved from the next token.
    Resolve(Resolver),
}

impl Production {
    pub fn steps(&self) -> Option<&[Rule]> {
        match self {
            Self::Sequence(steps) => Some(steps),
            Self::Resolve(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Sequence(steps) if steps.is_empty())
    }
}
