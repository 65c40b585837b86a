use crate::RuleKind;

/// One entry of the parser's rule stack.
///
/// A frame names the production being matched and how far into it the parser
/// has progressed. `name` and `type_name` hold what matched terminals
/// recorded, e.g. the field name of a `Field` frame or the type condition of
/// an `InlineFragment` frame.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RuleFrame {
    pub kind: RuleKind,

    /// Index of the current step within a sequence production.
    pub step: usize,

    /// Whether a list step expects its separator before the next item.
    pub needs_separator: bool,

    pub name: Option<String>,
    pub type_name: Option<String>,
}

impl RuleFrame {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            step: 0,
            needs_separator: false,
            name: None,
            type_name: None,
        }
    }
}
