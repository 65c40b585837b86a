use crate::RuleFrame;
use crate::RuleKind;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Everything the online parser carries from one token (and one line) to the
/// next.
///
/// A `State` is a plain value: the parser never shares or mutates one behind
/// the caller's back. Editors persist the state returned at the end of each
/// line and hand it back when lexing the following line.
///
/// `indent_levels` always has exactly one entry per frame in the rule stack:
/// the bracket nesting depth in effect for that frame.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    pub(crate) stack: SmallVec<[RuleFrame; 8]>,
    pub(crate) indent_levels: SmallVec<[usize; 8]>,
    pub(crate) needs_advance: bool,
    pub(crate) in_block_string: bool,

    /// Variable names mapped to their declared type, when the caller has
    /// collected them for the document this state belongs to.
    pub variable_to_type: Option<IndexMap<String, String>>,
}

impl State {
    /// The rule stack, root first.
    pub fn stack(&self) -> &[RuleFrame] {
        &self.stack
    }

    pub fn indent_levels(&self) -> &[usize] {
        &self.indent_levels
    }

    /// The innermost frame.
    pub fn top(&self) -> Option<&RuleFrame> {
        self.stack.last()
    }

    /// The frame enclosing the innermost one.
    pub fn parent(&self) -> Option<&RuleFrame> {
        self.ancestor(1)
    }

    /// The frame `depth` levels above the innermost one (`0` is the innermost
    /// frame itself).
    pub fn ancestor(&self, depth: usize) -> Option<&RuleFrame> {
        self.stack.len()
            .checked_sub(depth + 1)
            .and_then(|idx| self.stack.get(idx))
    }

    pub fn kind(&self) -> Option<RuleKind> {
        self.top().map(|frame| frame.kind)
    }

    pub fn step(&self) -> usize {
        self.top().map_or(0, |frame| frame.step)
    }

    pub fn name(&self) -> Option<&str> {
        self.top().and_then(|frame| frame.name.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether the last token matched a terminal whose advance has been
    /// deferred until the next token, so the state still describes it.
    pub fn needs_advance(&self) -> bool {
        self.needs_advance
    }

    /// Whether the previous line ended inside an unterminated block string.
    pub fn in_block_string(&self) -> bool {
        self.in_block_string
    }

    /// Finds the innermost frame of `kind`.
    pub fn find(&self, kind: RuleKind) -> Option<&RuleFrame> {
        self.stack.iter().rev().find(|frame| frame.kind == kind)
    }

    /// A copy of this state without a trailing `Invalid` frame, describing
    /// the grammatical position the unplaceable token was found in.
    pub fn without_invalid(&self) -> State {
        let mut state = self.clone();
        if state.kind() == Some(RuleKind::Invalid) {
            state.pop_frame();
        }
        state
    }

    /// The bracket nesting depth at the innermost frame.
    pub fn level(&self) -> usize {
        self.indent_levels.last().copied().unwrap_or(0)
    }

    /// The indentation, in columns, for a line starting with `text_after`
    /// when this state is the state at the end of the previous line. Lines
    /// starting with a closing bracket are dedented one level.
    pub fn indent(&self, text_after: &str, indent_unit: usize) -> usize {
        let level = self.level();
        let closes = text_after
            .trim_start()
            .starts_with(['}', ']', ')']);
        let level = if closes { level.saturating_sub(1) } else { level };
        level * indent_unit
    }

    pub fn with_variable_types(
        mut self,
        variable_to_type: IndexMap<String, String>,
    ) -> Self {
        self.variable_to_type = Some(variable_to_type);
        self
    }

    pub(crate) fn push_frame(&mut self, kind: RuleKind) {
        let level = self.level();
        self.stack.push(RuleFrame::new(kind));
        self.indent_levels.push(level);
    }

    pub(crate) fn pop_frame(&mut self) -> Option<RuleFrame> {
        self.indent_levels.pop();
        self.stack.pop()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut RuleFrame> {
        self.stack.last_mut()
    }

    /// Tracks bracket nesting for a punctuator matched by the innermost
    /// frame.
    pub(crate) fn adjust_indent(&mut self, punctuator: &str) {
        let outer = self.indent_levels
            .len()
            .checked_sub(2)
            .and_then(|idx| self.indent_levels.get(idx))
            .copied()
            .unwrap_or(0);
        let new_level = match punctuator {
            "{" | "(" | "[" => outer + 1,
            "}" | ")" | "]" => outer,
            _ => return,
        };
        if let Some(level) = self.indent_levels.last_mut() {
            *level = new_level;
        }
    }
}
