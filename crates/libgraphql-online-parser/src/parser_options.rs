/// Editor-facing knobs for the online parser.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParserOptions {
    /// Columns per indentation level, used by [`State::indent`].
    ///
    /// [`State::indent`]: crate::State::indent
    pub indent_unit: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { indent_unit: 2 }
    }
}
