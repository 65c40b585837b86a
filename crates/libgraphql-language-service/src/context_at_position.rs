use crate::document_mode::get_document_mode;
use crate::type_info::get_type_info;
use crate::variable_collector::collect_variable_types;
use crate::DocumentMode;
use crate::Position;
use crate::Schema;
use crate::TypeInfo;
use libgraphql_online_parser::ContextToken;
use libgraphql_online_parser::State;
use libgraphql_online_parser::get_token_at_position;

/// Everything completion and hover need to know about a cursor position.
#[derive(Clone, Debug)]
pub struct ContextAtPosition<'s> {
    /// The token ending at (or containing) the cursor, with the parser state
    /// right after it.
    pub token: ContextToken,

    /// The grammatical position to complete in: the token's state, or the
    /// state the token could not be placed in when it was invalid.
    pub state: State,

    pub type_info: TypeInfo<'s>,
    pub mode: DocumentMode,
}

/// Finds the token at `position` and resolves it against `schema`. The
/// token's state carries the document's variable declarations.
///
/// `mode` overrides the classification of `text` when given.
pub fn get_context_at_position<'s>(
    schema: &'s Schema,
    text: &str,
    position: Position,
    mode: Option<DocumentMode>,
) -> ContextAtPosition<'s> {
    let mut token = get_token_at_position(text, position, 1);
    token.state = token.state.with_variable_types(collect_variable_types(text));
    let state = token.state.without_invalid();
    let type_info = get_type_info(schema, &token.state);
    let mode = mode.unwrap_or_else(|| get_document_mode(text, None));
    log::trace!(
        "context at {position}: `{}` in {:?} ({mode})",
        token.string,
        state.kind(),
    );
    ContextAtPosition {
        token,
        state,
        type_info,
        mode,
    }
}
