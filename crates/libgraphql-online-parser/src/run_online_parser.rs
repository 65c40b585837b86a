use crate::token::Style;
use crate::token::Token;
use crate::CharacterCursor;
use crate::OnlineParser;
use crate::Position;
use crate::State;
use std::ops::ControlFlow;

/// A token captured from a whole-document scan, together with the parser
/// state right after it.
///
/// `start` and `end` are character columns within the token's line.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextToken {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub string: String,
    pub state: State,
    pub style: Style,
}

impl ContextToken {
    fn capture(
        cursor: &CharacterCursor<'_>,
        state: &State,
        token: &Token<'_>,
        line: usize,
    ) -> Self {
        Self {
            line,
            start: cursor.column_of(token.start),
            end: cursor.column_of(token.end),
            string: token.value.to_string(),
            state: state.clone(),
            style: token.style,
        }
    }
}

/// Runs `parser` over every line of `text`, threading one state through the
/// whole document.
///
/// `callback` sees each token with the state right after it, and is called
/// once more at the end of every line (with an empty `Eof` token) so that
/// empty lines are observed too. Returning [`ControlFlow::Break`] stops the
/// scan; the token the callback stopped on is returned. Otherwise the last
/// token of the document is returned.
pub fn run_online_parser<F>(
    parser: &OnlineParser,
    text: &str,
    mut callback: F,
) -> ContextToken
where
    F: FnMut(&CharacterCursor<'_>, &State, &Token<'_>, usize) -> ControlFlow<()>,
{
    let mut state = parser.start_state();
    let mut last: Option<(usize, usize, usize, &str, Style)> = None;

    for (line_idx, line) in text.split('\n').enumerate() {
        let mut cursor = CharacterCursor::new(line);
        while !cursor.eol() {
            let token = parser.token(&mut cursor, &mut state);
            if callback(&cursor, &state, &token, line_idx).is_break() {
                return ContextToken::capture(&cursor, &state, &token, line_idx);
            }
            last = Some((
                line_idx,
                cursor.column_of(token.start),
                cursor.column_of(token.end),
                token.value,
                token.style,
            ));
        }

        let eol = Token::eol(&cursor);
        if callback(&cursor, &state, &eol, line_idx).is_break() {
            return ContextToken::capture(&cursor, &state, &eol, line_idx);
        }
    }

    let (line, start, end, value, style) =
        last.unwrap_or((0, 0, 0, "", Style::Ws));
    ContextToken {
        line,
        start,
        end,
        string: value.to_string(),
        state,
        style,
    }
}

/// Finds the token at `position` in a GraphQL document and the parser state
/// right after it.
///
/// With `offset` 0 the token must end strictly after the cursor; with
/// `offset` 1 a token ending exactly at the cursor (the word being typed)
/// qualifies, which is what completion wants.
pub fn get_token_at_position(
    text: &str,
    position: Position,
    offset: usize,
) -> ContextToken {
    run_online_parser(&OnlineParser::graphql(), text, |cursor, _, _, line_idx| {
        if line_idx == position.line
            && cursor.current_column() + offset > position.character
        {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
}
