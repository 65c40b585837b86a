//! Various test utils.

use crate::OnlineParser;
use crate::State;
use crate::Style;

/// Lexes `lines` in order, threading the state from each line into the next,
/// and returns every non-whitespace token as `(text, style)`.
pub fn styled_tokens(
    parser: &OnlineParser,
    lines: &[&str],
) -> Vec<(String, Style)> {
    let (tokens, _) = styled_tokens_with_state(parser, lines);
    tokens
}

/// Like [`styled_tokens`], also returning the state after the last line.
pub fn styled_tokens_with_state(
    parser: &OnlineParser,
    lines: &[&str],
) -> (Vec<(String, Style)>, State) {
    let mut state = parser.start_state();
    let mut out = vec![];
    for line in lines {
        let (tokens, next_state) = parser.lex_line(line, &state);
        out.extend(
            tokens
                .into_iter()
                .filter(|token| token.style != Style::Ws)
                .map(|token| (token.value.to_string(), token.style)),
        );
        state = next_state;
    }
    (out, state)
}

/// Builds an expected `(text, style)` list from string literals.
pub fn expected(pairs: &[(&str, Style)]) -> Vec<(String, Style)> {
    pairs
        .iter()
        .map(|(text, style)| (text.to_string(), *style))
        .collect()
}

/// The styles of every non-whitespace token of `source`.
pub fn styles_of(parser: &OnlineParser, source: &str) -> Vec<Style> {
    let lines: Vec<&str> = source.split('\n').collect();
    styled_tokens(parser, &lines)
        .into_iter()
        .map(|(_, style)| style)
        .collect()
}
