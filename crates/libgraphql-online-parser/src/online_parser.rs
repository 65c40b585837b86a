use crate::grammar::Capture;
use crate::grammar::Grammar;
use crate::grammar::Production;
use crate::grammar::Rule;
use crate::lexer;
use crate::token::Style;
use crate::token::Token;
use crate::token::TokenKind;
use crate::CharacterCursor;
use crate::ParserOptions;
use crate::RuleFrame;
use crate::RuleKind;
use crate::State;

/// Drives the lexer and a [`Grammar`] over one line at a time.
///
/// The parser itself holds no per-document data: every call takes the
/// [`State`] left by the previous call and returns (or updates) the next one.
/// One `OnlineParser` can therefore serve any number of documents, from any
/// number of threads.
///
/// Malformed input never produces an error. A token the grammar cannot place
/// is styled [`Style::InvalidChar`], the state from before that token is
/// restored, and parsing resumes with the next token.
#[derive(Clone, Copy, Debug)]
pub struct OnlineParser {
    grammar: &'static Grammar,
    options: ParserOptions,
}

impl OnlineParser {
    pub fn new(grammar: &'static Grammar) -> Self {
        Self {
            grammar,
            options: ParserOptions::default(),
        }
    }

    /// A parser for GraphQL executable documents and SDL.
    pub fn graphql() -> Self {
        Self::new(Grammar::graphql())
    }

    /// A parser for the JSON-like variables panel.
    pub fn variables() -> Self {
        Self::new(Grammar::variables())
    }

    /// A parser for the read-only JSON results panel.
    pub fn results() -> Self {
        Self::new(Grammar::results())
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn grammar(&self) -> &'static Grammar {
        self.grammar
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The state for an empty document: just the root frame.
    pub fn start_state(&self) -> State {
        let mut state = State::default();
        state.push_frame(self.grammar.root());
        state
    }

    /// Produces the next token and the state after it, leaving `state`
    /// untouched.
    pub fn step<'src>(
        &self,
        cursor: &mut CharacterCursor<'src>,
        state: &State,
    ) -> (Token<'src>, State) {
        let mut next = state.clone();
        let token = self.token(cursor, &mut next);
        (token, next)
    }

    /// Lexes a whole line starting from `state`, returning every token of the
    /// line (whitespace included) and the state to carry into the next line.
    pub fn lex_line<'src>(
        &self,
        line: &'src str,
        state: &State,
    ) -> (Vec<Token<'src>>, State) {
        let mut cursor = CharacterCursor::new(line);
        let mut state = state.clone();
        let mut tokens = vec![];
        while !cursor.eol() {
            tokens.push(self.token(&mut cursor, &mut state));
        }
        (tokens, state)
    }

    /// The indentation, in columns, of a line starting with `text_after`
    /// that follows a line which ended in `state`.
    pub fn indent(&self, state: &State, text_after: &str) -> usize {
        state.indent(text_after, self.options.indent_unit)
    }

    /// Produces the next token of the cursor's line, updating `state` in
    /// place.
    ///
    /// Each call consumes at least one character unless the line is already
    /// exhausted, in which case an empty `Eof` token is returned and `state`
    /// is left as-is.
    pub fn token<'src>(
        &self,
        cursor: &mut CharacterCursor<'src>,
        state: &mut State,
    ) -> Token<'src> {
        cursor.start_token();
        if cursor.eol() {
            return Token::eol(cursor);
        }

        if state.in_block_string {
            match lexer::find_block_string_end(cursor.remaining()) {
                Some(len) => {
                    cursor.skip_to(cursor.current_position() + len);
                    state.in_block_string = false;
                },
                None => cursor.skip_to_end(),
            }
            return Token::from_cursor(TokenKind::BlockString, cursor)
                .with_style(Style::String);
        }

        if self.top_is_empty_rule(state) {
            state.pop_frame();
        }
        if state.needs_advance {
            state.needs_advance = false;
            self.advance_rule(state, true);
        }
        if state.is_empty() {
            state.push_frame(self.grammar.root());
        }

        let dialect = self.grammar.dialect();
        if lexer::eat_ignored(cursor, dialect) {
            return Token::from_cursor(TokenKind::Whitespace, cursor);
        }

        let token = lexer::lex(cursor, dialect);
        match token.kind {
            TokenKind::Invalid => {
                state.push_frame(RuleKind::Invalid);
                return token.with_style(Style::InvalidChar);
            },
            TokenKind::Comment => {
                state.push_frame(RuleKind::Comment);
                return token.with_style(Style::Comment);
            },
            _ => (),
        }

        let backup = state.clone();
        while let Some(frame) = state.top() {
            let kind = frame.kind;
            let step = frame.step;
            let needs_separator = frame.needs_separator;

            let expected = match self.grammar.production(kind) {
                Some(Production::Resolve(resolver)) => {
                    if step == 0
                        && let Some(resolved) =
                            resolver.resolve(&token, cursor.remaining())
                    {
                        state.push_frame(resolved);
                        continue;
                    }
                    None
                },
                Some(Production::Sequence(steps)) => {
                    let rule = steps.get(step);
                    if needs_separator {
                        rule.and_then(Rule::separator)
                    } else {
                        rule
                    }
                },
                None => {
                    log::warn!(
                        "grammar `{}` has no production for `{kind}`",
                        self.grammar.name(),
                    );
                    None
                },
            };

            if let Some(rule) = expected.map(Rule::unwrapped) {
                if let Rule::Named(child) = rule {
                    state.push_frame(*child);
                    continue;
                }
                if rule.matches(&token)
                    && let Some(terminal) = rule.terminal()
                {
                    apply_capture(state, terminal.capture, &token);
                    if token.kind == TokenKind::Punctuation {
                        state.adjust_indent(token.value);
                        self.advance_rule(state, true);
                    } else {
                        state.needs_advance = true;
                    }
                    return token.with_style(terminal.style);
                }
            }

            self.unsuccessful(state);
        }

        log::trace!(
            "no rule accepts `{}` at column {}",
            token.value,
            token.start,
        );
        *state = backup;
        state.push_frame(RuleKind::Invalid);
        token.with_style(Style::InvalidChar)
    }

    fn top_is_empty_rule(&self, state: &State) -> bool {
        state.top()
            .and_then(|frame| self.grammar.production(frame.kind))
            .is_some_and(Production::is_empty)
    }

    /// The rule at the current step of `frame`, if `frame` is in a sequence.
    fn current_rule(&self, frame: &RuleFrame) -> Option<&'static Rule> {
        self.grammar
            .production(frame.kind)?
            .steps()?
            .get(frame.step)
    }

    fn current_list_rule(&self, state: &State) -> Option<&'static Rule> {
        state.top()
            .and_then(|frame| self.current_rule(frame))
            .filter(|rule| rule.is_list())
    }

    /// Moves the innermost frame past its current step, popping every frame
    /// that has run out of steps. A list step is given the chance to repeat
    /// instead: after a successful item it stays put, and a missing optional
    /// separator is forgiven once.
    fn advance_rule(&self, state: &mut State, successful: bool) {
        if let Some(list_rule) = self.current_list_rule(state) {
            if let Some(separator) = list_rule.separator()
                && let Some(frame) = state.top_mut()
            {
                frame.needs_separator = !frame.needs_separator;
                if !frame.needs_separator && separator.is_skippable() {
                    return;
                }
            }
            if successful {
                return;
            }
        }

        if let Some(frame) = state.top_mut() {
            frame.needs_separator = false;
            frame.step += 1;
        }

        while let Some(frame) = state.top() {
            if self.current_rule(frame).is_some() {
                break;
            }
            state.pop_frame();

            let list_separator = self.current_list_rule(state)
                .map(|rule| rule.separator().is_some());
            let Some(frame) = state.top_mut() else {
                break;
            };
            match list_separator {
                Some(true) => frame.needs_separator = !frame.needs_separator,
                Some(false) => (),
                None => {
                    frame.needs_separator = false;
                    frame.step += 1;
                },
            }
        }
    }

    /// Unwinds to the nearest frame whose current step may be skipped and
    /// advances it as a failed match.
    fn unsuccessful(&self, state: &mut State) {
        while let Some(frame) = state.top() {
            if self.current_rule(frame).is_some_and(Rule::is_skippable) {
                self.advance_rule(state, false);
                return;
            }
            state.pop_frame();
        }
    }
}

fn apply_capture(state: &mut State, capture: Capture, token: &Token<'_>) {
    match capture {
        Capture::None => (),
        Capture::Name => set_name(state, token.value),
        Capture::Type => {
            set_name(state, token.value);
            let len = state.stack.len();
            if len >= 3 {
                state.stack[len - 3].type_name = Some(token.value.to_string());
            }
        },
        Capture::Key => {
            let key = token.value.strip_prefix('"').unwrap_or(token.value);
            let key = key.strip_suffix('"').unwrap_or(key);
            set_name(state, key);
        },
        Capture::BlockString => {
            let body = token.value.get(3..).unwrap_or("");
            state.in_block_string = lexer::find_block_string_end(body).is_none();
        },
    }
}

fn set_name(state: &mut State, name: &str) {
    if let Some(frame) = state.top_mut() {
        frame.name = Some(name.to_string());
    }
}
