//! An incremental, line-oriented GraphQL tokenizer and parser.
//!
//! Unlike a batch parser, the [`OnlineParser`] consumes one line at a time and
//! threads an explicit [`State`] value from one line to the next. Every call
//! produces a best-effort token stream: malformed input is reported as
//! [`Style::InvalidChar`] tokens rather than errors, and the parser always
//! resynchronizes on the next token the grammar can accept.
//!
//! The rule stack carried in [`State`] describes where in the grammar the
//! parser currently is, which is what editors use for completion, hover and
//! auto-indentation.
//!
//! ```rust
//! use libgraphql_online_parser::OnlineParser;
//! use libgraphql_online_parser::Style;
//!
//! let parser = OnlineParser::graphql();
//! let (tokens, _state) = parser.lex_line("query name { }", &parser.start_state());
//! let styles: Vec<Style> = tokens
//!     .iter()
//!     .filter(|token| token.style != Style::Ws)
//!     .map(|token| token.style)
//!     .collect();
//! assert_eq!(styles, vec![
//!     Style::Keyword,
//!     Style::Def,
//!     Style::Punctuation,
//!     Style::Punctuation,
//! ]);
//! ```

mod character_cursor;
pub mod grammar;
pub mod lexer;
mod online_parser;
mod parser_options;
mod parser_state;
mod position;
mod rule_frame;
mod run_online_parser;
pub mod token;

pub use character_cursor::CharacterCursor;
pub use grammar::RuleKind;
pub use lexer::LexDialect;
pub use online_parser::OnlineParser;
pub use parser_options::ParserOptions;
pub use parser_state::State;
pub use position::Position;
pub use position::Range;
pub use rule_frame::RuleFrame;
pub use run_online_parser::ContextToken;
pub use run_online_parser::get_token_at_position;
pub use run_online_parser::run_online_parser;
pub use smallvec::SmallVec;
pub use token::Style;
pub use token::Token;
pub use token::TokenKind;

#[cfg(test)]
mod tests;
