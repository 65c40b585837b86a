//! Token types produced by the lexer and styled by the online parser.

mod style;
mod token;
mod token_kind;

pub use style::Style;
pub use token::Token;
pub use token_kind::TokenKind;
