//! Escape sequence lexer
//!
//! A stateful lexer that splits a code point stream into tokens.
//! Character classes follow ECMA-48 section 5.4 (control sequences).

mod scan;
mod state;
mod tokens;

pub use state::{Lexer, LexerState};
pub use tokens::Tokens;

use crate::token::Token;

/// Lex an in-memory string into tokens
///
/// A digit or private marker run at the very end of `text` is still returned.
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::from_text(text).tokens().map_while(Result::ok).collect()
}
