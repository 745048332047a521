//! VT Lexer - ECMA-48 escape sequence tokenizer
//!
//! This crate splits a stream of Unicode code points into lexical tokens for
//! ANSI/VT100-style escape sequences. It does not interpret sequences; a
//! consumer builds commands out of the token stream.
//!
//! The lexer is:
//! - Lossless: the text of all tokens concatenated is the input
//! - Deterministic: same input always produces the same tokens
//! - Pull-based: one token per `read_token` call, one code point of pushback
//!
//! Recognized units:
//! - Plain text, one code point per token
//! - ESC and Fe bytes (`ESC` followed by 0x40-0x5F)
//! - CSI sequences: private marker runs, digit runs, `;` and `:` separators,
//!   intermediate bytes and the final byte
//!
//! Anything else is returned as an `Unknown` token rather than an error, so
//! malformed input never stops lexing.
//!
//! Reference: ECMA-48, 5th edition, section 5.4

pub mod error;
pub mod lexer;
pub mod source;
pub mod token;
mod utf8;

pub use error::{Error, Result, TokenError};
pub use lexer::{tokenize, Lexer, LexerState, Tokens};
pub use source::{CharSource, ReaderSource, StrSource};
pub use token::{Token, TokenKind};
