//! Error types for lexing
//!
//! Source failures are the only errors. Bytes that fit no character class
//! are reported as `TokenKind::Unknown` tokens, never as errors.

use std::io;
use thiserror::Error;

use crate::token::Token;

/// Character source error type
#[derive(Error, Debug)]
pub enum Error {
    /// The source has no more code points. This is the normal way a token
    /// stream ends.
    #[error("end of stream")]
    EndOfStream,

    /// I/O error from the underlying reader
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Check if this is the end-of-stream signal rather than a failure
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Error::EndOfStream)
    }
}

/// Error returned by [`Lexer::read_token`](crate::Lexer::read_token)
///
/// Carries whatever token was accumulated before the source failed. When the
/// source fails before anything is consumed the token has kind
/// `TokenKind::None`. When it fails in the middle of a digit or private
/// marker run, the token holds the (possibly empty) truncated run.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct TokenError {
    token: Token,
    #[source]
    error: Error,
}

impl TokenError {
    pub(crate) fn new(token: Token, error: Error) -> Self {
        Self { token, error }
    }

    /// Token accumulated before the failure
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The source failure
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Check if the source simply ran out of input
    pub fn is_end_of_stream(&self) -> bool {
        self.error.is_end_of_stream()
    }

    /// Split into the partial token and the source failure
    pub fn into_parts(self) -> (Token, Error) {
        (self.token, self.error)
    }
}

impl From<Error> for TokenError {
    fn from(error: Error) -> Self {
        Self::new(Token::none(), error)
    }
}

/// Result type for character source operations
pub type Result<T> = std::result::Result<T, Error>;
