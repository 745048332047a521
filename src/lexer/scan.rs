//! Run scanners
//!
//! Each scanner reads code points while they belong to its class and returns
//! the whole run as one token. The first code point outside the class is
//! pushed back for the next `read_token` call. Scanners never change lexer
//! state.

use log::trace;

use crate::error::TokenError;
use crate::source::CharSource;
use crate::token::{Token, TokenKind};

use super::state::Lexer;

fn is_param_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_private_marker(c: char) -> bool {
    ('<'..='?').contains(&c)
}

impl<S: CharSource> Lexer<S> {
    /// Read a run of decimal digits as a `ParamDigits` token
    pub(super) fn scan_param_digits(&mut self) -> Result<Token, TokenError> {
        self.scan_run(TokenKind::ParamDigits, is_param_digit)
    }

    /// Read a run of private markers as a `PrivateParam` token
    pub(super) fn scan_private_param(&mut self) -> Result<Token, TokenError> {
        self.scan_run(TokenKind::PrivateParam, is_private_marker)
    }

    /// Accumulate code points accepted by `accept`
    ///
    /// A source failure ends the run; the text accumulated so far, possibly
    /// empty, is returned inside the error.
    fn scan_run(&mut self, kind: TokenKind, accept: fn(char) -> bool) -> Result<Token, TokenError> {
        let mut text = String::new();

        loop {
            let c = match self.source.next_char() {
                Ok(c) => c,
                Err(error) => {
                    trace!("{} run of {:?} cut short: {}", kind, text, error);
                    return Err(TokenError::new(Token::new(kind, text), error));
                }
            };

            if accept(c) {
                text.push(c);
            } else {
                self.source.unread();
                break;
            }
        }

        trace!("{} run {:?}", kind, text);
        Ok(Token::new(kind, text))
    }
}
