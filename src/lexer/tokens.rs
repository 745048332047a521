//! Token iterator

use std::iter::FusedIterator;

use crate::error::Error;
use crate::source::CharSource;
use crate::token::Token;

use super::state::Lexer;

/// Iterator over the tokens of a lexer
///
/// Yields tokens until the source reports end of stream. A partial run token
/// cut short by a source failure is yielded before the failure itself. End of
/// stream ends iteration; any other failure is yielded once as `Err` and then
/// iteration stops.
#[derive(Debug)]
pub struct Tokens<'a, S> {
    lexer: &'a mut Lexer<S>,
    /// Failure to report after a partial token
    deferred: Option<Error>,
    done: bool,
}

impl<'a, S: CharSource> Tokens<'a, S> {
    pub(super) fn new(lexer: &'a mut Lexer<S>) -> Self {
        Self {
            lexer,
            deferred: None,
            done: false,
        }
    }

    fn finish(&mut self, error: Error) -> Option<Result<Token, Error>> {
        self.done = true;
        if error.is_end_of_stream() {
            None
        } else {
            Some(Err(error))
        }
    }
}

impl<S: CharSource> Iterator for Tokens<'_, S> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(error) = self.deferred.take() {
            return self.finish(error);
        }

        match self.lexer.read_token() {
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                let (token, error) = err.into_parts();
                if token.is_empty() {
                    self.finish(error)
                } else {
                    self.deferred = Some(error);
                    Some(Ok(token))
                }
            }
        }
    }
}

impl<S: CharSource> FusedIterator for Tokens<'_, S> {}
