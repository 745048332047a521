//! Lexer State Machine
//!
//! Classifies one code point per call according to a four-state automaton:
//!
//! - Default: plain text, waiting for ESC
//! - AfterEscape: after ESC, waiting for an Fe byte
//! - CsiParams: after `ESC [`, scanning parameter bytes
//! - CsiIntermediate: after an intermediate byte, waiting for more or a final byte
//!
//! The previous state is tracked alongside the current one. It is the only
//! way to tell the first byte after `ESC [` apart from later parameter bytes,
//! which matters for private markers (`<`, `=`, `>`, `?`): they start a
//! `PrivateParam` run in first position and are `Unknown` anywhere else.

use log::trace;

use crate::error::TokenError;
use crate::source::{CharSource, ReaderSource, StrSource};
use crate::token::{Token, TokenKind};

use super::tokens::Tokens;

/// ESC
const ESC: char = '\x1b';

/// Lexer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexerState {
    /// Plain text
    #[default]
    Default,
    /// After ESC
    AfterEscape,
    /// After ESC [, collecting parameter bytes
    CsiParams,
    /// Collecting CSI intermediate bytes
    CsiIntermediate,
}

/// Escape sequence lexer over a character source
#[derive(Debug)]
pub struct Lexer<S> {
    pub(super) source: S,
    state: LexerState,
    /// State held before the most recent transition
    previous: LexerState,
}

impl<S: CharSource> Lexer<S> {
    /// Create a lexer in the default state
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: LexerState::Default,
            previous: LexerState::Default,
        }
    }

    /// Get current lexer state
    pub fn state(&self) -> LexerState {
        self.state
    }

    /// Get the state held before the most recent transition
    pub fn previous_state(&self) -> LexerState {
        self.previous
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Iterate over tokens until the source ends
    pub fn tokens(&mut self) -> Tokens<'_, S> {
        Tokens::new(self)
    }

    fn set_state(&mut self, state: LexerState) {
        trace!("lexer state {:?} -> {:?}", self.state, state);
        self.previous = self.state;
        self.state = state;
    }

    /// Read a single token
    ///
    /// Returns exactly one token per call. Code points that fit no class in
    /// the current state come back as `TokenKind::Unknown` and reset the lexer
    /// to the default state; they are not errors.
    ///
    /// A source failure before anything is read yields a `TokenError` holding
    /// a `TokenKind::None` token. A failure in the middle of a digit or
    /// private marker run yields the truncated run token with the error, so
    /// check `TokenError::token` before discarding it.
    pub fn read_token(&mut self) -> Result<Token, TokenError> {
        let c = self.source.next_char()?;

        match self.state {
            LexerState::Default => {
                if c == ESC {
                    self.set_state(LexerState::AfterEscape);
                    return Ok(Token::from_char(TokenKind::Esc, c));
                }
                return Ok(Token::from_char(TokenKind::Text, c));
            }
            LexerState::AfterEscape => {
                if ('\x40'..='\x5f').contains(&c) {
                    if c == '[' {
                        self.set_state(LexerState::CsiParams);
                    } else {
                        self.set_state(LexerState::Default);
                    }
                    return Ok(Token::from_char(TokenKind::Fe, c));
                }
            }
            LexerState::CsiParams => match c {
                '\x40'..='\x7e' => {
                    self.set_state(LexerState::Default);
                    return Ok(Token::from_char(TokenKind::Final, c));
                }
                '<'..='?' if self.previous == LexerState::AfterEscape => {
                    self.source.unread();
                    return self.scan_private_param();
                }
                '0'..='?' => {
                    self.set_state(LexerState::CsiParams);

                    return match c {
                        // Private marker outside first position
                        '<'..='?' => Ok(Token::from_char(TokenKind::Unknown, c)),
                        ':' => Ok(Token::from_char(TokenKind::ParamSubSep, c)),
                        ';' => Ok(Token::from_char(TokenKind::ParamSep, c)),
                        _ => {
                            self.source.unread();
                            self.scan_param_digits()
                        }
                    };
                }
                ' '..='/' => {
                    self.set_state(LexerState::CsiIntermediate);
                    return Ok(Token::from_char(TokenKind::Intermediate, c));
                }
                _ => {}
            },
            LexerState::CsiIntermediate => match c {
                '\x40'..='\x7e' => {
                    self.set_state(LexerState::Default);
                    return Ok(Token::from_char(TokenKind::Final, c));
                }
                ' '..='/' => {
                    self.set_state(LexerState::CsiIntermediate);
                    return Ok(Token::from_char(TokenKind::Intermediate, c));
                }
                _ => {}
            },
        }

        self.set_state(LexerState::Default);
        Ok(Token::from_char(TokenKind::Unknown, c))
    }
}

impl<'a> Lexer<StrSource<'a>> {
    /// Create a lexer over an in-memory string
    pub fn from_text(text: &'a str) -> Self {
        Self::new(StrSource::new(text))
    }
}

impl<R: std::io::Read> Lexer<ReaderSource<R>> {
    /// Create a lexer over a UTF-8 byte reader
    pub fn from_reader(reader: R) -> Self {
        Self::new(ReaderSource::new(reader))
    }
}
