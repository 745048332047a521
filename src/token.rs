//! Tokens produced by the lexer
//!
//! A token is a classification plus the exact code points it was built from.
//! Concatenating the text of every token read from a drained source gives
//! back the source's input unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// No token could be read
    None,
    /// Code point that fits no class in the current state
    Unknown,
    /// Plain text outside an escape sequence
    Text,
    /// ESC (0x1B)
    Esc,
    /// Byte 0x40-0x5F following ESC
    Fe,
    /// Run of private marker bytes (0x3C-0x3F) right after `ESC [`
    PrivateParam,
    /// Run of decimal digits inside a CSI sequence
    ParamDigits,
    /// `:` sub-parameter separator
    ParamSubSep,
    /// `;` parameter separator
    ParamSep,
    /// Intermediate byte (0x20-0x2F)
    Intermediate,
    /// Final byte (0x40-0x7E), ends a CSI sequence
    Final,
}

impl TokenKind {
    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::None => "none",
            TokenKind::Unknown => "unknown",
            TokenKind::Text => "text",
            TokenKind::Esc => "esc",
            TokenKind::Fe => "fe",
            TokenKind::PrivateParam => "private_param",
            TokenKind::ParamDigits => "param_digits",
            TokenKind::ParamSubSep => "param_sub_sep",
            TokenKind::ParamSep => "param_sep",
            TokenKind::Intermediate => "intermediate",
            TokenKind::Final => "final",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Create a token
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The empty `None` token
    pub fn none() -> Self {
        Self::new(TokenKind::None, String::new())
    }

    pub(crate) fn from_char(kind: TokenKind, c: char) -> Self {
        Self {
            kind,
            text: c.to_string(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Code points consumed to produce this token
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the token carries no text
    ///
    /// Run tokens can be empty when the source fails before the first code
    /// point of the run is read back.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
