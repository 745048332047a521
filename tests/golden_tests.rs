//! Golden tests for the lexer
//!
//! Each test lexes a known input and compares the token stream against an
//! expected JSON snapshot. Snapshots are built with `serde_json::json!` so a
//! failing test prints both streams in a readable form.

use std::io::{self, Read};

use serde_json::{json, Value};
use vt_lexer::{tokenize, Lexer, ReaderSource, Token, TokenKind};

/// Helper to lex input into a JSON snapshot
fn snapshot(input: &str) -> Value {
    serde_json::to_value(tokenize(input)).expect("tokens serialize")
}

/// Reader handing out input in fixed-size chunks (tests streaming)
struct Chunked<'a> {
    data: &'a [u8],
    chunk_size: usize,
}

impl Read for Chunked<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk_size.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn lex_chunked(input: &[u8], chunk_size: usize) -> Vec<Token> {
    let source = ReaderSource::with_capacity(
        Chunked {
            data: input,
            chunk_size,
        },
        8,
    );
    let mut lexer = Lexer::new(source);
    lexer
        .tokens()
        .collect::<Result<_, _>>()
        .expect("in-memory reader does not fail")
}

// ============================================================================
// Basic sequences
// ============================================================================

#[test]
fn test_plain_text() {
    assert_eq!(
        snapshot("ab"),
        json!([
            { "kind": "text", "text": "a" },
            { "kind": "text", "text": "b" },
        ])
    );
}

#[test]
fn test_sgr_reset() {
    assert_eq!(
        snapshot("\x1b[0m"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "fe", "text": "[" },
            { "kind": "param_digits", "text": "0" },
            { "kind": "final", "text": "m" },
        ])
    );
}

#[test]
fn test_truecolor_with_subparams() {
    assert_eq!(
        snapshot("\x1b[38:2::255:128:0m"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "fe", "text": "[" },
            { "kind": "param_digits", "text": "38" },
            { "kind": "param_sub_sep", "text": ":" },
            { "kind": "param_digits", "text": "2" },
            { "kind": "param_sub_sep", "text": ":" },
            { "kind": "param_sub_sep", "text": ":" },
            { "kind": "param_digits", "text": "255" },
            { "kind": "param_sub_sep", "text": ":" },
            { "kind": "param_digits", "text": "128" },
            { "kind": "param_sub_sep", "text": ":" },
            { "kind": "param_digits", "text": "0" },
            { "kind": "final", "text": "m" },
        ])
    );
}

#[test]
fn test_decscusr_with_intermediate() {
    // Set cursor style: CSI 2 SP q
    assert_eq!(
        snapshot("\x1b[2 q"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "fe", "text": "[" },
            { "kind": "param_digits", "text": "2" },
            { "kind": "intermediate", "text": " " },
            { "kind": "final", "text": "q" },
        ])
    );
}

#[test]
fn test_xterm_version_query() {
    // XTVERSION: CSI > 0 q
    assert_eq!(
        snapshot("\x1b[>0q"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "fe", "text": "[" },
            { "kind": "private_param", "text": ">" },
            { "kind": "param_digits", "text": "0" },
            { "kind": "final", "text": "q" },
        ])
    );
}

#[test]
fn test_sgr_mouse_report() {
    assert_eq!(
        snapshot("\x1b[<0;12;7M"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "fe", "text": "[" },
            { "kind": "private_param", "text": "<" },
            { "kind": "param_digits", "text": "0" },
            { "kind": "param_sep", "text": ";" },
            { "kind": "param_digits", "text": "12" },
            { "kind": "param_sep", "text": ";" },
            { "kind": "param_digits", "text": "7" },
            { "kind": "final", "text": "M" },
        ])
    );
}

#[test]
fn test_osc_introducer_is_fe() {
    // OSC bodies are not lexed specially: ']' is an Fe byte, the rest is text
    assert_eq!(
        snapshot("\x1b]0;t\x07"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "fe", "text": "]" },
            { "kind": "text", "text": "0" },
            { "kind": "text", "text": ";" },
            { "kind": "text", "text": "t" },
            { "kind": "text", "text": "\u{7}" },
        ])
    );
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_marker_in_later_position() {
    assert_eq!(
        snapshot("\x1b[1<m"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "fe", "text": "[" },
            { "kind": "param_digits", "text": "1" },
            { "kind": "unknown", "text": "<" },
            { "kind": "final", "text": "m" },
        ])
    );
}

#[test]
fn test_escape_then_escape() {
    // ESC is not an Fe byte, so the second ESC is unknown and resets
    assert_eq!(
        snapshot("\x1b\x1b[m"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "unknown", "text": "\u{1b}" },
            { "kind": "text", "text": "[" },
            { "kind": "text", "text": "m" },
        ])
    );
}

#[test]
fn test_unknown_in_intermediate_resets() {
    assert_eq!(
        snapshot("\x1b[!\x01x"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "fe", "text": "[" },
            { "kind": "intermediate", "text": "!" },
            { "kind": "unknown", "text": "\u{1}" },
            { "kind": "text", "text": "x" },
        ])
    );
}

#[test]
fn test_delete_in_csi_is_unknown() {
    assert_eq!(
        snapshot("\x1b[\x7f"),
        json!([
            { "kind": "esc", "text": "\u{1b}" },
            { "kind": "fe", "text": "[" },
            { "kind": "unknown", "text": "\u{7f}" },
        ])
    );
}

// ============================================================================
// Streaming
// ============================================================================

#[test]
fn test_chunk_boundary_lexing() {
    let input = "pre\x1b[?1049h中\x1b[38;5;196mred\x1b[0m😀".as_bytes();
    let whole = lex_chunked(input, input.len());

    for chunk_size in 1..=7 {
        assert_eq!(lex_chunked(input, chunk_size), whole, "chunk size {}", chunk_size);
    }
}

#[test]
fn test_reader_matches_text() {
    let input = "\x1b[1;31mError:\x1b[0m file not found\r\n";
    assert_eq!(lex_chunked(input.as_bytes(), 3), tokenize(input));
}

#[test]
fn test_truncated_stream_keeps_digits() {
    let mut lexer = Lexer::from_text("\x1b[1");
    lexer.read_token().unwrap();
    lexer.read_token().unwrap();

    let err = lexer.read_token().unwrap_err();
    assert!(err.is_end_of_stream());
    assert_eq!(err.token(), &Token::new(TokenKind::ParamDigits, "1"));
}

#[test]
fn test_snapshot_round_trip() {
    let tokens = tokenize("\x1b[?25l");
    let json = serde_json::to_string(&tokens).unwrap();
    let back: Vec<Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tokens);
}
