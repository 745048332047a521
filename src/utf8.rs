//! UTF-8 decoding for byte-backed character sources
//!
//! Decodes one code point at a time from the front of a byte slice. Malformed
//! input never fails: each byte that cannot start a valid sequence decodes to
//! U+FFFD on its own, so every bad byte in the input shows up as exactly one
//! replacement character.

/// Replacement character for invalid sequences
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Result of decoding from the front of a byte slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Result {
    /// Decoded a character spanning this many bytes
    Char(char, usize),
    /// The first byte does not start a valid sequence; skip one byte
    Invalid,
    /// Need more bytes to decide
    Incomplete,
}

/// Expected sequence length for a lead byte, or `None` if it cannot lead
fn sequence_len(lead: u8) -> Option<usize> {
    if lead < 0x80 {
        Some(1)
    } else if lead & 0b1110_0000 == 0b1100_0000 {
        Some(2)
    } else if lead & 0b1111_0000 == 0b1110_0000 {
        Some(3)
    } else if lead & 0b1111_1000 == 0b1111_0000 {
        Some(4)
    } else {
        None
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Decode the first code point of `bytes`
///
/// `complete` tells the decoder no more bytes will follow, so a truncated
/// sequence is reported as `Invalid` instead of `Incomplete`. An empty slice is
/// always `Incomplete`.
pub fn decode(bytes: &[u8], complete: bool) -> Utf8Result {
    let Some(&lead) = bytes.first() else {
        return Utf8Result::Incomplete;
    };

    // ASCII fast path
    if lead < 0x80 {
        return Utf8Result::Char(lead as char, 1);
    }

    let Some(expected) = sequence_len(lead) else {
        return Utf8Result::Invalid;
    };

    // Reject as soon as a bad continuation byte is visible, even if the
    // sequence is not fully buffered yet
    let available = bytes.len().min(expected);
    if !bytes[1..available].iter().all(|&b| is_continuation(b)) {
        return Utf8Result::Invalid;
    }
    if available < expected {
        return if complete {
            Utf8Result::Invalid
        } else {
            Utf8Result::Incomplete
        };
    }

    let cp = match expected {
        2 => {
            let cp = ((bytes[0] & 0x1F) as u32) << 6 | (bytes[1] & 0x3F) as u32;
            // Overlong
            if cp < 0x80 {
                return Utf8Result::Invalid;
            }
            cp
        }
        3 => {
            let cp = ((bytes[0] & 0x0F) as u32) << 12
                | ((bytes[1] & 0x3F) as u32) << 6
                | (bytes[2] & 0x3F) as u32;
            // Overlong or surrogate
            if cp < 0x800 || (0xD800..=0xDFFF).contains(&cp) {
                return Utf8Result::Invalid;
            }
            cp
        }
        _ => {
            let cp = ((bytes[0] & 0x07) as u32) << 18
                | ((bytes[1] & 0x3F) as u32) << 12
                | ((bytes[2] & 0x3F) as u32) << 6
                | (bytes[3] & 0x3F) as u32;
            // Overlong or beyond Unicode range
            if !(0x10000..=0x10FFFF).contains(&cp) {
                return Utf8Result::Invalid;
            }
            cp
        }
    };

    match char::from_u32(cp) {
        Some(c) => Utf8Result::Char(c, expected),
        None => Utf8Result::Invalid,
    }
}
