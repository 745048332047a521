//! Character sources
//!
//! The lexer pulls code points one at a time and occasionally pushes the last
//! one back so a run scanner can read it again. A source only has to remember
//! a single code point for that.

use std::io::{self, Read};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::utf8::{self, Utf8Result, REPLACEMENT_CHAR};

/// Default read buffer size for [`ReaderSource`]
pub const DEFAULT_BUFFER_SIZE: usize = 4096;
/// Smallest buffer able to hold any UTF-8 sequence
const MIN_BUFFER_SIZE: usize = 4;

/// Sequential code point supply with one-step pushback
pub trait CharSource {
    /// Read the next code point
    ///
    /// Fails with [`Error::EndOfStream`] when the input is exhausted.
    fn next_char(&mut self) -> Result<char>;

    /// Push back the code point most recently returned by `next_char`
    ///
    /// Only one code point can be pushed back. Calling this again before the
    /// next read has no effect.
    fn unread(&mut self);
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> Result<char> {
        (**self).next_char()
    }

    fn unread(&mut self) {
        (**self).unread()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn next_char(&mut self) -> Result<char> {
        (**self).next_char()
    }

    fn unread(&mut self) {
        (**self).unread()
    }
}

/// Source over an in-memory string
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    text: &'a str,
    pos: usize,
    /// Byte length of the last code point read, if it can be pushed back
    last_len: Option<usize>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            last_len: None,
        }
    }

    /// Text not yet consumed
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> Result<char> {
        match self.remaining().chars().next() {
            Some(c) => {
                let len = c.len_utf8();
                self.pos += len;
                self.last_len = Some(len);
                Ok(c)
            }
            None => {
                self.last_len = None;
                Err(Error::EndOfStream)
            }
        }
    }

    fn unread(&mut self) {
        match self.last_len.take() {
            Some(len) => self.pos -= len,
            None => warn!("unread with no code point to push back"),
        }
    }
}

/// Source over a byte reader, decoding UTF-8
///
/// Bytes are read in chunks into an internal buffer. Malformed UTF-8 never
/// fails the read: every byte that does not belong to a valid sequence comes
/// out as U+FFFD.
pub struct ReaderSource<R> {
    reader: R,
    buf: Box<[u8]>,
    /// Start of undecoded bytes in `buf`
    pos: usize,
    /// End of valid bytes in `buf`
    end: usize,
    /// The reader returned 0
    eof: bool,
    /// Last code point returned, available for pushback
    last: Option<char>,
    /// Pushed back code point, returned by the next read
    pending: Option<char>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_BUFFER_SIZE)
    }

    /// Create a source with a read buffer of `capacity` bytes
    ///
    /// Capacities below 4 bytes are raised to 4.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buf: vec![0; capacity.max(MIN_BUFFER_SIZE)].into_boxed_slice(),
            pos: 0,
            end: 0,
            eof: false,
            last: None,
            pending: None,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwrap the reader. Buffered bytes not yet decoded are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Refill the buffer, keeping undecoded bytes at the front
    fn fill(&mut self) -> Result<()> {
        if self.pos > 0 {
            self.buf.copy_within(self.pos..self.end, 0);
            self.end -= self.pos;
            self.pos = 0;
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    debug!("character source read failed: {}", e);
                    return Err(Error::Io(e));
                }
            }
        }
    }

    fn decode_next(&mut self) -> Result<char> {
        loop {
            match utf8::decode(&self.buf[self.pos..self.end], self.eof) {
                Utf8Result::Char(c, len) => {
                    self.pos += len;
                    return Ok(c);
                }
                Utf8Result::Invalid => {
                    self.pos += 1;
                    return Ok(REPLACEMENT_CHAR);
                }
                Utf8Result::Incomplete if self.eof => return Err(Error::EndOfStream),
                Utf8Result::Incomplete => self.fill()?,
            }
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Result<char> {
        let result = match self.pending.take() {
            Some(c) => Ok(c),
            None => self.decode_next(),
        };
        self.last = result.as_ref().ok().copied();
        result
    }

    fn unread(&mut self) {
        match self.last.take() {
            Some(c) => self.pending = Some(c),
            None => warn!("unread with no code point to push back"),
        }
    }
}

impl<R> std::fmt::Debug for ReaderSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderSource")
            .field("capacity", &self.buf.len())
            .field("buffered", &(self.end - self.pos))
            .field("eof", &self.eof)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
