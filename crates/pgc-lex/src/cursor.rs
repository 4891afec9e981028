//! Character cursor over a byte stream.
//!
//! This module provides the [`Cursor`] struct which decodes UTF-8 code points
//! from any [`Read`] source one at a time. The cursor always holds one
//! decoded lookahead character (primed on construction) and tracks the byte
//! position, line and column of that character for error reporting.
//!
//! Bytes are pulled from the reader in chunks into a small internal buffer,
//! which lets [`Cursor::peek`] decode the character after the lookahead
//! without consuming it.

use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

use tracing::warn;

/// Size of a single read from the underlying stream.
const CHUNK_SIZE: usize = 4096;

/// Longest UTF-8 encoding of a single code point.
const MAX_UTF8_LEN: usize = 4;

/// Result of looking one character past the current lookahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Peek {
    /// A well-formed code point.
    Char(char),
    /// A malformed or truncated UTF-8 sequence.
    Invalid,
    /// Nothing follows the lookahead.
    Eof,
}

impl Peek {
    /// Returns true if the peeked character is an ASCII decimal digit.
    #[inline]
    pub fn is_decimal(self) -> bool {
        matches!(self, Peek::Char(c) if c.is_ascii_digit())
    }
}

/// A cursor for traversing a byte stream character by character.
///
/// `current` is `None` once the stream is exhausted, and stays `None`: every
/// later [`advance`](Cursor::advance) is a no-op.
///
/// # Example
///
/// ```
/// use pgc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("αb".as_bytes());
/// assert_eq!(cursor.current(), Some('α'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('b'));
/// assert_eq!(cursor.position(), 2);
/// cursor.advance();
/// assert_eq!(cursor.current(), None);
/// ```
pub struct Cursor<R> {
    /// The underlying byte stream.
    reader: R,

    /// Bytes read from `reader` that come after the lookahead.
    pending: VecDeque<u8>,

    /// Set once the reader is exhausted or has failed.
    drained: bool,

    /// The lookahead character, `None` at end of input.
    current: Option<char>,

    /// Number of source bytes taken up by `current`.
    current_len: usize,

    /// Set when `current` is a U+FFFD standing in for a malformed sequence.
    current_replaced: bool,

    /// Byte offset of `current`.
    position: usize,

    /// Line of `current` (1-based).
    line: u32,

    /// Column of `current` (1-based, in characters).
    column: u32,
}

impl<R: Read> Cursor<R> {
    /// Creates a cursor and primes the lookahead with the first character.
    pub fn new(reader: R) -> Self {
        let mut cursor = Self {
            reader,
            pending: VecDeque::with_capacity(CHUNK_SIZE),
            drained: false,
            current: None,
            current_len: 0,
            current_replaced: false,
            position: 0,
            line: 1,
            column: 1,
        };
        cursor.read_char();
        cursor
    }

    /// Returns the lookahead character, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns true if the lookahead replaced a malformed UTF-8 sequence.
    ///
    /// A U+FFFD spelled out in the source is well-formed and returns false.
    #[inline]
    pub fn is_replacement(&self) -> bool {
        self.current_replaced
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Consumes the lookahead and decodes the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    pub fn advance(&mut self) {
        let Some(c) = self.current else {
            return;
        };

        self.position += self.current_len;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.read_char();
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use pgc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(":=".as_bytes());
    /// assert!(!cursor.match_char('='));
    /// assert!(cursor.match_char(':'));
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the character after the lookahead without consuming anything.
    ///
    /// More bytes may be pulled from the reader into the internal buffer,
    /// but the lookahead, position, line and column are left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use pgc_lex::cursor::{Cursor, Peek};
    ///
    /// let mut cursor = Cursor::new(".5".as_bytes());
    /// assert_eq!(cursor.peek(), Peek::Char('5'));
    /// assert_eq!(cursor.current(), Some('.'));
    /// ```
    pub fn peek(&mut self) -> Peek {
        if self.current.is_none() {
            return Peek::Eof;
        }
        self.fill(MAX_UTF8_LEN);
        if self.pending.is_empty() {
            return Peek::Eof;
        }
        match decode(self.pending.make_contiguous()) {
            Some((c, _)) => Peek::Char(c),
            None => Peek::Invalid,
        }
    }

    /// Skips spaces, tabs, newlines and carriage returns.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(c) if crate::unicode::is_whitespace(c)) {
            self.advance();
        }
    }

    /// Returns the byte offset of the lookahead character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the line of the lookahead character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the lookahead character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Decodes the next character from the buffered bytes into `current`.
    ///
    /// A malformed or truncated sequence becomes U+FFFD and consumes a
    /// single byte, so decoding always makes progress.
    fn read_char(&mut self) {
        self.fill(MAX_UTF8_LEN);
        if self.pending.is_empty() {
            self.current = None;
            self.current_len = 0;
            self.current_replaced = false;
            return;
        }

        let decoded = decode(self.pending.make_contiguous());
        let (c, len) = decoded.unwrap_or((char::REPLACEMENT_CHARACTER, 1));
        self.pending.drain(..len);
        self.current = Some(c);
        self.current_len = len;
        self.current_replaced = decoded.is_none();
    }

    /// Reads from the stream until at least `wanted` bytes are buffered or
    /// the stream is exhausted.
    fn fill(&mut self, wanted: usize) {
        while self.pending.len() < wanted && !self.drained {
            let mut chunk = [0u8; CHUNK_SIZE];
            match self.reader.read(&mut chunk) {
                Ok(0) => self.drained = true,
                Ok(n) => self.pending.extend(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, offset = self.position, "read failed, treating as end of input");
                    self.drained = true;
                }
            }
        }
    }
}

/// Number of bytes in the UTF-8 sequence introduced by `lead`, or `None` if
/// `lead` cannot start a sequence.
#[inline]
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decodes the first code point of `bytes`, returning it with its encoded
/// length. Returns `None` for a malformed or truncated sequence.
fn decode(bytes: &[u8]) -> Option<(char, usize)> {
    let &lead = bytes.first()?;

    // Fast path for ASCII (most common)
    if lead < 0x80 {
        return Some((lead as char, 1));
    }

    let len = sequence_len(lead)?;
    let encoded = bytes.get(..len)?;
    let c = std::str::from_utf8(encoded).ok()?.chars().next()?;
    Some((c, len))
}
