//! Cursor over the buffered, not-yet-consumed part of a byte stream.
//!
//! Unlike a cursor over a complete source file, a window may end in the
//! middle of a token. Reads past the end return `None`, and the caller
//! decides what that means with [`Window::is_final`]:
//!
//! - not final: more bytes may arrive, so "no byte" means "unknown yet"
//! - final: the stream is over, so "no byte" means "end of input"
//!
//! Recognizers that would otherwise have to guess report
//! [`Recognized::NeedMoreData`](crate::Recognized::NeedMoreData) instead.

use crate::classify::is_white;

/// Copyable cursor over a byte window.
///
/// The cursor is [`Copy`]: recognizers take it by value and advance their
/// own copy, so a failed attempt leaves the caller's position untouched.
#[derive(Clone, Copy, Debug)]
pub struct Window<'a> {
    data: &'a [u8],
    /// Current read position (byte index into `data`).
    pos: usize,
    /// No bytes will ever follow `data`.
    at_eof: bool,
}

impl<'a> Window<'a> {
    /// Create a cursor at position 0.
    ///
    /// `at_eof` states whether `data` is the whole remainder of the stream.
    pub fn new(data: &'a [u8], at_eof: bool) -> Self {
        Self {
            data,
            pos: 0,
            at_eof,
        }
    }

    /// Returns `true` if no bytes will ever be appended to this window.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.at_eof
    }

    /// Current byte offset into the window.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of bytes from the current position to the end of the window.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if the cursor has read every available byte.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns `true` if the cursor has run out of bytes but the stream has not.
    ///
    /// A span that ends here cannot be trusted: the next read may extend it.
    #[inline]
    pub fn is_starved(&self) -> bool {
        self.is_exhausted() && !self.at_eof
    }

    /// Byte at the current position.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos + 1).copied()
    }

    /// Byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> Option<u8> {
        self.data.get(self.pos + 2).copied()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Bytes from the current position to the end of the window.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    /// Bytes from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} exceeds {}", self.pos);
        &self.data[start..self.pos.min(self.data.len())]
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Returns the number of bytes consumed. Stops at the end of the window.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance past horizontal whitespace (space, tab, carriage return).
    #[inline]
    pub fn eat_whitespace(&mut self) -> usize {
        self.eat_while(is_white)
    }

    /// Offset of the next `byte` at or after `from` bytes past the current
    /// position, relative to the current position.
    ///
    /// Uses `memchr` for the search. `None` if the window holds no such byte.
    pub fn find_byte(&self, from: usize, byte: u8) -> Option<usize> {
        let rest = self.rest();
        let haystack = rest.get(from..)?;
        memchr::memchr(byte, haystack).map(|i| from + i)
    }

    /// Offset of the next occurrence of `needle` at or after `from` bytes
    /// past the current position, relative to the current position.
    pub fn find_seq(&self, from: usize, needle: &[u8]) -> Option<usize> {
        let rest = self.rest();
        let haystack = rest.get(from..)?;
        memchr::memmem::find(haystack, needle).map(|i| from + i)
    }
}
