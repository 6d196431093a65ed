//! Reader-driven scanner over a growable buffer window.
//!
//! # Buffer Layout
//!
//! ```text
//! buf: [consumed..., window..., free...]
//!       0           start      end       buf.len()
//! ```
//!
//! `buf[start..end]` is the window handed to [`split`]. A token drops its
//! consumed bytes by moving `start`; a need-more-data answer drops leading
//! whitespace the same way, then appends bytes at `end`. Before reading, consumed bytes are compacted away when the
//! free tail is exhausted or the dead prefix exceeds half the buffer, and
//! the buffer doubles (up to the configured maximum) when the window itself
//! fills it.

use std::io::{ErrorKind, Read};
use std::iter::FusedIterator;

use minic_lexer_core::classify::is_white;
use minic_lexer_core::{split, Step};
use tracing::{debug, trace};

use crate::config::ScannerConfig;
use crate::lex_error::LexError;
use crate::token::Token;

/// Lazy, forward-only token stream over a reader.
///
/// Yields tokens until the input is exhausted; end of stream is signalled by
/// `Ok(None)` (or `None` from the iterator), never by a token. After the
/// end or an error the scanner is finished and keeps returning `Ok(None)`.
pub struct Scanner<R> {
    reader: R,
    buf: Vec<u8>,
    /// Start of the unconsumed window in `buf`.
    start: usize,
    /// End of valid data in `buf`.
    end: usize,
    /// The reader reported end of stream.
    at_eof: bool,
    /// Absolute stream offset of `buf[start]`.
    offset: u64,
    max_token_size: usize,
    finished: bool,
}

impl<R: Read> Scanner<R> {
    /// Create a scanner with the default [`ScannerConfig`].
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScannerConfig::default())
    }

    pub fn with_config(reader: R, config: ScannerConfig) -> Self {
        let config = config.normalized();
        Self {
            reader,
            buf: vec![0; config.initial_capacity],
            start: 0,
            end: 0,
            at_eof: false,
            offset: 0,
            max_token_size: config.max_token_size,
            finished: false,
        }
    }

    /// Stream offset of the first unconsumed byte.
    ///
    /// Once the scanner has reached end of stream this equals the total
    /// number of bytes read, trailing whitespace included.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns `true` once the scanner has hit end of stream or an error.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` at end of stream. Errors are terminal.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.is_finished() {
            return Ok(None);
        }
        let result = self.scan();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "usize fits in u64 on all supported targets"
    )]
    fn scan(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            let window = &self.buf[self.start..self.end];
            match split(window, self.at_eof) {
                Step::Token(lexeme) => {
                    let offset = self.offset + lexeme.skipped as u64;
                    let token = Token::new(lexeme.kind, window[lexeme.span()].to_vec(), offset);
                    trace!(kind = ?lexeme.kind, offset, len = lexeme.len, "token");
                    self.consume(lexeme.consumed());
                    return Ok(Some(token));
                }
                Step::NeedMoreData => {
                    self.discard_whitespace();
                    self.fill()?;
                }
                Step::EndOfStream => {
                    // Trailing whitespace is consumed with the end of the stream.
                    self.consume(self.end - self.start);
                    debug!(bytes = self.offset, "end of stream");
                    return Ok(None);
                }
                Step::UnterminatedComment { skipped } => {
                    return Err(LexError::UnterminatedComment {
                        offset: self.offset + skipped as u64,
                    });
                }
            }
        }
    }

    /// Drop `n` bytes from the front of the window.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "usize fits in u64 on all supported targets"
    )]
    fn consume(&mut self, n: usize) {
        debug_assert!(self.start + n <= self.end, "consumed past the window");
        self.start += n;
        self.offset += n as u64;
        if self.start == self.end {
            self.start = 0;
            self.end = 0;
        }
    }

    /// Drop whitespace at the front of the window.
    ///
    /// Whitespace never belongs to a token, so a long blank run must not
    /// count toward `max_token_size`.
    fn discard_whitespace(&mut self) {
        let blank = self.buf[self.start..self.end]
            .iter()
            .take_while(|&&b| is_white(b))
            .count();
        if blank > 0 {
            self.consume(blank);
        }
    }

    /// Make room and read at least once more from the reader.
    ///
    /// Only called after [`Step::NeedMoreData`], which is never returned once
    /// the reader has reported end of stream.
    fn fill(&mut self) -> Result<(), LexError> {
        debug_assert!(!self.at_eof, "split asked for more data after EOF");

        if self.start > 0 && (self.end == self.buf.len() || self.start > self.buf.len() / 2) {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
            debug!(window = self.end, "compacted scan buffer");
        }

        if self.end == self.buf.len() {
            if self.buf.len() >= self.max_token_size {
                return Err(LexError::TokenTooLong {
                    offset: self.offset,
                    max: self.max_token_size,
                });
            }
            let grown = self.buf.len().saturating_mul(2).min(self.max_token_size);
            self.buf.resize(grown, 0);
            debug!(capacity = grown, "grew scan buffer");
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.at_eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(LexError::Io(e)),
            }
        }
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<R: Read> FusedIterator for Scanner<R> {}

/// Convenience function: tokenize an in-memory source.
///
/// For streaming access, construct a [`Scanner`] over a reader directly.
pub fn tokenize(source: &[u8]) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).collect()
}
