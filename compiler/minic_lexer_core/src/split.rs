//! The scan driver: one token, or a request for more input, per call.
//!
//! [`split`] is the incremental consumption protocol. The caller keeps the
//! unconsumed bytes of the stream in a buffer and calls `split` with them.
//! Depending on the [`Step`] returned it either drops exactly
//! [`Lexeme::consumed`] bytes from the front of the buffer, appends freshly
//! read bytes and calls again, or stops.
//!
//! # Dispatch
//!
//! Leading whitespace is skipped (not emitted), then the first remaining
//! byte selects the recognizer, in this order:
//!
//! 1. alphabetic → name or keyword
//! 2. digit → number
//! 3. `( ) [ ] { } ? . : ;` → single punctuation byte
//! 4. `\n` → newline
//! 5. anything else → comment, then operator, then a single `Other` byte
//!
//! The classes in 1-4 are disjoint. Step 5 is the catch-all and must run
//! last.

use std::ops::Range;

use crate::classify::{is_alpha, is_digit, is_func_symbol, is_newline};
use crate::operator::{self, LOOKAHEAD};
use crate::recognize::{self, Recognized};
use crate::tag::TokenKind;
use crate::window::Window;

/// A token found at the front of the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: TokenKind,
    /// Whitespace bytes skipped before the token.
    pub skipped: usize,
    /// Length of the token itself. Never zero.
    pub len: usize,
}

impl Lexeme {
    /// Bytes to drop from the front of the window: whitespace plus token.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.skipped + self.len
    }

    /// Position of the token's text within the window.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.skipped..self.consumed()
    }
}

/// Outcome of one [`split`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Nothing consumed. Append more input and call again.
    ///
    /// Never returned for a final window.
    NeedMoreData,
    /// The stream is over and the window holds at most trailing whitespace.
    EndOfStream,
    /// A complete token. Drop [`Lexeme::consumed`] bytes from the window.
    Token(Lexeme),
    /// The stream ended inside a comment opened `skipped` bytes into the
    /// window, before its `*/` or `\n`. Terminal: no further tokens can be
    /// produced.
    UnterminatedComment { skipped: usize },
}

/// Find the next token at the front of `data`.
///
/// `at_eof` states whether `data` holds everything left in the stream. With
/// `at_eof == false` the result is only [`Step::Token`] when the token's
/// extent is fully decided by the bytes present, so splitting the same
/// stream into different reads yields the same tokens.
pub fn split(data: &[u8], at_eof: bool) -> Step {
    let mut window = Window::new(data, at_eof);
    let skipped = window.eat_whitespace();

    let Some(look) = window.current() else {
        return if at_eof {
            Step::EndOfStream
        } else {
            Step::NeedMoreData
        };
    };

    let recognized = if is_alpha(look) {
        recognize::name(window)
    } else if is_digit(look) {
        recognize::number(window)
    } else if is_func_symbol(look) {
        recognize::func_symbol(window)
    } else if is_newline(look) {
        recognize::newline(window)
    } else {
        comment_or_operator(window)
    };

    match recognized {
        Recognized::Matched { len, kind } => {
            debug_assert!(len > 0, "recognizer matched an empty {kind:?}");
            Step::Token(Lexeme { kind, skipped, len })
        }
        // Only an unclosed comment asks for more data in a final window.
        Recognized::NeedMoreData if at_eof => Step::UnterminatedComment { skipped },
        Recognized::NeedMoreData => Step::NeedMoreData,
        // Every dispatch arm has a catch-all, but a byte must never stall the scan.
        Recognized::NoMatch => Step::Token(Lexeme {
            kind: TokenKind::Other,
            skipped,
            len: 1,
        }),
    }
}

/// Comment, operator, or a single unrecognized byte.
fn comment_or_operator(window: Window<'_>) -> Recognized {
    if window.remaining() < LOOKAHEAD && !window.is_final() {
        return Recognized::NeedMoreData;
    }
    match recognize::comment(window) {
        Recognized::NoMatch => {}
        found => return found,
    }
    match operator::operator(window) {
        Recognized::NoMatch => Recognized::Matched {
            len: 1,
            kind: TokenKind::Other,
        },
        found => found,
    }
}

#[cfg(test)]
mod tests;
