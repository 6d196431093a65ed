//! Per-family lexeme recognizers.
//!
//! Each recognizer receives a [`Window`] positioned at the first byte of a
//! candidate token and reports how many bytes the token spans. Recognizers
//! assume the dispatching driver already checked their entry predicate
//! (e.g. [`name`] is only called on an alphabetic byte).
//!
//! A recognizer never returns a span that touches the end of a non-final
//! window if more bytes could extend it. It reports
//! [`Recognized::NeedMoreData`] instead, so the result does not depend on
//! where the input happened to be split into reads.

use crate::classify::{is_alpha_num, is_digit, is_func_symbol, is_newline};
use crate::keywords;
use crate::tag::TokenKind;
use crate::window::Window;

/// A number token absorbs at most this many `.` bytes.
///
/// `1.2.3` scans as `1.2.` followed by `3`. This is a permissive policy,
/// not a numeric grammar: malformed literals are not flagged.
pub const MAX_NUMBER_DOTS: usize = 2;

/// Outcome of trying one recognizer at one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recognized {
    /// The bytes at this position do not start a token of this family.
    NoMatch,
    /// The bytes start a token of this family, but its end is not in the
    /// window yet.
    NeedMoreData,
    /// A complete token of `len` bytes.
    Matched { len: usize, kind: TokenKind },
}

impl Recognized {
    #[inline]
    fn matched(len: usize, kind: TokenKind) -> Self {
        Recognized::Matched { len, kind }
    }
}

// ─── Names ─────────────────────────────────────────────────────

/// Identifier or keyword: an alphabetic byte followed by alphanumerics.
pub fn name(mut window: Window<'_>) -> Recognized {
    let start = window.pos();
    window.advance(); // first byte already validated as alphabetic
    window.eat_while(is_alpha_num);
    if window.is_starved() {
        return Recognized::NeedMoreData;
    }
    let text = window.slice_from(start);
    let kind = if keywords::is_keyword(text) {
        TokenKind::Keyword
    } else {
        TokenKind::Variable
    };
    Recognized::matched(text.len(), kind)
}

// ─── Numbers ───────────────────────────────────────────────────

/// Digits and up to [`MAX_NUMBER_DOTS`] dots, starting with a digit.
///
/// Scanning stops right after the last permitted dot, even if digits follow.
pub fn number(mut window: Window<'_>) -> Recognized {
    let start = window.pos();
    window.advance(); // first byte already validated as a digit
    let mut dots = 0;
    while dots < MAX_NUMBER_DOTS {
        match window.current() {
            Some(b'.') => {
                dots += 1;
                window.advance();
            }
            Some(b) if is_digit(b) => window.advance(),
            Some(_) => break,
            None if window.is_final() => break,
            None => return Recognized::NeedMoreData,
        }
    }
    Recognized::matched(window.pos() - start, TokenKind::Number)
}

// ─── Single Bytes ──────────────────────────────────────────────

/// One punctuation byte from the fixed set `( ) [ ] { } ? . : ;`.
pub fn func_symbol(window: Window<'_>) -> Recognized {
    match window.current() {
        Some(b) if is_func_symbol(b) => Recognized::matched(1, TokenKind::FuncSymbol),
        _ => Recognized::NoMatch,
    }
}

/// One `\n` byte.
pub fn newline(window: Window<'_>) -> Recognized {
    match window.current() {
        Some(b) if is_newline(b) => Recognized::matched(1, TokenKind::NewLine),
        _ => Recognized::NoMatch,
    }
}

// ─── Comments ──────────────────────────────────────────────────

/// `/* ... */` or `// ...\n`.
///
/// Returns [`Recognized::NeedMoreData`] (not [`Recognized::NoMatch`]) when
/// the opener is present but the terminator is not in the window. In a final
/// window that outcome is permanent: the comment is unterminated, and the
/// driver reports it as such. This holds for both forms, so a `//` comment
/// must end in `\n`.
pub fn comment(window: Window<'_>) -> Recognized {
    match (window.current(), window.peek()) {
        (Some(b'/'), Some(b'*')) => block_comment(window),
        (Some(b'/'), Some(b'/')) => line_comment(window),
        _ => Recognized::NoMatch,
    }
}

fn block_comment(window: Window<'_>) -> Recognized {
    // Search starts after the opener so `/*/` does not close itself.
    match window.find_seq(2, b"*/") {
        Some(close) => Recognized::matched(close + 2, TokenKind::Comment),
        None => Recognized::NeedMoreData,
    }
}

fn line_comment(window: Window<'_>) -> Recognized {
    match window.find_byte(2, b'\n') {
        // The newline belongs to the comment.
        Some(nl) => Recognized::matched(nl + 1, TokenKind::Comment),
        None => Recognized::NeedMoreData,
    }
}
