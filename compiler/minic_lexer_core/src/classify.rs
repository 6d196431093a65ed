//! Byte classification.
//!
//! Every predicate is a single indexed read into [`CLASS_TABLE`], a 256-entry
//! table of class bits computed at compile time. Only ASCII bytes carry any
//! class; everything at or above `0x80` falls through to the `Other` path of
//! the scanner one byte at a time.

/// Space, tab, or carriage return.
const WHITE: u8 = 1 << 0;
/// `a-z` or `A-Z`.
const ALPHA: u8 = 1 << 1;
/// `0-9`.
const DIGIT: u8 = 1 << 2;
/// `\n`.
const NEWLINE: u8 = 1 << 3;
/// `( ) [ ] { } ? . : ;`
const FUNC_SYMBOL: u8 = 1 << 4;
/// Punctuation that may directly follow an operator: `(` and `;`.
const OPERATOR_FOLLOW: u8 = 1 << 5;

/// Bytes that end an operator lexeme without extending it.
const BOUNDARY: u8 = WHITE | ALPHA | DIGIT | NEWLINE | OPERATOR_FOLLOW;

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        let mut class = 0;
        if matches!(b, b' ' | b'\t' | b'\r') {
            class |= WHITE;
        }
        if b.is_ascii_alphabetic() {
            class |= ALPHA;
        }
        if b.is_ascii_digit() {
            class |= DIGIT;
        }
        if b == b'\n' {
            class |= NEWLINE;
        }
        if matches!(
            b,
            b'(' | b')' | b'[' | b']' | b'{' | b'}' | b'?' | b'.' | b':' | b';'
        ) {
            class |= FUNC_SYMBOL;
        }
        if matches!(b, b'(' | b';') {
            class |= OPERATOR_FOLLOW;
        }
        table[i as usize] = class;
        i += 1;
    }
    table
};

#[inline]
fn has(b: u8, class: u8) -> bool {
    CLASS_TABLE[b as usize] & class != 0
}

/// Horizontal whitespace skipped between tokens.
///
/// Newline is deliberately not whitespace: it is a token of its own.
#[inline]
pub fn is_white(b: u8) -> bool {
    has(b, WHITE)
}

/// ASCII letter.
#[inline]
pub fn is_alpha(b: u8) -> bool {
    has(b, ALPHA)
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    has(b, DIGIT)
}

/// ASCII letter or digit.
#[inline]
pub fn is_alpha_num(b: u8) -> bool {
    has(b, ALPHA | DIGIT)
}

#[inline]
pub fn is_newline(b: u8) -> bool {
    has(b, NEWLINE)
}

/// Single-byte punctuation emitted as [`TokenKind::FuncSymbol`](crate::TokenKind::FuncSymbol).
#[inline]
pub fn is_func_symbol(b: u8) -> bool {
    has(b, FUNC_SYMBOL)
}

/// Returns `true` if `b` may follow an operator without being part of it.
///
/// Whitespace, alphanumerics, newline, `(` and `;`. Anything else after an
/// operator candidate means the candidate is a prefix of something this
/// lexer does not recognize.
#[inline]
pub fn is_boundary(b: u8) -> bool {
    has(b, BOUNDARY)
}
