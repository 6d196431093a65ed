//! Operator disambiguation.
//!
//! Operators are at most two bytes long, and an operator only counts if the
//! byte after it is a boundary (see [`is_boundary`]). Deciding that needs
//! three bytes of lookahead: `x` (first byte), `y` (second byte or
//! follower), and `z` (follower of a two-byte operator).
//!
//! Three families are tried in a fixed order, and the first non-zero length
//! wins:
//!
//! | family     | length 1                     | length 2                          |
//! |------------|------------------------------|-----------------------------------|
//! | assignment | `=`                          | `+= -= *= /=`                     |
//! | comparison | `>` `<`                      | `>= <= != ==`                     |
//! | arithmetic | `+ - * / ^`                  | `<< >>`                           |
//!
//! The order matters. `+=` must be seen by the assignment family before the
//! arithmetic family can claim the `+`. A lone `<` belongs to comparison,
//! and `<<` only matches arithmetic because the comparison family rejects a
//! `<` whose follower is another `<`.
//!
//! A missing byte (`None`) is only ever passed for a final window, where it
//! means end of input, which is a boundary.

use crate::classify::is_boundary;
use crate::recognize::Recognized;
use crate::tag::TokenKind;
use crate::window::Window;

/// Bytes of lookahead needed to classify an operator or comment opener.
pub const LOOKAHEAD: usize = 3;

/// Boundary test that treats end of input as a boundary.
#[inline]
fn ends(b: Option<u8>) -> bool {
    b.map_or(true, is_boundary)
}

/// Length of an assignment operator at `x`, or 0.
pub fn assignment_len(x: u8, y: Option<u8>, z: Option<u8>) -> usize {
    if x == b'=' && ends(y) {
        return 1;
    }
    if matches!(x, b'+' | b'-' | b'*' | b'/') && y == Some(b'=') && ends(z) {
        return 2;
    }
    0
}

/// Length of a comparison operator at `x`, or 0.
pub fn comparison_len(x: u8, y: Option<u8>, z: Option<u8>) -> usize {
    if matches!(x, b'>' | b'<') && ends(y) {
        return 1;
    }
    if matches!(x, b'>' | b'<' | b'!' | b'=') && y == Some(b'=') && ends(z) {
        return 2;
    }
    0
}

/// Length of an arithmetic operator at `x`, or 0.
pub fn arithmetic_len(x: u8, y: Option<u8>, z: Option<u8>) -> usize {
    if matches!(x, b'+' | b'-' | b'*' | b'/' | b'^') && ends(y) {
        return 1;
    }
    if matches!(x, b'<' | b'>') && y == Some(x) && ends(z) {
        return 2;
    }
    0
}

/// Try the three operator families in order at the window's position.
///
/// Returns [`Recognized::NeedMoreData`] if fewer than [`LOOKAHEAD`] bytes are
/// available and more may still arrive.
pub fn operator(window: Window<'_>) -> Recognized {
    if window.remaining() < LOOKAHEAD && !window.is_final() {
        return Recognized::NeedMoreData;
    }
    let Some(x) = window.current() else {
        return Recognized::NoMatch;
    };
    let (y, z) = (window.peek(), window.peek2());

    let families: [(fn(u8, Option<u8>, Option<u8>) -> usize, TokenKind); 3] = [
        (assignment_len, TokenKind::Assignment),
        (comparison_len, TokenKind::CmpOp),
        (arithmetic_len, TokenKind::MathOp),
    ];
    for (family, kind) in families {
        let len = family(x, y, z);
        if len != 0 {
            return Recognized::Matched { len, kind };
        }
    }
    Recognized::NoMatch
}
