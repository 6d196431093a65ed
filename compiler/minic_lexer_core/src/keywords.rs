//! Reserved-word table.
//!
//! The table is closed: there is no runtime registration. Lookup uses the
//! spelling's length as a first-pass filter (keywords are 2-8 bytes), then
//! matches against the keywords of that length.

/// Returns `true` if `text` is exactly one of the reserved words.
///
/// Case-sensitive: `If` and `IF` are identifiers.
#[inline]
pub fn is_keyword(text: &[u8]) -> bool {
    match text.len() {
        2 => text == b"if",
        3 => matches!(text, b"for" | b"int"),
        4 => matches!(text, b"else" | b"char" | b"type" | b"auto"),
        5 => matches!(text, b"break" | b"float"),
        6 => matches!(text, b"return" | b"struct"),
        7 => text == b"typedef",
        8 => text == b"function",
        _ => false,
    }
}
