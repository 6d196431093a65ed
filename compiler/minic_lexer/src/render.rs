//! Token dump format.
//!
//! Each token is written as its kind name, a space, and its raw text.
//! Tokens whose text ends in `\n` carry their own line break; every other
//! token is followed by [`SEPARATOR`]. A source line therefore dumps as one
//! output line:
//!
//! ```text
//! Keyword int | Variable x | Assign = | Number 1 | FuncSymbol ; | NewLine
//! ```
//!
//! The text is written byte for byte, so the dump of non-UTF-8 input is
//! itself non-UTF-8.

use std::io::{self, Read, Write};

use crate::lex_error::LexError;
use crate::scanner::Scanner;
use crate::token::Token;

/// Written after every token that does not end a line.
pub const SEPARATOR: &str = " | ";

/// Write a single token in dump format.
pub fn render_token<W: Write + ?Sized>(out: &mut W, token: &Token) -> io::Result<()> {
    out.write_all(token.kind().name().as_bytes())?;
    out.write_all(b" ")?;
    out.write_all(token.text())?;
    if !token.ends_with_newline() {
        out.write_all(SEPARATOR.as_bytes())?;
    }
    Ok(())
}

/// Drain `scanner` into `out`, one token at a time.
///
/// Returns the number of tokens written. Tokens before a scan error are
/// written before the error is returned.
pub fn render_stream<R: Read, W: Write + ?Sized>(
    scanner: Scanner<R>,
    out: &mut W,
) -> Result<usize, LexError> {
    let mut count = 0;
    for token in scanner {
        render_token(out, &token?)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}
