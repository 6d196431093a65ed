//! Token kinds.

use std::fmt;

/// Classification of a token.
///
/// `#[repr(u8)]` keeps the kind one byte so a `(kind, len)` pair stays
/// small. `String`, `BooleanOp` and `EndOfStream` are part of the closed set
/// but are never produced by the current recognizers: string literals and
/// `&&`/`||` are not scanned yet, and end of stream is signalled by
/// [`Step::EndOfStream`](crate::Step::EndOfStream) rather than a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// Identifier that is not a keyword.
    Variable = 0,
    /// Digits with up to two `.` bytes.
    Number = 1,
    /// Reserved: string literal.
    String = 2,
    /// `=  +=  -=  *=  /=`
    Assignment = 3,
    /// `+ - * / ^ << >>`
    MathOp = 4,
    /// `> < >= <= != ==`
    CmpOp = 5,
    /// Reserved: `&& || !`
    BooleanOp = 6,
    /// One of the reserved words, see [`keywords`](crate::keywords).
    Keyword = 7,
    /// `( ) [ ] { } ? . : ;`
    FuncSymbol = 8,
    NewLine = 9,
    /// `// ...\n` or `/* ... */`
    Comment = 10,
    /// Reserved: end of stream is not emitted as a token.
    EndOfStream = 11,
    /// Any single byte no recognizer claims.
    Other = 12,
}

impl TokenKind {
    /// Display name used by the token dump format.
    ///
    /// These spellings are fixed: existing golden output depends on them,
    /// including the abbreviated `Assign` and the upper-case `OP` suffixes.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Variable => "Variable",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Assignment => "Assign",
            TokenKind::MathOp => "MathOp",
            TokenKind::CmpOp => "CmpOP",
            TokenKind::BooleanOp => "BooleanOP",
            TokenKind::Keyword => "Keyword",
            TokenKind::FuncSymbol => "FuncSymbol",
            TokenKind::NewLine => "NewLine",
            TokenKind::Comment => "Comment",
            TokenKind::EndOfStream => "EOF",
            TokenKind::Other => "Other",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
