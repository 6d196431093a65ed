//! Owned tokens handed out by the streaming scanner.

use minic_lexer_core::TokenKind;

/// A classified byte span copied out of the stream.
///
/// The text is raw bytes: the scanner does not require UTF-8, and bytes it
/// cannot classify come through one at a time as [`TokenKind::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: Vec<u8>,
    /// Absolute offset of the first byte of `text` in the stream.
    offset: u64,
}

impl Token {
    pub fn new(kind: TokenKind, text: Vec<u8>, offset: u64) -> Self {
        debug_assert!(!text.is_empty(), "token text is never empty");
        Self { kind, text, offset }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact bytes matched, including a trailing `\n` for newline and
    /// line-comment tokens.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false` for tokens produced by the scanner.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if the text ends in `\n`.
    ///
    /// The dump format uses this to decide between a separator and a line
    /// break after the token.
    #[inline]
    pub fn ends_with_newline(&self) -> bool {
        self.text.last() == Some(&b'\n')
    }
}
