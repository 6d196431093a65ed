//! Errors that end a scan.
//!
//! Every variant is terminal: after returning one, the scanner yields no
//! further tokens. There is no recovery that resumes after a bad token.

use thiserror::Error;

/// A scan failure, located by absolute byte offset in the stream.
#[derive(Debug, Error)]
pub enum LexError {
    /// Reading the underlying stream failed.
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended inside a comment: a `/*` without `*/`, or a `//`
    /// without a closing newline.
    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment { offset: u64 },

    /// A token did not fit into the largest allowed buffer window.
    #[error("token at byte {offset} exceeds the maximum token size of {max} bytes")]
    TokenTooLong { offset: u64, max: usize },
}
