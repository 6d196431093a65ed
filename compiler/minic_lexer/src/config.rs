//! Buffer sizing for the streaming scanner.

use minic_lexer_core::LOOKAHEAD;

/// Buffer sizing for a [`Scanner`](crate::Scanner).
///
/// The window starts at `initial_capacity` bytes and doubles whenever a token
/// does not fit, up to `max_token_size`. A token that cannot be classified
/// within `max_token_size` bytes is an error rather than a reason to keep
/// growing. Whitespace between tokens does not count toward the limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Bytes allocated for the window before the first read.
    pub initial_capacity: usize,
    /// Largest window the scanner will grow to.
    pub max_token_size: usize,
}

impl ScannerConfig {
    /// Default first allocation.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4096;
    /// Default upper bound on a single token.
    pub const DEFAULT_MAX_TOKEN_SIZE: usize = 64 * 1024;

    #[must_use]
    pub fn with_initial_capacity(mut self, bytes: usize) -> Self {
        self.initial_capacity = bytes;
        self
    }

    #[must_use]
    pub fn with_max_token_size(mut self, bytes: usize) -> Self {
        self.max_token_size = bytes;
        self
    }

    /// Clamp the settings into a usable range.
    ///
    /// The window must hold at least [`LOOKAHEAD`] bytes, or an operator at
    /// the front could never be decided. The initial capacity never exceeds
    /// the maximum.
    pub(crate) fn normalized(self) -> Self {
        let max_token_size = self.max_token_size.max(LOOKAHEAD);
        let initial_capacity = self.initial_capacity.clamp(LOOKAHEAD, max_token_size);
        Self {
            initial_capacity,
            max_token_size,
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_token_size: Self::DEFAULT_MAX_TOKEN_SIZE,
        }
    }
}
