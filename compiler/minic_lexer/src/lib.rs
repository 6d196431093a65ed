//! Streaming tokenizer for minic.
//!
//! Wraps the pure split step from `minic_lexer_core` in a [`Scanner`] that
//! owns a growable buffer window and pulls bytes from any [`std::io::Read`].
//! Tokens are produced lazily, one per call, and the stream is consumed as it
//! goes: a scanner cannot be rewound.
//!
//! ```no_run
//! use minic_lexer::{render, Scanner};
//!
//! let file = std::fs::File::open("main.mc")?;
//! let mut out = std::io::stdout().lock();
//! render::render_stream(Scanner::new(file), &mut out)?;
//! # Ok::<(), minic_lexer::LexError>(())
//! ```

mod config;
mod lex_error;
pub mod render;
mod scanner;
mod token;

pub use config::ScannerConfig;
pub use lex_error::LexError;
pub use minic_lexer_core::TokenKind;
pub use scanner::{tokenize, Scanner};
pub use token::Token;
