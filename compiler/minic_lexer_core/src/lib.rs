//! Low-level incremental tokenizer for minic.
//!
//! This crate is standalone: it knows nothing about files, readers, or
//! output formatting. Its entry point is [`split`], a pure function over the
//! not-yet-consumed bytes of a stream (the *window*) that answers one
//! question per call: is there a complete token at the front of the window,
//! does the caller need to supply more bytes first, or is the stream done?
//!
//! # Layers
//!
//! - [`classify`]: per-byte predicates backed by a 256-entry class table.
//! - [`Window`]: cursor over the window that reports "out of bytes"
//!   separately from "stream over".
//! - [`recognize`]: per-family recognizers returning [`Recognized`].
//! - [`operator`]: three-byte lookahead disambiguation of operators.
//! - [`keywords`]: the reserved-word table.
//! - [`split`]: the driver tying them together into a [`Step`].
//!
//! The streaming driver that owns a buffer and a reader lives in the
//! `minic_lexer` crate.

pub mod classify;
pub mod keywords;
pub mod operator;
pub mod recognize;
mod split;
mod tag;
mod window;

pub use operator::LOOKAHEAD;
pub use recognize::Recognized;
pub use split::{split, Lexeme, Step};
pub use tag::TokenKind;
pub use window::Window;
