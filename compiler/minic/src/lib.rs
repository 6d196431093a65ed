//! minic command-line driver.
//!
//! The binary in `main.rs` only dispatches on the first argument; the
//! command handlers live in [`commands`] so they can be tested without
//! spawning a process.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
