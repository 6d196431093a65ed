//! Command handlers for the minic CLI.
//!
//! Each submodule implements one CLI command. Shared utilities such as
//! opening the input source live here in the module root.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

mod lex;

pub use lex::{lex_file, lex_to_writer, parse_lex_options, Input, LexOptionError, LexOptions};

/// Describe a failure to open `path` for the user.
pub(crate) fn open_error_message(path: &Path, e: &io::Error) -> String {
    let path = path.display();
    match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {e}"),
    }
}

/// Open the input source, exiting with a user-friendly error message on failure.
pub(crate) fn open_source(input: &Input) -> Box<dyn Read> {
    match input {
        Input::Stdin => Box::new(io::stdin().lock()),
        Input::Path(path) => match File::open(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("error: {}", open_error_message(path, &e));
                std::process::exit(1);
            }
        },
    }
}
