//! `minic lex`: stream a source through the scanner and dump its tokens.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use minic_lexer::{render, LexError, Scanner, ScannerConfig};
use thiserror::Error;
use tracing::debug;

use super::open_source;

/// Where the source bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// `-` on the command line.
    Stdin,
    Path(PathBuf),
}

impl Input {
    fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(arg))
        }
    }
}

/// Options for the `lex` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub input: Option<Input>,
    /// `--max-token-size=<bytes>`
    pub max_token_size: Option<usize>,
    /// `--buffer-size=<bytes>`
    pub buffer_size: Option<usize>,
}

impl LexOptions {
    /// Scanner settings, with defaults for anything not given.
    pub fn scanner_config(&self) -> ScannerConfig {
        let mut config = ScannerConfig::default();
        if let Some(bytes) = self.max_token_size {
            config = config.with_max_token_size(bytes);
        }
        if let Some(bytes) = self.buffer_size {
            config = config.with_initial_capacity(bytes);
        }
        config
    }
}

/// A command line the `lex` command cannot run with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexOptionError {
    #[error("missing file path")]
    MissingInput,

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {flag}: expected a positive number of bytes")]
    InvalidSize { flag: &'static str, value: String },
}

/// Parse `lex` arguments: one input path (or `-`) and `--flag=value` options
/// in any order.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, LexOptionError> {
    let mut options = LexOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-token-size=") {
            options.max_token_size = Some(parse_size("--max-token-size", value)?);
        } else if let Some(value) = arg.strip_prefix("--buffer-size=") {
            options.buffer_size = Some(parse_size("--buffer-size", value)?);
        } else if arg.starts_with('-') && arg != "-" {
            return Err(LexOptionError::UnknownOption(arg.clone()));
        } else if options.input.is_none() {
            options.input = Some(Input::from_arg(arg));
        } else {
            return Err(LexOptionError::UnexpectedArgument(arg.clone()));
        }
    }

    if options.input.is_none() {
        return Err(LexOptionError::MissingInput);
    }
    Ok(options)
}

/// A byte count, with an optional `k`/`K` (KiB) or `m`/`M` (MiB) suffix.
fn parse_size(flag: &'static str, value: &str) -> Result<usize, LexOptionError> {
    let invalid = || LexOptionError::InvalidSize {
        flag,
        value: value.to_string(),
    };
    let (digits, scale) = match value.as_bytes().last() {
        Some(b'k' | b'K') => (&value[..value.len() - 1], 1024),
        Some(b'm' | b'M') => (&value[..value.len() - 1], 1024 * 1024),
        _ => (value, 1),
    };
    let n: usize = digits.parse().map_err(|_| invalid())?;
    match n.checked_mul(scale) {
        Some(bytes) if bytes > 0 => Ok(bytes),
        _ => Err(invalid()),
    }
}

/// Scan `reader` and write the token dump to `out`.
///
/// Returns the number of tokens written.
pub fn lex_to_writer<R: Read, W: Write + ?Sized>(
    reader: R,
    options: &LexOptions,
    out: &mut W,
) -> Result<usize, LexError> {
    let scanner = Scanner::with_config(reader, options.scanner_config());
    render::render_stream(scanner, out)
}

/// Run the `lex` command, exiting with code 1 on any error.
pub fn lex_file(options: &LexOptions) {
    let Some(input) = &options.input else {
        eprintln!("error: {}", LexOptionError::MissingInput);
        std::process::exit(1);
    };
    let reader = open_source(input);
    let mut out = BufWriter::new(io::stdout().lock());

    match lex_to_writer(reader, options, &mut out) {
        Ok(count) => debug!(tokens = count, ?input, "lexed"),
        Err(e) => {
            // Flush what was scanned before the error so the dump shows where it stopped.
            let _ = out.flush();
            eprintln!();
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
