//! minic CLI
//!
//! Streaming tokenizer driver for the minic language.

use minic::commands::{lex_file, parse_lex_options, LexOptions};

fn main() {
    minic::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("No input source file");
        println!();
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: minic lex <file.mc|-> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --max-token-size=<bytes>  Largest token the scanner accepts (default: 64k)");
                eprintln!("  --buffer-size=<bytes>     Initial read buffer size (default: 4k)");
                std::process::exit(1);
            }
            lex_file(&parse_or_exit(&args[2..]));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("minic {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A path as the first argument is shorthand for `lex`.
            let path = std::path::Path::new(command);
            if command == "-"
                || path.is_file()
                || path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("mc"))
            {
                lex_file(&parse_or_exit(&args[1..]));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn parse_or_exit(args: &[String]) -> LexOptions {
    match parse_lex_options(args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: minic lex <file.mc|-> [options]");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("minic - streaming tokenizer");
    println!();
    println!("Usage: minic <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.mc|->      Tokenize a file (or stdin) and print the tokens");
    println!("  <file.mc>            Same as `lex <file.mc>`");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --max-token-size=<bytes>  Largest token the scanner accepts (default: 64k)");
    println!("  --buffer-size=<bytes>     Initial read buffer size (default: 4k)");
    println!();
    println!("Sizes accept a k or m suffix (KiB, MiB).");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=minic_lexer=trace   Log every token as it is scanned");
    println!();
    println!("Examples:");
    println!("  minic lex main.mc");
    println!("  minic main.mc --max-token-size=1m");
    println!("  cat main.mc | minic lex -");
}
