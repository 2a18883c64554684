//! swiftlex CLI
//!
//! Lexes a file (or the built-in Swift sample) and prints every token with
//! its kind, followed by a summary line.

use std::env;
use std::fs;
use std::process;

use swiftlex::render::{render_tokens, summary};
use swiftlex::sample::SWIFT_SAMPLE;
use swiftlex::{Diagnostic, Lexer, VERSION};

/// Options parsed from the command line
#[derive(Debug, Default)]
struct Options {
    show_positions: bool,
    no_color: bool,
    filename: Option<String>,
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let mut options = Options::default();

    for arg in &args[1..] {
        match arg.as_str() {
            "--positions" | "-p" => options.show_positions = true,
            "--no-color" | "-n" => options.no_color = true,
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--version" | "-V" => {
                println!("swiftlex {}", VERSION);
                return;
            }
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ if options.filename.is_some() => {
                eprintln!("Error: more than one input file given");
                print_usage();
                process::exit(1);
            }
            _ => options.filename = Some(arg.clone()),
        }
    }

    if options.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&options) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Initialize tracing only when `RUST_LOG` is set
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn print_usage() {
    eprintln!("Usage: swiftlex [OPTIONS] [file]");
    eprintln!("       swiftlex --help");
}

fn print_help() {
    println!("swiftlex v{} - Swift lexical analyzer", VERSION);
    println!();
    println!("USAGE:");
    println!("    swiftlex [OPTIONS] [file]");
    println!();
    println!("OPTIONS:");
    println!("    -p, --positions   Prefix each token with line:column");
    println!("    -n, --no-color    Disable colored output");
    println!("    -V, --version     Show version");
    println!("    -h, --help        Show this help message");
    println!();
    println!("Without a file, the built-in Swift sample is analyzed.");
    println!("Set RUST_LOG=swiftlex=debug for scanner logs.");
}

/// Lex the selected input and print tokens, diagnostics and the summary
fn run(options: &Options) -> Result<(), String> {
    let source = match options.filename {
        Some(ref filename) => fs::read_to_string(filename)
            .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?,
        None => SWIFT_SAMPLE.to_string(),
    };

    let mut lexer = Lexer::new(&source, options.filename.as_deref());
    let tokens = lexer.tokenize();

    println!("Swift Lexical Analysis");
    println!();

    for line in render_tokens(&tokens, options.show_positions) {
        println!("{}", line);
    }

    for error in lexer.errors() {
        eprint!("{}", Diagnostic::with_source(error.clone(), &source));
    }

    println!();
    println!("{}", summary(&tokens));

    Ok(())
}
