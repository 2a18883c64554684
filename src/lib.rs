//! # swiftlex
//!
//! A single-pass lexical analyzer for Swift-like source code.
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code into classified tokens
//! - `render`: Colored `<lexeme, Kind>` presentation of tokens
//! - `error`: Lexical error taxonomy and source-context diagnostics
//! - `sample`: Built-in demo input
//!
//! Tokenization never fails. Unterminated strings and block comments become
//! `Error` tokens and the scan always reaches `EndOfInput`.

pub mod error;
pub mod lexer;
pub mod render;
pub mod sample;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, SourceLocation};
pub use lexer::{Lexer, Token, TokenKind};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize a complete source string
///
/// The result always ends with exactly one `EndOfInput` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source, None).tokenize()
}
