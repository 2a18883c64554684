//! Lexical analysis module
//!
//! This module handles tokenization of Swift-like source code.

pub mod scanner;
pub mod token;

pub use scanner::Lexer;
pub use token::{is_keyword, Token, TokenKind};
