//! Error handling and diagnostics for the lexer
//!
//! Lexical errors never abort a scan. They are surfaced as `Error` tokens in
//! the token stream and recorded as [`LexError`] values so a caller can render
//! them with source context.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Source location information for tokens and errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// A recoverable lexical error
///
/// Both variants can only be detected once the input is exhausted. The
/// location is where the malformed construct started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// End of input reached inside a `/* ... */` comment
    UnterminatedBlockComment { location: SourceLocation },
    /// End of input reached inside a `"..."` literal
    UnterminatedStringLiteral { location: SourceLocation },
}

impl LexError {
    /// Create an unterminated block comment error
    pub fn unterminated_block_comment(location: SourceLocation) -> Self {
        Self::UnterminatedBlockComment { location }
    }

    /// Create an unterminated string literal error
    pub fn unterminated_string_literal(location: SourceLocation) -> Self {
        Self::UnterminatedStringLiteral { location }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        "Lexer Error"
    }

    /// Get the fixed diagnostic message
    ///
    /// This is also the text of the `Error` token emitted for the construct.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnterminatedBlockComment { .. } => "Unterminated block comment",
            Self::UnterminatedStringLiteral { .. } => "Unterminated string literal",
        }
    }

    /// Get the location where the construct started
    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::UnterminatedBlockComment { location }
            | Self::UnterminatedStringLiteral { location } => location,
        }
    }

    /// The delimiter that opened the unterminated construct
    pub fn opening_delimiter(&self) -> &'static str {
        match self {
            Self::UnterminatedBlockComment { .. } => "/*",
            Self::UnterminatedStringLiteral { .. } => "\"",
        }
    }

    /// The delimiter the construct is missing
    pub fn closing_delimiter(&self) -> &'static str {
        match self {
            Self::UnterminatedBlockComment { .. } => "*/",
            Self::UnterminatedStringLiteral { .. } => "\"",
        }
    }

    /// Name of the construct, for labels
    pub fn construct(&self) -> &'static str {
        match self {
            Self::UnterminatedBlockComment { .. } => "block comment",
            Self::UnterminatedStringLiteral { .. } => "string literal",
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.kind(), self.message(), self.location())
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::at(10, 5);
        assert_eq!(loc.to_string(), "10:5");

        let loc_with_file = SourceLocation::new(10, 5, Some("main.swift".to_string()));
        assert_eq!(loc_with_file.to_string(), "main.swift:10:5");
    }

    #[test]
    fn test_error_creation() {
        let loc = SourceLocation::at(3, 7);
        let err = LexError::unterminated_string_literal(loc.clone());

        assert_eq!(err.kind(), "Lexer Error");
        assert_eq!(err.message(), "Unterminated string literal");
        assert_eq!(err.location(), &loc);
    }

    #[test]
    fn test_error_display() {
        let err = LexError::unterminated_block_comment(SourceLocation::at(5, 10));

        assert_eq!(
            err.to_string(),
            "Lexer Error: Unterminated block comment at 5:10"
        );
    }
}
