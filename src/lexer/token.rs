//! Token definitions
//!
//! This module defines the token kinds produced by the scanner and the fixed
//! character and keyword tables used to classify them.

use crate::error::{LexError, SourceLocation};
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fmt;

/// Characters that form a single-character operator
pub const OPERATOR_CHARS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '&', '|', '<', '>', '!', '~', '^', '?', '.', ':', '@', '#',
];

/// Characters that form a separator
pub const SEPARATOR_CHARS: &[char] = &['(', ')', ',', ';', '{', '}', '[', ']'];

/// Reserved words, in no particular order
pub const KEYWORDS: &[&str] = &[
    "let", "var", "func", "class", "struct", "enum", "import", "if", "else", "switch", "case",
    "default", "for", "while", "repeat", "return", "break", "continue", "guard", "defer", "do",
    "try", "catch", "throw", "protocol", "extension", "operator", "precedencegroup", "inout",
    "deinit", "init", "final", "public", "private", "internal", "open", "fileprivate", "static",
    "lazy", "weak", "unowned", "associatedtype", "typealias", "where", "as", "is", "nil", "true",
    "false", "fallthrough",
];

lazy_static! {
    static ref KEYWORD_SET: HashSet<&'static str> = KEYWORDS.iter().copied().collect();
}

/// Check whether `word` is a reserved word (exact, case-sensitive match)
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Check whether `c` is a single-character operator
pub fn is_operator(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Check whether `c` is a separator
pub fn is_separator(c: char) -> bool {
    SEPARATOR_CHARS.contains(&c)
}

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw matched text, or the diagnostic message for `Error` tokens
    pub lexeme: String,
    /// Position of the first character
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: String, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme,
            location,
        }
    }

    /// Create an `Error` token carrying the error's fixed message
    pub fn error(error: &LexError) -> Self {
        Self::new(
            TokenKind::Error,
            error.message().to_string(),
            error.location().clone(),
        )
    }

    /// 1-based line of the first character
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// 1-based column of the first character
    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Integer,
    /// Reserved; the scanner never produces it
    HexInteger,
    Float,
    StringLiteral,

    // Markers
    Directive,
    Comment,

    // Words
    Keyword,
    Identifier,

    // Punctuation
    Operator,
    Separator,

    // Special
    Unknown,
    EndOfInput,
    Error,
}

impl TokenKind {
    /// Get the display name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::HexInteger => "HexInteger",
            Self::Float => "Float",
            Self::StringLiteral => "StringLiteral",
            Self::Directive => "Directive",
            Self::Comment => "Comment",
            Self::Keyword => "Keyword",
            Self::Identifier => "Identifier",
            Self::Operator => "Operator",
            Self::Separator => "Separator",
            Self::Unknown => "Unknown",
            Self::EndOfInput => "EndOfInput",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("let"));
        assert!(is_keyword("func"));
        assert!(is_keyword("precedencegroup"));
        assert!(is_keyword("fallthrough"));
        assert!(!is_keyword("Let"));
        assert!(!is_keyword("le"));
        assert!(!is_keyword("letter"));
        assert!(!is_keyword("print"));
        assert!(!is_keyword(""));
    }

    #[test]
    fn test_keyword_table_has_no_duplicates() {
        assert_eq!(KEYWORD_SET.len(), KEYWORDS.len());
    }

    #[test]
    fn test_character_classes_are_disjoint() {
        for c in SEPARATOR_CHARS {
            assert!(!is_operator(*c), "{c:?} is both operator and separator");
        }
        assert!(is_operator('#'));
        assert!(is_operator('.'));
        assert!(is_separator(';'));
        assert!(!is_separator('$'));
        assert!(!is_operator('$'));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Integer.to_string(), "Integer");
        assert_eq!(TokenKind::StringLiteral.to_string(), "StringLiteral");
        assert_eq!(TokenKind::EndOfInput.to_string(), "EndOfInput");

        let all = [
            TokenKind::Integer,
            TokenKind::HexInteger,
            TokenKind::Float,
            TokenKind::StringLiteral,
            TokenKind::Directive,
            TokenKind::Comment,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Separator,
            TokenKind::Unknown,
            TokenKind::EndOfInput,
            TokenKind::Error,
        ];
        let names: HashSet<&str> = all.iter().map(TokenKind::as_str).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_error_token() {
        let err = LexError::unterminated_block_comment(SourceLocation::at(2, 4));
        let token = Token::error(&err);

        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.lexeme, "Unterminated block comment");
        assert_eq!((token.line(), token.column()), (2, 4));
    }
}
