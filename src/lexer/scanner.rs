//! Lexer/Scanner implementation
//!
//! This module implements lexical analysis, converting source code into tokens.
//! Scanning is total: malformed input becomes `Error` tokens and the scan
//! always runs to the end of the input.

use super::token::{is_keyword, is_operator, is_separator, Token, TokenKind};
use crate::error::{LexError, SourceLocation};

/// Lexer for Swift-like source code
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    start: usize,
    start_line: usize,
    start_column: usize,
    current: usize,
    line: usize,
    column: usize,
    filename: Option<String>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str, filename: Option<&str>) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            start_line: 1,
            start_column: 1,
            current: 0,
            line: 1,
            column: 1,
            filename: filename.map(|s| s.to_string()),
        }
    }

    /// Tokenize the source code
    ///
    /// The returned sequence always ends with exactly one `EndOfInput` token
    /// positioned at the final cursor.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let _span = tracing::debug_span!("tokenize", chars = self.source.len()).entered();

        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }

            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;
            self.scan_token();
        }

        let location = self.current_location();
        self.tokens
            .push(Token::new(TokenKind::EndOfInput, String::new(), location));

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "tokenize finished"
        );

        std::mem::take(&mut self.tokens)
    }

    /// Errors recovered from during the last scan, in source order
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Scan a single token starting at the cursor
    fn scan_token(&mut self) {
        let c = self.peek();

        match c {
            // Comments take priority over the `/` operator
            '/' if self.peek_next() == '/' => self.scan_line_comment(),
            '/' if self.peek_next() == '*' => self.scan_block_comment(),

            // Directives take priority over the `#` operator
            '#' => self.scan_directive(),

            '"' => self.scan_string(),

            c if c.is_ascii_digit() || (c == '.' && self.peek_next().is_ascii_digit()) => {
                self.scan_number()
            }

            c if is_identifier_start(c) => self.scan_identifier(),

            c if is_operator(c) => {
                self.advance();
                self.add_token(TokenKind::Operator);
            }

            c if is_separator(c) => {
                self.advance();
                self.add_token(TokenKind::Separator);
            }

            _ => {
                self.advance();
                self.add_token(TokenKind::Unknown);
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && is_whitespace(self.peek()) {
            self.advance();
        }
    }

    /// Scan a `//` comment up to, but not including, the newline
    fn scan_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }

        self.add_token(TokenKind::Comment);
    }

    /// Scan a nested `/* ... */` comment
    fn scan_block_comment(&mut self) {
        self.advance();
        self.advance();
        let mut depth = 1usize;

        while depth > 0 && !self.is_at_end() {
            if self.peek() == '/' && self.peek_next() == '*' {
                self.advance();
                self.advance();
                depth += 1;
            } else if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                depth -= 1;
            } else {
                self.advance();
            }
        }

        if depth > 0 {
            self.add_error(LexError::unterminated_block_comment(self.start_location()));
        } else {
            self.add_token(TokenKind::Comment);
        }
    }

    /// Scan `#` followed by identifier characters
    fn scan_directive(&mut self) {
        self.advance();

        while is_identifier_part(self.peek()) {
            self.advance();
        }

        self.add_token(TokenKind::Directive);
    }

    /// Scan a string literal, keeping escape sequences verbatim
    fn scan_string(&mut self) {
        self.advance();

        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\\' {
                self.advance();
                if !self.is_at_end() {
                    self.advance();
                }
            } else {
                self.advance();
            }
        }

        if self.is_at_end() {
            self.add_error(LexError::unterminated_string_literal(self.start_location()));
            return;
        }

        // Consume closing quote
        self.advance();
        self.add_token(TokenKind::StringLiteral);
    }

    /// Scan a number literal (integer or float)
    ///
    /// Only the first `.` is absorbed. Anything after a second `.` is left
    /// for the next token.
    fn scan_number(&mut self) {
        let mut seen_dot = false;

        loop {
            let c = self.peek();
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        self.add_token(kind);
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) {
        while is_identifier_part(self.peek()) {
            self.advance();
        }

        let lexeme = self.lexeme();
        let kind = if is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        let location = self.start_location();
        self.tokens.push(Token::new(kind, lexeme, location));
    }

    /// Add a token spanning from the token start to the cursor
    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.lexeme();
        let location = self.start_location();
        self.tokens.push(Token::new(kind, lexeme, location));
    }

    /// Replace the malformed construct with an `Error` token
    fn add_error(&mut self, error: LexError) {
        tracing::debug!(%error, "recovered from lexical error");
        self.tokens.push(Token::error(&error));
        self.errors.push(error);
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    /// Advance to the next character, updating line and column
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        c
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Peek at the next character without consuming it
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn start_location(&self) -> SourceLocation {
        SourceLocation::new(self.start_line, self.start_column, self.filename.clone())
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.filename.clone())
    }
}

/// ASCII whitespace plus vertical tab
fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
