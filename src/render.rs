//! Token presentation
//!
//! Renders tokens as `<lexeme, KindName>` with the lexeme colored by kind.
//! Styling is purely presentational and never touches token data.

use crate::lexer::{Token, TokenKind};
use colored::{Color, ColoredString, Colorize};

/// Terminal color for a token kind, `None` for unstyled kinds
pub fn kind_color(kind: TokenKind) -> Option<Color> {
    match kind {
        TokenKind::Keyword => Some(Color::Blue),
        TokenKind::StringLiteral => Some(Color::Green),
        TokenKind::Integer | TokenKind::HexInteger | TokenKind::Float => Some(Color::Yellow),
        TokenKind::Comment => Some(Color::BrightBlack),
        TokenKind::Directive => Some(Color::Magenta),
        TokenKind::Operator => Some(Color::Cyan),
        TokenKind::Error => Some(Color::Red),
        TokenKind::Identifier
        | TokenKind::Separator
        | TokenKind::Unknown
        | TokenKind::EndOfInput => None,
    }
}

/// Style a token's lexeme according to its kind
pub fn style(token: &Token) -> ColoredString {
    let styled = match kind_color(token.kind) {
        Some(color) => token.lexeme.as_str().color(color),
        None => token.lexeme.as_str().normal(),
    };

    if token.kind == TokenKind::Error {
        styled.bold()
    } else {
        styled
    }
}

/// Render a single token as `<styled-lexeme, KindName>`
pub fn render_token(token: &Token) -> String {
    format!("<{}, {}>", style(token), token.kind)
}

/// Render every token up to, but not including, the end-of-input token
pub fn render_tokens(tokens: &[Token], show_positions: bool) -> Vec<String> {
    tokens
        .iter()
        .take_while(|token| !token.is_eof())
        .map(|token| {
            if show_positions {
                format!("{:>4}:{:<4} {}", token.line(), token.column(), render_token(token))
            } else {
                render_token(token)
            }
        })
        .collect()
}

/// Trailing summary line for a token sequence
pub fn summary(tokens: &[Token]) -> String {
    let content: Vec<&Token> = tokens.iter().take_while(|t| !t.is_eof()).collect();
    let errors = content
        .iter()
        .filter(|t| t.kind == TokenKind::Error)
        .count();

    format!(
        "End of Analysis: {} tokens, {} errors",
        content.len(),
        errors
    )
}
