//! Diagnostic formatting for lexical errors
//!
//! Renders a [`LexError`] against the source it came from: the offending line
//! with one line of context either side, the opening delimiter of the
//! unterminated construct underlined, and a hint naming the missing closer.
//!
//! ```text
//! Lexer Error: Unterminated string literal
//!   --> 10:9
//!    |
//!  9 | let a = 1
//! 10 | let b = "oops
//!    |         ^ string literal starts here
//!    = help: add the missing `"`
//! ```

use super::LexError;
use colored::Colorize;

/// A lexical error paired with the source it was found in
pub struct Diagnostic {
    error: LexError,
    source: String,
}

impl Diagnostic {
    /// Create a diagnostic with source code context
    pub fn with_source(error: LexError, source: &str) -> Self {
        Self {
            error,
            source: source.to_string(),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let location = self.error.location();
        let lines: Vec<&str> = self.source.lines().collect();
        let in_range = location.line >= 1 && location.line <= lines.len();

        // Gutter is as wide as the largest line number printed.
        let last_shown = if in_range {
            (location.line + 1).min(lines.len())
        } else {
            location.line
        };
        let width = last_shown.to_string().len();
        let gutter = " ".repeat(width);
        let bar = "|".blue().bold();

        let mut output = format!(
            "{}: {}\n",
            self.error.kind().red().bold(),
            self.error.message()
        );
        output.push_str(&format!("{}{} {}\n", gutter, "-->".blue().bold(), location));

        if !in_range {
            return output;
        }

        output.push_str(&format!("{} {}\n", gutter, bar));

        let error_idx = location.line - 1;
        for idx in error_idx.saturating_sub(1)..last_shown {
            let number = format!("{:>width$}", idx + 1, width = width);
            output.push_str(&format!("{} {} {}\n", number.blue().bold(), bar, lines[idx]));

            if idx == error_idx {
                output.push_str(&format!(
                    "{} {} {}\n",
                    gutter,
                    bar,
                    self.underline(lines[idx], location.column)
                ));
            }
        }

        output.push_str(&format!(
            "{} {} help: add the missing `{}`\n",
            gutter,
            "=".blue().bold(),
            self.error.closing_delimiter()
        ));

        output
    }

    /// Marker line under the opening delimiter
    ///
    /// Tabs before the column are kept so the marker lines up with the
    /// source as a terminal displays it.
    fn underline(&self, line: &str, column: usize) -> String {
        let padding: String = line
            .chars()
            .take(column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let marker = "^".repeat(self.error.opening_delimiter().len());
        let label = format!("{} starts here", self.error.construct());

        format!("{}{} {}", padding, marker.red().bold(), label.red().bold())
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
