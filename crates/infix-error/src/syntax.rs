//! SyntaxError - the single failure kind of the lexer/parser core

use crate::diagnostic::{Diagnostic, ErrorCode};
use crate::span::Span;
use thiserror::Error;

/// An unexpected token, reported at the position of the offending token.
///
/// Every parse failure maps to this one error: unexpected tokens in operand
/// position, assignment to something other than an identifier, unclosed
/// parentheses, malformed numbers and leftover tokens on a statement's line.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unexpected token at line {line} column {column}: {text}")]
pub struct SyntaxError {
    /// Line of the offending token (1-indexed)
    pub line: u32,
    /// Column of the offending token (1-indexed)
    pub column: u32,
    /// Source text of the offending token (`END` for end of input)
    pub text: String,
    /// Full location of the offending token
    pub span: Span,
}

impl SyntaxError {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            line: span.line(),
            column: span.column(),
            text: text.into(),
            span,
        }
    }

    /// Returns true if the error was raised on the end-of-input sentinel
    pub fn at_end_of_input(&self) -> bool {
        self.span.is_empty() && self.text == "END"
    }

    /// Converts the error into a renderable diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = if self.at_end_of_input() {
            "input ended here".to_string()
        } else {
            format!("unexpected `{}`", self.text)
        };

        let diagnostic = Diagnostic::error(self.to_string())
            .with_code(ErrorCode::UNEXPECTED_TOKEN)
            .with_label(self.span, label);

        if self.at_end_of_input() {
            diagnostic.with_note("the input ended before the expression was complete")
        } else {
            diagnostic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_message_format() {
        let span = Span::new(Position::new(2, 3, 7), Position::new(2, 4, 8), 0);
        let err = SyntaxError::new(")", span);
        assert_eq!(err.to_string(), "Unexpected token at line 2 column 3: )");
    }

    #[test]
    fn test_end_of_input_label() {
        let err = SyntaxError::new("END", Span::empty_at(Position::new(1, 7, 6), 0));
        assert!(err.at_end_of_input());

        let diagnostic = err.to_diagnostic();
        assert_eq!(diagnostic.code, Some(ErrorCode::UNEXPECTED_TOKEN));
        assert_eq!(diagnostic.labels[0].message, "input ended here");
        assert_eq!(diagnostic.notes.len(), 1);
    }
}
