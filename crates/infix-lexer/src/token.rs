//! Tokens for the infix expression language
//!
//! Defines all token types that the lexer can produce.

use infix_error::span::Span;
use std::fmt;

/// Text carried by the end-of-input sentinel
pub const END_TEXT: &str = "END";

/// All token types of the expression language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================
    // Literals
    // =========================================
    /// Number literal: `42`, `3.14`
    Number,
    /// Identifier: `x`, `total_sum`
    Identifier,
    /// `true`
    BooleanTrue,
    /// `false`
    BooleanFalse,

    // =========================================
    // Assignment
    // =========================================
    /// `=`
    Assign,

    // =========================================
    // Logical operators
    // =========================================
    /// `||`
    LogicalOr,
    /// `^^`
    LogicalXor,
    /// `&&`
    LogicalAnd,

    // =========================================
    // Comparison operators
    // =========================================
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // =========================================
    // Arithmetic operators
    // =========================================
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,

    // =========================================
    // Delimiters
    // =========================================
    /// `(`
    LeftParen,
    /// `)`
    RightParen,

    // =========================================
    // Special
    // =========================================
    /// Unrecognized character or malformed number
    Unknown,
    /// End-of-input sentinel, text `END`
    Eof,
}

impl TokenKind {
    /// Returns the kind of a reserved word, if `word` is one
    pub fn keyword_from_str(word: &str) -> Option<TokenKind> {
        match word {
            "true" => Some(TokenKind::BooleanTrue),
            "false" => Some(TokenKind::BooleanFalse),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::BooleanTrue => "BOOLEAN_TRUE",
            TokenKind::BooleanFalse => "BOOLEAN_FALSE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalXor => "LOGICAL_XOR",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Add => "ADD",
            TokenKind::Subtract => "SUBTRACT",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulo => "MODULO",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A token with its source text and location. Tokens are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text (`END` for the sentinel)
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates the end-of-input sentinel
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, END_TEXT, span)
    }

    /// Line of the first character (1-indexed)
    pub fn line(&self) -> u32 {
        self.span.line()
    }

    /// Column of the first character (1-indexed)
    pub fn column(&self) -> u32 {
        self.span.column()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}:{}", self.kind, self.text, self.line(), self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infix_error::span::Position;

    #[test]
    fn test_keywords() {
        assert_eq!(TokenKind::keyword_from_str("true"), Some(TokenKind::BooleanTrue));
        assert_eq!(TokenKind::keyword_from_str("false"), Some(TokenKind::BooleanFalse));
        assert_eq!(TokenKind::keyword_from_str("True"), None);
    }

    #[test]
    fn test_eof_sentinel() {
        let token = Token::eof(Span::empty_at(Position::new(4, 1, 30), 0));
        assert!(token.is_eof());
        assert_eq!(token.text, "END");
        assert_eq!((token.line(), token.column()), (4, 1));
    }
}
