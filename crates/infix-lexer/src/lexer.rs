//! Lexer for the infix expression language
//!
//! Converts source text into a sequence of tokens terminated by the
//! end-of-input sentinel. An unrecognized character stops tokenization.

use crate::token::{Token, TokenKind};
use infix_error::span::{Position, Span};
use unicode_xid::UnicodeXID;

/// The expression language Lexer
pub struct Lexer<'src> {
    /// Source text being analyzed
    source: &'src str,
    /// Source characters
    chars: Vec<char>,
    /// Current position (index in chars vector)
    pos: usize,
    /// Location of the next character
    position: Position,
    /// Source ID
    file_id: u32,
    /// Set once an unknown character has been emitted
    halted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text
    pub fn new(source: &'src str, file_id: u32) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
            position: Position::START,
            file_id,
            halted: false,
        }
    }

    /// Returns the current character without advancing
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Advances to the next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        self.position = self.position.after(ch);
        Some(ch)
    }

    /// Creates a span from a position to the current location
    fn make_span(&self, start: Position) -> Span {
        Span::new(start, self.position, self.file_id)
    }

    /// Source text between a start position and the current location
    fn text_from(&self, start: Position) -> &'src str {
        &self.source[start.offset..self.position.offset]
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads a number. The whole run of digits and dots is consumed; it is
    /// only a NUMBER with at most one dot and no dot at either end.
    fn read_number(&mut self) -> Token {
        let start = self.position;
        let mut dots = 0usize;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' {
                dots += 1;
                self.advance();
            } else {
                break;
            }
        }

        let text = self.text_from(start);
        let kind = if dots > 1 || text.starts_with('.') || text.ends_with('.') {
            TokenKind::Unknown
        } else {
            TokenKind::Number
        };

        Token::new(kind, text, self.make_span(start))
    }

    /// Reads an identifier or the `true`/`false` keywords
    fn read_identifier(&mut self) -> Token {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_xid_continue() {
                self.advance();
            } else {
                break;
            }
        }

        let text = self.text_from(start);
        let kind = TokenKind::keyword_from_str(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, self.make_span(start))
    }

    /// Reads an operator or delimiter. Characters that start no token, and
    /// halves of two-character operators, come back as UNKNOWN.
    fn read_operator(&mut self, ch: char) -> Token {
        let start = self.position;
        self.advance();

        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '+' => TokenKind::Add,
            '-' => TokenKind::Subtract,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '%' => TokenKind::Modulo,
            '=' => self.pair('=', TokenKind::Equal, TokenKind::Assign),
            '<' => self.pair('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.pair('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '!' => self.pair('=', TokenKind::NotEqual, TokenKind::Unknown),
            '|' => self.pair('|', TokenKind::LogicalOr, TokenKind::Unknown),
            '^' => self.pair('^', TokenKind::LogicalXor, TokenKind::Unknown),
            '&' => self.pair('&', TokenKind::LogicalAnd, TokenKind::Unknown),
            _ => TokenKind::Unknown,
        };

        Token::new(kind, self.text_from(start), self.make_span(start))
    }

    /// Consumes `second` and yields `matched`, or yields `single` untouched
    fn pair(&mut self, second: char, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance();
            matched
        } else {
            single
        }
    }

    /// Reads the next token, or `None` once tokenization is over
    pub fn next_token(&mut self) -> Option<Token> {
        if self.halted {
            return None;
        }

        self.skip_whitespace();

        let Some(ch) = self.peek() else {
            self.halted = true;
            return Some(Token::eof(Span::empty_at(self.position, self.file_id)));
        };

        if ch.is_ascii_digit() || ch == '.' {
            return Some(self.read_number());
        }

        if ch.is_xid_start() || ch == '_' {
            return Some(self.read_identifier());
        }

        let token = self.read_operator(ch);
        if token.kind == TokenKind::Unknown {
            tracing::debug!(
                line = token.line(),
                column = token.column(),
                text = %token.text,
                "unknown character, tokenization halted"
            );
            self.halted = true;
        }
        Some(token)
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        tracing::debug!(count = tokens.len(), "tokenized input");
        tokens
    }
}

/// Tokenizes source text and returns the tokens
pub fn tokenize(source: &str, file_id: u32) -> Vec<Token> {
    Lexer::new(source, file_id).tokenize()
}
