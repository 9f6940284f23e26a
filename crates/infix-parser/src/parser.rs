//! Parser for the infix expression language
//!
//! Converts a sequence of tokens into statement roots using recursive
//! descent, one method per precedence level (lowest first):
//!
//! | level          | operators            | associativity |
//! |----------------|----------------------|---------------|
//! | assignment     | `=`                  | right         |
//! | logical or     | `\|\|`               | left          |
//! | logical xor    | `^^`                 | left          |
//! | logical and    | `&&`                 | left          |
//! | equality       | `==` `!=`            | left          |
//! | relational     | `<` `<=` `>` `>=`    | left          |
//! | additive       | `+` `-`              | left          |
//! | multiplicative | `*` `/` `%`          | left          |
//! | factor         | literals, `( expr )` |               |
//!
//! Statements are separated by line breaks. A parse either returns every
//! statement or a single [`SyntaxError`]; partially built trees are torn
//! down before the error leaves the parser.
//!
//! Only parentheses recurse: left-associative levels fold in a loop and
//! assignment chains are collected before being folded to the right.

use crate::ast::*;
use infix_error::span::{Position, Span};
use infix_error::{Result, SyntaxError};
use infix_lexer::{Token, TokenKind};

/// Operand parser of the next-higher precedence level
type Operand = fn(&mut Parser) -> Result<Expr>;

/// Deepest parenthesis nesting accepted. Each level costs a round trip
/// through every precedence method, so the limit keeps deep input from
/// exhausting the stack.
pub const MAX_PAREN_DEPTH: usize = 256;

/// Parser for the infix expression language
pub struct Parser {
    /// Tokens to be parsed, never empty
    tokens: Vec<Token>,
    /// Current position
    pos: usize,
    /// Parentheses opened and not yet closed
    open_parens: usize,
}

impl Parser {
    /// Creates a new parser. The last token is where reading stops: the
    /// end-of-input sentinel, or the unknown token that halted the lexer.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token::eof(Span::empty_at(Position::START, 0)));
        }

        Self {
            tokens,
            pos: 0,
            open_parens: 0,
        }
    }

    // =========================================
    // Helpers
    // =========================================

    /// Returns the current token without advancing
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Checks if the current token is of the specified type
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Checks if we've reached the end-of-input sentinel
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Advances to the next token; reading past the last token stays on it
    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Builds the error for the current token
    fn error_at_current(&self) -> SyntaxError {
        let token = self.peek();
        SyntaxError::new(token.text.clone(), token.span)
    }

    // =========================================
    // Statements
    // =========================================

    /// Parses every line-separated statement
    pub fn parse(&mut self) -> Result<Program> {
        let mut program = Program::default();

        while !self.is_at_end() {
            let statement_line = self.peek().line();

            let statement = match self.expression() {
                Ok(statement) => statement,
                Err(err) => return Err(self.abort(err)),
            };

            // The statement ends where the next token starts a new line
            if self.is_at_end() || self.peek().line() > statement_line {
                tracing::trace!(line = statement_line, nodes = statement.node_count(), "parsed statement");
                program.statements.push(statement);
            } else {
                teardown(&mut Some(statement));
                return Err(self.abort(self.error_at_current()));
            }
        }

        Ok(program)
    }

    fn abort(&self, err: SyntaxError) -> SyntaxError {
        tracing::debug!(%err, "parse aborted");
        err
    }

    // =========================================
    // Expressions
    // =========================================

    /// Parses one expression
    pub fn expression(&mut self) -> Result<Expr> {
        self.assignment()
    }

    /// Parse assignment (right-associative, identifiers only on the left).
    /// `a = b = 5` collects the targets `a` and `b`, then folds from the
    /// right into `(a = (b = 5))`.
    fn assignment(&mut self) -> Result<Expr> {
        let mut targets = Vec::new();
        let mut value = self.logical_or()?;

        while self.check(TokenKind::Assign) {
            if !matches!(value, Expr::Ident(..)) {
                let err = self.error_at_current();
                teardown(&mut Some(value));
                return Err(err);
            }

            self.advance();
            targets.push(value);
            value = self.logical_or()?;
        }

        while let Some(target) = targets.pop() {
            value = Expr::binary(target, BinOp::Assign, value);
        }
        Ok(value)
    }

    fn logical_or(&mut self) -> Result<Expr> {
        self.left_assoc(Self::logical_xor, &[BinOp::Or])
    }

    fn logical_xor(&mut self) -> Result<Expr> {
        self.left_assoc(Self::logical_and, &[BinOp::Xor])
    }

    fn logical_and(&mut self) -> Result<Expr> {
        self.left_assoc(Self::equality, &[BinOp::And])
    }

    fn equality(&mut self) -> Result<Expr> {
        self.left_assoc(Self::relational, &[BinOp::Eq, BinOp::Ne])
    }

    fn relational(&mut self) -> Result<Expr> {
        self.left_assoc(Self::additive, &[BinOp::Lt, BinOp::Le, BinOp::Gt, BinOp::Ge])
    }

    fn additive(&mut self) -> Result<Expr> {
        self.left_assoc(Self::multiplicative, &[BinOp::Add, BinOp::Sub])
    }

    fn multiplicative(&mut self) -> Result<Expr> {
        self.left_assoc(Self::factor, &[BinOp::Mul, BinOp::Div, BinOp::Mod])
    }

    /// Returns the current token's operator if it belongs to `level`
    fn operator_in(&self, level: &[BinOp]) -> Option<BinOp> {
        BinOp::from_token(self.peek().kind).filter(|op| level.contains(op))
    }

    /// Folds `operand (op operand)*` into a left-deep tree. If an operand
    /// fails, the tree built so far is torn down before the error returns.
    fn left_assoc(&mut self, operand: Operand, level: &[BinOp]) -> Result<Expr> {
        let mut left = operand(self)?;

        while let Some(op) = self.operator_in(level) {
            self.advance();
            match operand(self) {
                Ok(right) => left = Expr::binary(left, op, right),
                Err(err) => {
                    teardown(&mut Some(left));
                    return Err(err);
                }
            }
        }

        Ok(left)
    }

    /// Parse numbers, identifiers, booleans and parenthesized expressions
    fn factor(&mut self) -> Result<Expr> {
        let token = self.peek().clone();

        let expr = match token.kind {
            TokenKind::Number => {
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| SyntaxError::new(token.text.clone(), token.span))?;
                Expr::Number(value, token.span)
            }
            TokenKind::Identifier => Expr::Ident(token.text, token.span),
            TokenKind::BooleanTrue => Expr::BoolLit(true, token.span),
            TokenKind::BooleanFalse => Expr::BoolLit(false, token.span),
            TokenKind::LeftParen => {
                if self.open_parens == MAX_PAREN_DEPTH {
                    tracing::debug!(limit = MAX_PAREN_DEPTH, "parenthesis nesting too deep");
                    return Err(self.error_at_current());
                }

                self.open_parens += 1;
                self.advance();
                let inner = self.expression();
                self.open_parens -= 1;

                let inner = inner?;
                if !self.check(TokenKind::RightParen) {
                    let err = self.error_at_current();
                    teardown(&mut Some(inner));
                    return Err(err);
                }
                inner
            }
            _ => return Err(self.error_at_current()),
        };

        self.advance();
        Ok(expr)
    }
}

/// Parses a token sequence into statement roots
pub fn parse(tokens: Vec<Token>) -> Result<Program> {
    Parser::new(tokens).parse()
}
