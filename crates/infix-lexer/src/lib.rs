//! infix-lexer - Tokenizer for the infix expression language
//!
//! This crate converts source text into a sequence of tokens.
//!
//! # Features
//!
//! - Numbers with an optional decimal part (`42`, `3.14`)
//! - Identifiers (Unicode XID) and the `true` / `false` literals
//! - Arithmetic, comparison, logical (`||`, `^^`, `&&`) and assignment operators
//! - Line/column tracking for every token
//! - Fail-fast: an unrecognized character ends the token stream
//!
//! # Example
//!
//! ```rust
//! use infix_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("x = 1 + 2\n", 0);
//! let tokens = lexer.tokenize();
//!
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind, END_TEXT};
