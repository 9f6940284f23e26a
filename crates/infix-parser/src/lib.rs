//! infix-parser - Parser for the infix expression language
//!
//! Converts a sequence of tokens into one AST (Abstract Syntax Tree) per
//! line-separated statement.
//!
//! # Example
//!
//! ```rust
//! use infix_lexer::Lexer;
//! use infix_parser::{parse, NodeType};
//!
//! let mut lexer = Lexer::new("x = 1 + 2 * 3\ny\n", 0);
//! let tokens = lexer.tokenize();
//!
//! let program = parse(tokens).expect("valid input");
//! assert_eq!(program.len(), 2);
//! assert_eq!(program.statements[0].node_type(), NodeType::Assign);
//! println!("{}", program.statements[0]); // (x = (1 + (2 * 3)))
//! ```

pub mod ast;
pub mod parser;
pub mod printer;

pub use ast::*;
pub use parser::{parse, Parser, MAX_PAREN_DEPTH};
pub use printer::format_tree;

/// Tokenizes and parses source text in one step
pub fn parse_source(source: &str, file_id: u32) -> infix_error::Result<Program> {
    let tokens = infix_lexer::tokenize(source, file_id);
    parse(tokens)
}
