//! infix-error - Error reporting for the infix expression language
//!
//! This crate provides source positions, the [`SyntaxError`] raised by the
//! parser, and a renderer that prints errors with a source snippet in the
//! style of the Rust compiler.
//!
//! # Example
//!
//! ```rust
//! use infix_error::{DiagnosticRenderer, SourceCache, SyntaxError};
//! use infix_error::span::{Position, Span};
//!
//! let mut cache = SourceCache::new();
//! let file_id = cache.add("example.txt", "1 2");
//!
//! let span = Span::new(Position::new(1, 3, 2), Position::new(1, 4, 3), file_id);
//! let err = SyntaxError::new("2", span);
//!
//! let renderer = DiagnosticRenderer::new(&cache);
//! println!("{}", renderer.render(&err.to_diagnostic()));
//! ```

pub mod diagnostic;
pub mod span;
pub mod syntax;

pub use diagnostic::{Diagnostic, DiagnosticRenderer, ErrorCode, Label, SourceCache, SourceFile};
pub use span::{Position, Span};
pub use syntax::SyntaxError;

/// Result type for operations that may fail with a syntax error
pub type Result<T> = std::result::Result<T, SyntaxError>;
