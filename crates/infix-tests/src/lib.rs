//! Integration tests for the infix expression language
//!
//! This crate drives the complete pipeline end to end:
//! Source → Lexer → Parser → Printer

use infix_error::SyntaxError;
use infix_lexer::Lexer;
use infix_parser::Parser;

/// Result of running source text through the pipeline
#[derive(Debug)]
pub struct PipelineResult {
    /// Whether every statement parsed
    pub success: bool,
    /// Number of tokens produced by the lexer, sentinel included
    pub token_count: usize,
    /// Each statement rendered by the parenthesized printer
    pub statements: Vec<String>,
    /// The syntax error, if parsing failed
    pub error: Option<SyntaxError>,
}

/// Runs source text through lexer, parser and printer
pub fn run_pipeline(source: &str) -> PipelineResult {
    let tokens = Lexer::new(source, 0).tokenize();
    let token_count = tokens.len();

    let mut parser = Parser::new(tokens);
    match parser.parse() {
        Ok(program) => {
            assert!(parser.is_at_end(), "parser stopped before the end of input");
            PipelineResult {
                success: true,
                token_count,
                statements: program.iter().map(|stmt| stmt.to_string()).collect(),
                error: None,
            }
        }
        Err(err) => PipelineResult {
            success: false,
            token_count,
            statements: Vec::new(),
            error: Some(err),
        },
    }
}

/// Asserts that source parses and returns the rendered statements
pub fn assert_parses(source: &str) -> Vec<String> {
    let result = run_pipeline(source);
    if let Some(err) = result.error {
        panic!("Expected source to parse, but got: {}", err);
    }
    result.statements
}

/// Asserts that source renders to exactly the expected statements
pub fn assert_formats(source: &str, expected: &[&str]) {
    let statements = assert_parses(source);
    if statements != expected {
        panic!(
            "Unexpected output for {:?}\n  expected: {:?}\n  got:      {:?}",
            source, expected, statements
        );
    }
}

/// Asserts that source fails with exactly the expected message
pub fn assert_syntax_error(source: &str, expected: &str) -> SyntaxError {
    let result = run_pipeline(source);
    let Some(err) = result.error else {
        panic!("Expected a syntax error, but source parsed to {:?}", result.statements);
    };
    if err.to_string() != expected {
        panic!("Expected error {:?}, got {:?}", expected, err.to_string());
    }
    err
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use infix_error::{DiagnosticRenderer, SourceCache};
    use infix_parser::{parse_source, teardown, NodeType};
    use pretty_assertions::assert_eq;

    // =========================================
    // Grammar
    // =========================================

    #[test]
    fn test_left_associativity() {
        assert_formats("8 - 3 - 2", &["((8 - 3) - 2)"]);
        assert_formats("a && b && c", &["((a && b) && c)"]);
        assert_formats("1 < 2 == 3 >= 4", &["((1 < 2) == (3 >= 4))"]);
    }

    #[test]
    fn test_right_associative_assignment() {
        assert_formats("a = b = 5", &["(a = (b = 5))"]);
    }

    #[test]
    fn test_precedence() {
        assert_formats("1 + 2 * 3", &["(1 + (2 * 3))"]);
        assert_formats("x = 1 + 2 > 3 || y", &["(x = (((1 + 2) > 3) || y))"]);
        assert_formats("a || b && c ^^ d", &["(a || ((b && c) ^^ d))"]);
    }

    #[test]
    fn test_parentheses_preserve_grouping() {
        assert_formats("(1 + 2) * 3", &["((1 + 2) * 3)"]);
        assert_formats("((((7))))", &["7"]);
        assert_formats("2 * (3 % (4 - 1))", &["(2 * (3 % (4 - 1)))"]);
    }

    #[test]
    fn test_booleans_and_identifiers() {
        assert_formats("flag = true ^^ false", &["(flag = (true ^^ false))"]);
    }

    // =========================================
    // Statements
    // =========================================

    #[test]
    fn test_one_root_per_line() {
        assert_formats(
            "x = 1\ny = x * 2\n\nx + y\n",
            &["(x = 1)", "(y = (x * 2))", "(x + y)"],
        );
    }

    #[test]
    fn test_same_line_requires_operator() {
        assert_syntax_error("1 2", "Unexpected token at line 1 column 3: 2");
        assert_formats("1\n2", &["1", "2"]);
    }

    #[test]
    fn test_whole_token_stream_consumed() {
        let result = run_pipeline("a = 1\nb = a + 2\n");
        assert!(result.success);
        assert_eq!(result.token_count, 9);
        assert_eq!(result.statements.len(), 2);
    }

    #[test]
    fn test_crlf_line_breaks() {
        assert_formats("a = 1\r\nb = 2\r\n", &["(a = 1)", "(b = 2)"]);
    }

    // =========================================
    // Errors
    // =========================================

    #[test]
    fn test_unmatched_parenthesis() {
        let err = assert_syntax_error("(1 + 2", "Unexpected token at line 1 column 7: END");
        assert!(err.at_end_of_input());

        assert_syntax_error("(1 + 2\n", "Unexpected token at line 2 column 1: END");
    }

    #[test]
    fn test_assignment_to_literal() {
        assert_syntax_error("5 = 3", "Unexpected token at line 1 column 3: =");
        assert_syntax_error("a + 1 = 3", "Unexpected token at line 1 column 7: =");
        // Parentheses leave no node behind, so a grouped identifier is a target
        assert_formats("(a) = 3", &["(a = 3)"]);
    }

    #[test]
    fn test_malformed_number() {
        assert_syntax_error("1.2.3", "Unexpected token at line 1 column 1: 1.2.3");
        assert_syntax_error("x = .5", "Unexpected token at line 1 column 5: .5");
    }

    #[test]
    fn test_unknown_character() {
        assert_syntax_error("a = 1\nb = @", "Unexpected token at line 2 column 5: @");
        assert_syntax_error("a ! b", "Unexpected token at line 1 column 3: !");
    }

    #[test]
    fn test_error_after_valid_statements_returns_nothing() {
        let result = run_pipeline("a = 1\nb = 2\nc = (3");
        assert!(!result.success);
        assert!(result.statements.is_empty());
        assert_eq!(result.error.map(|e| e.line), Some(3));
    }

    #[test]
    fn test_failed_parse_yields_no_program() {
        let mut parser = Parser::new(Lexer::new("a = 1\nb = 2\nc d", 0).tokenize());
        let Err(err) = parser.parse() else {
            panic!("a second expression on the line should fail the parse");
        };
        assert_eq!(err.to_string(), "Unexpected token at line 3 column 3: d");
        // Parsing stopped on the offending token
        assert!(!parser.is_at_end());
    }

    #[test]
    fn test_long_chain_round_trip() {
        let chain = vec!["1"; 100_000].join(" + ");
        let statements = assert_parses(&chain);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].starts_with("((((("));
        assert!(statements[0].contains("(1 + 1) + 1)"));
        assert!(statements[0].ends_with(" + 1) + 1)"));
    }

    #[test]
    fn test_error_renders_with_source_snippet() {
        let source = "total = 4\ntotal 2\n";
        let err = parse_source(source, 0).unwrap_err();

        let mut cache = SourceCache::new();
        cache.add("sum.txt", source);
        let output = DiagnosticRenderer::new(&cache)
            .without_colors()
            .render(&err.to_diagnostic());

        assert!(output.starts_with("error[EP001]: Unexpected token at line 2 column 7: 2"));
        assert!(output.contains("sum.txt:2:7"));
        assert!(output.contains("total 2"));
    }

    // =========================================
    // Teardown
    // =========================================

    #[test]
    fn test_teardown_of_parsed_program() {
        let mut program = parse_source("a = (1 + 2) * 3\nb", 0).unwrap();
        assert_eq!(program.statements[0].node_type(), NodeType::Assign);
        assert_eq!(program.statements[0].node_count(), 7);

        program.teardown();
        assert!(program.is_empty());
        program.teardown();
        assert!(program.is_empty());
    }

    #[test]
    fn test_teardown_of_empty_root_is_noop() {
        let mut root = None;
        teardown(&mut root);
        assert!(root.is_none());
    }
}
