//! Printers for parsed expressions
//!
//! `Display` renders an expression back to source form with every binary
//! operation parenthesized, so the grouping chosen by the parser is visible:
//! `1 + 2 * 3` prints as `(1 + (2 * 3))`.

use crate::ast::{BinOp, Expr};
use std::fmt::{self, Write};

/// Pending output of the parenthesized printer
enum Piece<'a> {
    Expr(&'a Expr),
    Op(BinOp),
    Close,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Expr(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Expr(Expr::Number(value, _)) => write!(f, "{}", value)?,
                Piece::Expr(Expr::BoolLit(value, _)) => write!(f, "{}", value)?,
                Piece::Expr(Expr::Ident(name, _)) => f.write_str(name)?,
                Piece::Expr(Expr::Binary { left, op, right, .. }) => {
                    f.write_str("(")?;
                    // Pushed in reverse of output order
                    pending.push(Piece::Close);
                    pending.push(Piece::Expr(right.as_ref()));
                    pending.push(Piece::Op(*op));
                    pending.push(Piece::Expr(left.as_ref()));
                }
                Piece::Op(op) => write!(f, " {} ", op)?,
                Piece::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }
}

/// Renders an expression as an indented tree of node types, one node per line
pub fn format_tree(expr: &Expr) -> String {
    let mut output = String::new();
    let mut pending = vec![(expr, 0usize)];

    while let Some((expr, depth)) = pending.pop() {
        let indent = "  ".repeat(depth);
        let _ = match expr {
            Expr::Number(value, _) => writeln!(output, "{}{} {}", indent, expr.node_type(), value),
            Expr::BoolLit(value, _) => writeln!(output, "{}{} {}", indent, expr.node_type(), value),
            Expr::Ident(name, _) => writeln!(output, "{}{} {}", indent, expr.node_type(), name),
            Expr::Binary { .. } => writeln!(output, "{}{}", indent, expr.node_type()),
        };

        // Reversed so the left operand is printed first
        for child in expr.children().into_iter().rev() {
            pending.push((child, depth + 1));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source;
    use pretty_assertions::assert_eq;

    fn render(source: &str) -> Vec<String> {
        parse_source(source, 0)
            .expect("source should parse")
            .iter()
            .map(|expr| expr.to_string())
            .collect()
    }

    #[test]
    fn test_parenthesized_output() {
        assert_eq!(render("1 + 2 * 3"), vec!["(1 + (2 * 3))"]);
        assert_eq!(render("(1 + 2) * 3"), vec!["((1 + 2) * 3)"]);
        assert_eq!(render("a = b = 5"), vec!["(a = (b = 5))"]);
    }

    #[test]
    fn test_literals_output() {
        assert_eq!(render("2.50\ntrue && false\nx"), vec!["2.5", "(true && false)", "x"]);
    }

    #[test]
    fn test_output_reparses_to_same_tree() {
        let source = "x = 8 - 3 - 2 >= 1 ^^ y != 4 % 2";
        let first = render(source);
        assert_eq!(render(&first[0]), first);
    }

    #[test]
    fn test_deep_left_chain_renders() {
        let terms = 100_000;
        let source = vec!["1"; terms].join(" + ");
        let program = parse_source(&source, 0).expect("chain should parse");

        let expected = format!("{}1{}", "(".repeat(terms - 1), " + 1)".repeat(terms - 1));
        assert!(program.statements[0].to_string() == expected);
    }

    #[test]
    fn test_deep_right_chain_renders() {
        let targets = 50_000;
        let source = format!("{}0", "a = ".repeat(targets));
        let program = parse_source(&source, 0).expect("chain should parse");

        let expected = format!("{}0{}", "(a = ".repeat(targets), ")".repeat(targets));
        assert!(program.statements[0].to_string() == expected);
    }

    #[test]
    fn test_debug_names_node_type() {
        let program = parse_source("a = 1 + b", 0).unwrap();
        assert_eq!(format!("{:?}", program.statements[0]), "ASSIGN (a = (1 + b))");
    }

    #[test]
    fn test_format_tree() {
        let program = parse_source("a = 1 + b", 0).unwrap();
        let tree = format_tree(&program.statements[0]);
        assert_eq!(
            tree,
            "ASSIGN\n  IDENTIFIER a\n  ADD\n    NUMBER 1\n    IDENTIFIER b\n"
        );
    }
}
