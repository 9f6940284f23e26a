//! AST - Abstract Syntax Tree for the infix expression language

use infix_error::Span;
use infix_lexer::TokenKind;
use std::fmt;

/// Parsed input: one root per line-separated statement
#[derive(Debug, Default)]
pub struct Program {
    pub statements: Vec<Expr>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expr> {
        self.statements.iter()
    }

    /// Hands the statement roots over to the caller
    pub fn into_statements(mut self) -> Vec<Expr> {
        std::mem::take(&mut self.statements)
    }

    /// Tears down every statement root. Calling it again is a no-op.
    pub fn teardown(&mut self) {
        for statement in self.statements.drain(..) {
            teardown(&mut Some(statement));
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Expressions
///
/// Rendering and teardown walk the tree with an explicit stack. Dropping a
/// lone `Expr` outside a [`Program`] is recursive; hand deep trees to
/// [`teardown`] instead.
pub enum Expr {
    /// Number literal: `42`, `2.5`
    Number(f64, Span),
    /// `true` / `false`
    BoolLit(bool, Span),
    /// Variable reference
    Ident(String, Span),
    /// Binary operation, assignment included: `left op right`
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    /// Builds a binary node spanning both operands
    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Self {
        let span = left.span().to(right.span());
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Expr::Number(..) => NodeType::Number,
            Expr::BoolLit(..) => NodeType::BooleanLiteral,
            Expr::Ident(..) => NodeType::Identifier,
            Expr::Binary { op, .. } => op.node_type(),
        }
    }

    /// Numeric payload: the number, or 1/0 for booleans
    pub fn value(&self) -> Option<f64> {
        match self {
            Expr::Number(value, _) => Some(*value),
            Expr::BoolLit(value, _) => Some(if *value { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Name payload of an identifier
    pub fn name(&self) -> Option<&str> {
        match self {
            Expr::Ident(name, _) => Some(name),
            _ => None,
        }
    }

    /// Operands in source order: none for leaves, left then right otherwise
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            pending.extend(expr.children());
        }
        count
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Number(_, span) | Expr::BoolLit(_, span) | Expr::Ident(_, span) => *span,
            Expr::Binary { span, .. } => *span,
        }
    }
}

/// Node type followed by the parenthesized rendering: `ADD (1 + 2)`
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.node_type(), self)
    }
}

/// Tears down a tree without recursion, so arbitrarily deep trees are safe.
/// The root is left empty; an already-empty root is a no-op.
pub fn teardown(root: &mut Option<Expr>) {
    let Some(expr) = root.take() else {
        return;
    };

    let mut pending = vec![expr];
    while let Some(expr) = pending.pop() {
        if let Expr::Binary { left, right, .. } = expr {
            pending.push(*left);
            pending.push(*right);
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Assign,
    Or,
    Xor,
    And,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    /// Maps an operator token to its binary operator
    pub fn from_token(kind: TokenKind) -> Option<BinOp> {
        let op = match kind {
            TokenKind::Assign => BinOp::Assign,
            TokenKind::LogicalOr => BinOp::Or,
            TokenKind::LogicalXor => BinOp::Xor,
            TokenKind::LogicalAnd => BinOp::And,
            TokenKind::Equal => BinOp::Eq,
            TokenKind::NotEqual => BinOp::Ne,
            TokenKind::Less => BinOp::Lt,
            TokenKind::LessEqual => BinOp::Le,
            TokenKind::Greater => BinOp::Gt,
            TokenKind::GreaterEqual => BinOp::Ge,
            TokenKind::Add => BinOp::Add,
            TokenKind::Subtract => BinOp::Sub,
            TokenKind::Multiply => BinOp::Mul,
            TokenKind::Divide => BinOp::Div,
            TokenKind::Modulo => BinOp::Mod,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Assign => "=",
            BinOp::Or => "||",
            BinOp::Xor => "^^",
            BinOp::And => "&&",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            BinOp::Assign => NodeType::Assign,
            BinOp::Or => NodeType::LogicalOr,
            BinOp::Xor => NodeType::LogicalXor,
            BinOp::And => NodeType::LogicalAnd,
            BinOp::Eq => NodeType::Equal,
            BinOp::Ne => NodeType::NotEqual,
            BinOp::Lt => NodeType::LessThan,
            BinOp::Le => NodeType::LessEqual,
            BinOp::Gt => NodeType::GreaterThan,
            BinOp::Ge => NodeType::GreaterEqual,
            BinOp::Add => NodeType::Add,
            BinOp::Sub => NodeType::Subtract,
            BinOp::Mul => NodeType::Multiply,
            BinOp::Div => NodeType::Divide,
            BinOp::Mod => NodeType::Modulo,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node classification of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Number,
    BooleanLiteral,
    Identifier,
    Assign,
    LogicalOr,
    LogicalXor,
    LogicalAnd,
    Equal,
    NotEqual,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Number => "NUMBER",
            NodeType::BooleanLiteral => "BOOLEAN_LITERAL",
            NodeType::Identifier => "IDENTIFIER",
            NodeType::Assign => "ASSIGN",
            NodeType::LogicalOr => "LOGICAL_OR",
            NodeType::LogicalXor => "LOGICAL_XOR",
            NodeType::LogicalAnd => "LOGICAL_AND",
            NodeType::Equal => "EQUAL",
            NodeType::NotEqual => "NOT_EQUAL",
            NodeType::LessThan => "LESS_THAN",
            NodeType::LessEqual => "LESS_EQUAL",
            NodeType::GreaterThan => "GREATER_THAN",
            NodeType::GreaterEqual => "GREATER_EQUAL",
            NodeType::Add => "ADD",
            NodeType::Subtract => "SUBTRACT",
            NodeType::Multiply => "MULTIPLY",
            NodeType::Divide => "DIVIDE",
            NodeType::Modulo => "MODULO",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: f64) -> Expr {
        Expr::Number(value, Span::default())
    }

    #[test]
    fn test_payloads() {
        assert_eq!(num(2.5).value(), Some(2.5));
        assert_eq!(Expr::BoolLit(true, Span::default()).value(), Some(1.0));
        assert_eq!(Expr::BoolLit(false, Span::default()).value(), Some(0.0));

        let ident = Expr::Ident("x".into(), Span::default());
        assert_eq!(ident.name(), Some("x"));
        assert_eq!(ident.value(), None);
        assert_eq!(ident.node_type(), NodeType::Identifier);
    }

    #[test]
    fn test_binary_children_in_order() {
        let expr = Expr::binary(num(1.0), BinOp::Sub, num(2.0));
        assert_eq!(expr.node_type(), NodeType::Subtract);

        let children = expr.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].value(), Some(1.0));
        assert_eq!(children[1].value(), Some(2.0));
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut root = Some(Expr::binary(num(1.0), BinOp::Add, num(2.0)));
        teardown(&mut root);
        assert!(root.is_none());
        teardown(&mut root);
        assert!(root.is_none());
    }

    #[test]
    fn test_teardown_deep_tree() {
        let mut expr = num(0.0);
        for i in 1..200_000 {
            expr = Expr::binary(expr, BinOp::Add, num(i as f64));
        }
        let mut root = Some(expr);
        teardown(&mut root);
        assert!(root.is_none());
    }

    #[test]
    fn test_program_teardown() {
        let mut program = Program {
            statements: vec![num(1.0), Expr::binary(num(2.0), BinOp::Mul, num(3.0))],
        };
        assert_eq!(program.len(), 2);

        program.teardown();
        assert!(program.is_empty());
        program.teardown();
        assert!(program.is_empty());
    }

    #[test]
    fn test_operator_mapping() {
        assert_eq!(BinOp::from_token(TokenKind::LessEqual), Some(BinOp::Le));
        assert_eq!(BinOp::from_token(TokenKind::LeftParen), None);
        assert_eq!(BinOp::Le.node_type(), NodeType::LessEqual);
        assert_eq!(BinOp::Xor.as_str(), "^^");
    }
}
