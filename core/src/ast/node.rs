use crate::diagnostic::Seq;
use crate::lexer::Token;
use crate::location::Location;

use super::kind::{ExprKind, StatementKind};

/// A parse tree node: its kind, where it starts, and the sequence number it
/// was given when the parser finished recognizing it.
#[derive(Debug, Clone, PartialEq)]
pub struct AstNode<K> {
    pub kind: K,
    pub location: Location,
    seq: Seq,
}

pub type Ident = AstNode<Token>;
pub type Expr = AstNode<ExprKind>;
pub type Statement = AstNode<StatementKind>;

impl<K> AstNode<K> {
    pub fn new(kind: K, location: Location, seq: Seq) -> Self {
        AstNode {
            kind,
            location,
            seq,
        }
    }

    pub fn seq(&self) -> Seq {
        self.seq
    }
}

impl Expr {
    /// The token that stands for this expression in diagnostics: the first
    /// value of the chain, or `None` for an unparsed operand.
    pub fn representative(&self) -> Option<&Token> {
        match &self.kind {
            ExprKind::Value(token) => Some(token),
            ExprKind::Unary { operand, .. } => operand.representative(),
            ExprKind::Binary { left, .. } => left.representative(),
            ExprKind::Group(inner) => inner.representative(),
            ExprKind::Error => None,
        }
    }
}
