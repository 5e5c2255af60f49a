//! file: core/src/ast/kind.rs
//! description: parse tree node kinds and operator enums.
//!
//! The tree mirrors the PAL productions. Malformed input still yields a
//! complete tree: a construct that could not be recognized becomes
//! `ExprKind::Error` or a missing optional part, and the semantic walker
//! treats it as already reported.
//!
use std::fmt;

use super::node::{AstNode, Expr, Ident, Statement};
use crate::lexer::{Punct, Token, TokenKind};
use crate::location::Location;

/// The declarable types, as written after `AS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclType {
    Integer,
    Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,  // +
    Minus, // -
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOperator {
    Less,    // <
    Equal,   // =
    Greater, // >
}

impl RelationalOperator {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token.kind {
            TokenKind::Punct(Punct::Less) => Some(RelationalOperator::Less),
            TokenKind::Punct(Punct::Equals) => Some(RelationalOperator::Equal),
            TokenKind::Punct(Punct::Greater) => Some(RelationalOperator::Greater),
            _ => None,
        }
    }
}

/// Root of the tree: `PROGRAM name WITH <VarDecls> IN <Statements> END`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: Option<Token>,
    pub declarations: Vec<AstNode<Declaration>>,
    pub statements: Vec<Statement>,
    pub location: Location,
}

/// One `<IdentList> AS <Type>` group. `ty` is `None` when the type was missing
/// or not a type keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub idents: Vec<Ident>,
    pub ty: Option<DeclType>,
}

/// `<Expression> (< | = | >) <Expression>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub left: Expr,
    pub op: Option<RelationalOperator>,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Assignment {
        target: Ident,
        value: Expr,
    },
    Loop {
        condition: AstNode<Condition>,
        body: Vec<Statement>,
    },
    Conditional {
        condition: AstNode<Condition>,
        then_body: Vec<Statement>,
        else_body: Option<Vec<Statement>>,
    },
    Input {
        targets: Vec<Ident>,
    },
    Output {
        values: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Identifier, integer literal or real literal.
    Value(Token),
    Unary {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    Group(Box<Expr>),
    /// An operand that failed to parse; the syntax error is already recorded.
    Error,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Assignment { .. } => write!(f, "Assignment"),
            StatementKind::Loop { .. } => write!(f, "Loop"),
            StatementKind::Conditional { .. } => write!(f, "Conditional"),
            StatementKind::Input { .. } => write!(f, "Input"),
            StatementKind::Output { .. } => write!(f, "Output"),
        }
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Value(token) => write!(f, "{}", token.value),
            ExprKind::Unary { op, operand } => {
                let sign = match op {
                    UnaryOperator::Plus => "+",
                    UnaryOperator::Minus => "-",
                };
                write!(f, "{}{}", sign, operand.kind)
            }
            ExprKind::Binary { left, op, right } => {
                let op = match op {
                    BinaryOperator::Add => "+",
                    BinaryOperator::Sub => "-",
                    BinaryOperator::Mul => "*",
                    BinaryOperator::Div => "/",
                };
                write!(f, "({} {} {})", left.kind, op, right.kind)
            }
            ExprKind::Group(inner) => write!(f, "{}", inner.kind),
            ExprKind::Error => write!(f, "<error>"),
        }
    }
}
