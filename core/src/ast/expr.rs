//! file: core/src/ast/expr.rs
//! description: expression productions of the grammar engine.
//!
//! Two left-associative precedence tiers (`+ -` over `* /`), an optional
//! unary sign on each factor, and parenthesized sub-expressions. A factor
//! that cannot be recognized becomes `ExprKind::Error`.
//!
use crate::lexer::{Punct, TokenKind};

use super::kind::{BinaryOperator, Condition, ExprKind, RelationalOperator, UnaryOperator};
use super::node::{AstNode, Expr};
use super::parser::Parser;
use super::recovery::{FACTOR_START, Nonterminal, RELATIONAL_OPERATORS};

impl Parser {
    /// `<Expression>`: `<Term>` {(`+` | `-`) `<Term>`}.
    pub(super) fn parse_expression(&mut self) -> Expr {
        let mut node = self.parse_term();
        while let Some(op) = self.additive_operator() {
            let location = self.bump().location;
            let right = self.parse_term();
            node = self.finish(
                ExprKind::Binary {
                    left: Box::new(node),
                    op,
                    right: Box::new(right),
                },
                location,
            );
        }
        node
    }

    /// `<Term>`: `<Factor>` {(`*` | `/`) `<Factor>`}.
    fn parse_term(&mut self) -> Expr {
        let mut node = self.parse_factor();
        while let Some(op) = self.multiplicative_operator() {
            let location = self.bump().location;
            let right = self.parse_factor();
            node = self.finish(
                ExprKind::Binary {
                    left: Box::new(node),
                    op,
                    right: Box::new(right),
                },
                location,
            );
        }
        node
    }

    fn additive_operator(&self) -> Option<BinaryOperator> {
        match self.peek().kind {
            TokenKind::Punct(Punct::Plus) => Some(BinaryOperator::Add),
            TokenKind::Punct(Punct::Minus) => Some(BinaryOperator::Sub),
            _ => None,
        }
    }

    fn multiplicative_operator(&self) -> Option<BinaryOperator> {
        match self.peek().kind {
            TokenKind::Punct(Punct::Star) => Some(BinaryOperator::Mul),
            TokenKind::Punct(Punct::Slash) => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    /// `<Factor>`: [`+` | `-`] (`<Value>` | `(` `<Expression>` `)`).
    fn parse_factor(&mut self) -> Expr {
        let location = self.peek().location;
        let sign = match self.peek().kind {
            TokenKind::Punct(Punct::Plus) => Some(UnaryOperator::Plus),
            TokenKind::Punct(Punct::Minus) => Some(UnaryOperator::Minus),
            _ => None,
        };

        let Some(op) = sign else {
            return self.parse_primary();
        };
        self.bump();
        let operand = self.parse_primary();
        self.finish(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            location,
        )
    }

    fn parse_primary(&mut self) -> Expr {
        let location = self.peek().location;
        match self.peek().kind {
            // <Value>
            TokenKind::Identifier | TokenKind::IntegerLiteral | TokenKind::RealLiteral => {
                let token = self.bump();
                self.finish(ExprKind::Value(token), location)
            }
            TokenKind::Punct(Punct::LParen) => {
                self.bump();
                let inner = self.parse_expression();
                self.expect(TokenKind::Punct(Punct::RParen), Nonterminal::Factor);
                self.finish(ExprKind::Group(Box::new(inner)), location)
            }
            _ => {
                self.syntax_error(Nonterminal::Factor);
                self.synchronize(Nonterminal::Factor, &[]);
                // Skipping stopped on something that starts an operand: take
                // it as the operand that was meant here.
                if self.at_any(FACTOR_START) {
                    return self.parse_factor();
                }
                self.error_expr(location)
            }
        }
    }

    /// `<BooleanExpr>`: `<Expression>` (`<` | `=` | `>`) `<Expression>`.
    pub(super) fn parse_condition(&mut self) -> AstNode<Condition> {
        let location = self.peek().location;
        let left = self.parse_expression();
        let op = self
            .expect_any(RELATIONAL_OPERATORS, Nonterminal::BooleanExpr)
            .and_then(|token| RelationalOperator::from_token(&token));
        let right = self.parse_expression();

        self.finish(Condition { left, op, right }, location)
    }
}
