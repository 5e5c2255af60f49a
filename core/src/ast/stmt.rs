//! file: core/src/ast/stmt.rs
//! description: statement productions of the grammar engine.
//!
//! Statements are dispatched on the lookahead token. Tokens that cannot
//! start a statement are reported once as a `<Statement>` error and skipped
//! up to the next statement start or block terminator.
//!
use crate::lexer::{Keyword, Punct, TokenKind};

use super::kind::StatementKind;
use super::node::Statement;
use super::parser::Parser;
use super::recovery::{BLOCK_END, Nonterminal, STATEMENT_START};

impl Parser {
    /// `<Statements>`: statements up to (not including) a token in `stop_at`.
    /// With `require_one`, an empty sequence is itself an error.
    pub(super) fn parse_statements(
        &mut self,
        stop_at: &[TokenKind],
        require_one: bool,
    ) -> Vec<Statement> {
        let mut statements = Vec::new();
        while !self.at_end() && !self.at_any(stop_at) {
            if self.at_any(STATEMENT_START) {
                statements.push(self.parse_statement());
            } else {
                self.syntax_error(Nonterminal::Statement);
                // The offending token may itself be a sync token (a stray
                // block terminator), so always step over it first.
                self.discard();
                self.synchronize(Nonterminal::Statement, &[]);
            }
        }

        if require_one && statements.is_empty() {
            self.syntax_error(Nonterminal::Statement);
        }
        statements
    }

    fn parse_statement(&mut self) -> Statement {
        match self.peek().kind {
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::Keyword(Keyword::Until) => self.parse_loop(),
            TokenKind::Keyword(Keyword::If) => self.parse_conditional(),
            _ => self.parse_io(),
        }
    }

    /// `<Assignment>`: identifier `=` `<Expression>`.
    fn parse_assignment(&mut self) -> Statement {
        let target_token = self.bump();
        let location = target_token.location;
        let target = self.leaf(target_token);

        let value = if self
            .expect(TokenKind::Punct(Punct::Equals), Nonterminal::Assignment)
            .is_some()
        {
            self.parse_expression()
        } else {
            // Without `=` whatever follows belongs to the next statement.
            self.error_expr(location)
        };

        self.finish(StatementKind::Assignment { target, value }, location)
    }

    /// `<Loop>`: `UNTIL` `<BooleanExpr>` `REPEAT` `<Statements>` `ENDLOOP`.
    fn parse_loop(&mut self) -> Statement {
        let location = self.bump().location;
        let condition = self.parse_condition();
        self.expect(TokenKind::Keyword(Keyword::Repeat), Nonterminal::Loop);
        let body = self.parse_statements(BLOCK_END, false);
        self.expect(TokenKind::Keyword(Keyword::EndLoop), Nonterminal::Loop);

        self.finish(StatementKind::Loop { condition, body }, location)
    }

    /// `<Conditional>`: `IF` `<BooleanExpr>` `THEN` `<Statements>`
    /// [`ELSE` `<Statements>`] `ENDIF`.
    fn parse_conditional(&mut self) -> Statement {
        let location = self.bump().location;
        let condition = self.parse_condition();
        self.expect(TokenKind::Keyword(Keyword::Then), Nonterminal::Conditional);
        let then_body = self.parse_statements(BLOCK_END, false);

        let else_body = if self.eat(TokenKind::Keyword(Keyword::Else)).is_some() {
            Some(self.parse_statements(BLOCK_END, false))
        } else {
            None
        };
        self.expect(TokenKind::Keyword(Keyword::EndIf), Nonterminal::Conditional);

        self.finish(
            StatementKind::Conditional {
                condition,
                then_body,
                else_body,
            },
            location,
        )
    }

    /// `<I-o>`: `INPUT` `<IdentList>` | `OUTPUT` `<Expression>` {`,` `<Expression>`}.
    fn parse_io(&mut self) -> Statement {
        let keyword = self.bump();
        let location = keyword.location;

        if keyword.is(TokenKind::Keyword(Keyword::Input)) {
            let targets = self.parse_ident_list();
            return self.finish(StatementKind::Input { targets }, location);
        }

        let mut values = vec![self.parse_expression()];
        while self.eat(TokenKind::Punct(Punct::Comma)).is_some() {
            values.push(self.parse_expression());
        }
        self.finish(StatementKind::Output { values }, location)
    }
}
