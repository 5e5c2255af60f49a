//! file: core/src/ast/parser.rs
//! description: recursive-descent grammar engine for PAL.
//!
//! `Parser` owns the token cursor and the syntax diagnostics of one run.
//! Productions for the program header and declarations live here; statements
//! and expressions are in `stmt.rs` and `expr.rs`.
//!
//! Recovery follows one rule: a failed expectation reports a `SyntaxError`
//! naming the production, then skips to that production's synchronizing set
//! (see `recovery.rs`). Until the next token is successfully consumed the
//! parser is "recovering" and further syntax errors are not reported, so a
//! single missing terminal yields a single diagnostic.
//!
use crate::diagnostic::{Diagnostic, Diagnostics, Seq};
use crate::lexer::{Keyword, Punct, Token, TokenKind};
use crate::location::Location;

use super::cursor::TokenCursor;
use super::kind::{Declaration, DeclType, ExprKind, Program};
use super::node::{AstNode, Expr, Ident};
use super::recovery::Nonterminal;

/// Result of the grammar stage: the tree and the syntax diagnostics found
/// while building it.
#[derive(Debug)]
pub struct ParseOutcome {
    pub program: Program,
    pub diagnostics: Diagnostics,
}

pub struct Parser {
    cursor: TokenCursor,
    diagnostics: Diagnostics,
    recovering: bool,
    next_seq: u32,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            diagnostics: Diagnostics::new(),
            recovering: false,
            next_seq: 0,
        }
    }

    pub fn parse(mut self) -> ParseOutcome {
        let program = self.parse_program();
        log::debug!(
            "parsed program {:?}: {} declaration groups, {} statements, {} syntax errors",
            program.name.as_ref().map(|t| t.value.as_str()),
            program.declarations.len(),
            program.statements.len(),
            self.diagnostics.len()
        );
        ParseOutcome {
            program,
            diagnostics: self.diagnostics,
        }
    }

    /// ------- Primitives -------

    fn tick(&mut self) -> Seq {
        let seq = Seq(self.next_seq);
        self.next_seq += 1;
        seq
    }

    /// Close a node; its sequence number orders it after everything
    /// recognized inside it.
    pub(super) fn finish<K>(&mut self, kind: K, location: Location) -> AstNode<K> {
        let seq = self.tick();
        AstNode::new(kind, location, seq)
    }

    pub(super) fn leaf(&mut self, token: Token) -> Ident {
        let location = token.location;
        self.finish(token, location)
    }

    pub(super) fn error_expr(&mut self, location: Location) -> Expr {
        self.finish(ExprKind::Error, location)
    }

    pub(super) fn peek(&self) -> &Token {
        self.cursor.peek()
    }

    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.cursor.at(kind)
    }

    pub(super) fn at_any(&self, kinds: &[TokenKind]) -> bool {
        self.cursor.at_any(kinds)
    }

    pub(super) fn at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Consume the current token. Any successful consumption ends recovery.
    pub(super) fn bump(&mut self) -> Token {
        self.recovering = false;
        self.cursor.advance()
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    pub(super) fn expect(&mut self, kind: TokenKind, nonterminal: Nonterminal) -> Option<Token> {
        self.expect_any(&[kind], nonterminal)
    }

    /// Consume-or-recover. On a mismatch the error is reported, tokens are
    /// skipped to the synchronizing set of `nonterminal` (or to one of
    /// `kinds`), and if an expected token was reached it is consumed after all.
    pub(super) fn expect_any(
        &mut self,
        kinds: &[TokenKind],
        nonterminal: Nonterminal,
    ) -> Option<Token> {
        if self.at_any(kinds) {
            return Some(self.bump());
        }
        self.syntax_error(nonterminal);
        self.synchronize(nonterminal, kinds);
        if self.at_any(kinds) {
            Some(self.bump())
        } else {
            None
        }
    }

    /// Record a syntax error at the current token unless one is already
    /// being recovered from.
    pub(super) fn syntax_error(&mut self, nonterminal: Nonterminal) {
        if self.recovering {
            log::trace!(
                "suppressed {} error at {} while recovering",
                nonterminal,
                self.cursor.location()
            );
            return;
        }
        self.recovering = true;
        let found = self.peek().clone();
        let seq = self.tick();
        self.diagnostics.push(
            seq,
            Diagnostic::SyntaxError {
                nonterminal,
                found,
            },
        );
    }

    /// Skip to the synchronizing set of `nonterminal`, also stopping at `extra`.
    pub(super) fn synchronize(&mut self, nonterminal: Nonterminal, extra: &[TokenKind]) {
        let from = self.cursor.location();
        let mut stop: Vec<TokenKind> = nonterminal.sync_set().to_vec();
        stop.extend_from_slice(extra);
        let skipped = self.cursor.skip_until(&stop);
        if skipped > 0 {
            log::trace!(
                "{} recovery skipped {} tokens from {} to {}",
                nonterminal,
                skipped,
                from,
                self.cursor.location()
            );
        }
    }

    /// Drop the current token without ending recovery.
    pub(super) fn discard(&mut self) {
        self.cursor.advance();
    }

    /// ------- Program header and declarations -------

    fn parse_program(&mut self) -> Program {
        let location = self.cursor.location();
        self.expect(TokenKind::Keyword(Keyword::Program), Nonterminal::Program);
        let name = self.expect(TokenKind::Identifier, Nonterminal::Program);
        self.expect(TokenKind::Keyword(Keyword::With), Nonterminal::Program);
        let declarations = self.parse_var_decls();
        self.expect(TokenKind::Keyword(Keyword::In), Nonterminal::Program);
        let statements = self.parse_statements(&[TokenKind::Keyword(Keyword::End)], true);
        self.expect(TokenKind::Keyword(Keyword::End), Nonterminal::Program);
        if !self.at_end() {
            self.syntax_error(Nonterminal::Program);
        }

        Program {
            name,
            declarations,
            statements,
            location,
        }
    }

    fn parse_var_decls(&mut self) -> Vec<AstNode<Declaration>> {
        let mut declarations = Vec::new();
        loop {
            let location = self.cursor.location();
            let idents = self.parse_ident_list();
            self.expect(TokenKind::Keyword(Keyword::As), Nonterminal::VarDecls);
            let ty = self.parse_type();
            declarations.push(self.finish(Declaration { idents, ty }, location));

            // `name =` is an assignment: the statements began without `IN`.
            if !self.at(TokenKind::Identifier)
                || self.cursor.peek_next().is(TokenKind::Punct(Punct::Equals))
            {
                break;
            }
        }
        declarations
    }

    pub(super) fn parse_ident_list(&mut self) -> Vec<Ident> {
        let mut idents = Vec::new();
        if let Some(token) = self.expect(TokenKind::Identifier, Nonterminal::IdentList) {
            idents.push(self.leaf(token));
        }
        while self.eat(TokenKind::Punct(Punct::Comma)).is_some() {
            if let Some(token) = self.expect(TokenKind::Identifier, Nonterminal::IdentList) {
                idents.push(self.leaf(token));
            }
        }
        idents
    }

    fn parse_type(&mut self) -> Option<DeclType> {
        if self.eat(TokenKind::Keyword(Keyword::Real)).is_some() {
            return Some(DeclType::Real);
        }
        if self.eat(TokenKind::Keyword(Keyword::Integer)).is_some() {
            return Some(DeclType::Integer);
        }

        self.syntax_error(Nonterminal::Type);
        // An identifier here is taken as a misspelled type name, not as the
        // start of the next declaration group.
        if self.at(TokenKind::Identifier) {
            self.discard();
        }
        self.synchronize(Nonterminal::Type, &[]);
        None
    }
}
