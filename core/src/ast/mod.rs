//! file: core/src/ast/mod.rs
//! description: grammar stage of the PAL front-end.
//!
//! Builds the parse tree from a token stream and records every syntax error
//! on the way. Semantic checks are not performed here; see
//! `analyzers::semantic`.
//!
mod cursor;
mod expr;
mod kind;
mod node;
mod parser;
mod recovery;
mod stmt;

pub use cursor::TokenCursor;
pub use kind::{
    BinaryOperator, Condition, DeclType, Declaration, ExprKind, Program, RelationalOperator,
    StatementKind, UnaryOperator,
};
pub use node::{AstNode, Expr, Ident, Statement};
pub use parser::{ParseOutcome, Parser};
pub use recovery::{BLOCK_END, FACTOR_START, Nonterminal, RELATIONAL_OPERATORS, STATEMENT_START};

use crate::lexer::{self, Token};
use crate::script::Script;

/// Run the grammar stage over an already classified token stream.
pub fn parse_tokens(tokens: Vec<Token>) -> ParseOutcome {
    Parser::new(tokens).parse()
}

/// Tokenize `script` and run the grammar stage over it.
pub fn generate_ast_from_source(script: &Script) -> ParseOutcome {
    log::debug!("parsing {}", script.name);
    parse_tokens(lexer::tokenize(&script.content))
}
