//! file: core/src/ast/recovery.rs
//! description: synchronization table for syntax-error recovery.
//!
//! When a nonterminal fails to find the terminal it expects, the parser
//! reports one `SyntaxError` naming that nonterminal and then skips tokens
//! until it reaches a member of the nonterminal's synchronizing set (or end of
//! input). The sets are built from the tokens that can start the next
//! statement, close the enclosing block, or continue the construct itself, so
//! recognition picks up again at the nearest point where later, independent
//! constructs can still be checked.
//!
use std::fmt;

use crate::lexer::{Keyword, Punct, TokenKind};

/// The productions that can report a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nonterminal {
    Program,
    VarDecls,
    IdentList,
    Type,
    Statement,
    Assignment,
    Loop,
    Conditional,
    BooleanExpr,
    Factor,
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Nonterminal::Program => "<Program>",
            Nonterminal::VarDecls => "<VarDecls>",
            Nonterminal::IdentList => "<IdentList>",
            Nonterminal::Type => "<Type>",
            Nonterminal::Statement => "<Statement>",
            Nonterminal::Assignment => "<Assignment>",
            Nonterminal::Loop => "<Loop>",
            Nonterminal::Conditional => "<Conditional>",
            Nonterminal::BooleanExpr => "<BooleanExpr>",
            Nonterminal::Factor => "<Factor>",
        };
        write!(f, "{}", name)
    }
}

const fn kw(keyword: Keyword) -> TokenKind {
    TokenKind::Keyword(keyword)
}

const fn sym(punct: Punct) -> TokenKind {
    TokenKind::Punct(punct)
}

const IDENT: TokenKind = TokenKind::Identifier;

/// Tokens that begin a statement.
pub const STATEMENT_START: &[TokenKind] = &[
    IDENT,
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
];

/// Tokens that close a statement block.
pub const BLOCK_END: &[TokenKind] = &[
    kw(Keyword::EndLoop),
    kw(Keyword::EndIf),
    kw(Keyword::Else),
    kw(Keyword::End),
];

/// Tokens that begin a factor (and therefore any expression).
pub const FACTOR_START: &[TokenKind] = &[
    IDENT,
    TokenKind::IntegerLiteral,
    TokenKind::RealLiteral,
    sym(Punct::LParen),
    sym(Punct::Plus),
    sym(Punct::Minus),
];

pub const RELATIONAL_OPERATORS: &[TokenKind] = &[
    sym(Punct::Less),
    sym(Punct::Equals),
    sym(Punct::Greater),
];

// Identifiers and statement keywords let a missing `WITH` or `IN` resume at
// the first declaration or the first statement.
const PROGRAM_SYNC: &[TokenKind] = &[
    kw(Keyword::Program),
    kw(Keyword::With),
    kw(Keyword::In),
    IDENT,
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::End),
];

const VAR_DECLS_SYNC: &[TokenKind] = &[
    kw(Keyword::As),
    kw(Keyword::Integer),
    kw(Keyword::Real),
    kw(Keyword::In),
    IDENT,
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::End),
];

const IDENT_LIST_SYNC: &[TokenKind] = &[
    sym(Punct::Comma),
    kw(Keyword::As),
    kw(Keyword::Integer),
    kw(Keyword::Real),
    kw(Keyword::In),
    IDENT,
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::EndLoop),
    kw(Keyword::EndIf),
    kw(Keyword::Else),
    kw(Keyword::End),
];

const TYPE_SYNC: &[TokenKind] = &[
    IDENT,
    kw(Keyword::In),
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::End),
];

const STATEMENT_SYNC: &[TokenKind] = &[
    IDENT,
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::EndLoop),
    kw(Keyword::EndIf),
    kw(Keyword::Else),
    kw(Keyword::End),
];

const ASSIGNMENT_SYNC: &[TokenKind] = &[
    sym(Punct::Equals),
    IDENT,
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::EndLoop),
    kw(Keyword::EndIf),
    kw(Keyword::Else),
    kw(Keyword::End),
];

const LOOP_SYNC: &[TokenKind] = &[
    kw(Keyword::Repeat),
    IDENT,
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::EndLoop),
    kw(Keyword::EndIf),
    kw(Keyword::Else),
    kw(Keyword::End),
];

const CONDITIONAL_SYNC: &[TokenKind] = &[
    kw(Keyword::Then),
    IDENT,
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::EndLoop),
    kw(Keyword::EndIf),
    kw(Keyword::Else),
    kw(Keyword::End),
];

const BOOLEAN_EXPR_SYNC: &[TokenKind] = &[
    sym(Punct::Less),
    sym(Punct::Equals),
    sym(Punct::Greater),
    kw(Keyword::Repeat),
    kw(Keyword::Then),
    TokenKind::IntegerLiteral,
    TokenKind::RealLiteral,
    sym(Punct::LParen),
    sym(Punct::Plus),
    sym(Punct::Minus),
    IDENT,
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::EndLoop),
    kw(Keyword::EndIf),
    kw(Keyword::Else),
    kw(Keyword::End),
];

// No `*` or `/`: neither can start an operand, so both are skipped.
const FACTOR_SYNC: &[TokenKind] = &[
    IDENT,
    TokenKind::IntegerLiteral,
    TokenKind::RealLiteral,
    sym(Punct::LParen),
    sym(Punct::Plus),
    sym(Punct::Minus),
    sym(Punct::RParen),
    sym(Punct::Comma),
    sym(Punct::Less),
    sym(Punct::Equals),
    sym(Punct::Greater),
    kw(Keyword::Repeat),
    kw(Keyword::Then),
    kw(Keyword::Until),
    kw(Keyword::If),
    kw(Keyword::Input),
    kw(Keyword::Output),
    kw(Keyword::EndLoop),
    kw(Keyword::EndIf),
    kw(Keyword::Else),
    kw(Keyword::End),
];

impl Nonterminal {
    /// Tokens at which recognition resumes after a syntax error inside this
    /// nonterminal. End of input always stops the skip as well.
    pub fn sync_set(self) -> &'static [TokenKind] {
        match self {
            Nonterminal::Program => PROGRAM_SYNC,
            Nonterminal::VarDecls => VAR_DECLS_SYNC,
            Nonterminal::IdentList => IDENT_LIST_SYNC,
            Nonterminal::Type => TYPE_SYNC,
            Nonterminal::Statement => STATEMENT_SYNC,
            Nonterminal::Assignment => ASSIGNMENT_SYNC,
            Nonterminal::Loop => LOOP_SYNC,
            Nonterminal::Conditional => CONDITIONAL_SYNC,
            Nonterminal::BooleanExpr => BOOLEAN_EXPR_SYNC,
            Nonterminal::Factor => FACTOR_SYNC,
        }
    }

    pub fn synchronizes_on(self, kind: TokenKind) -> bool {
        self.sync_set().contains(&kind)
    }
}
