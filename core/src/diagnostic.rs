//! Diagnostics produced while analyzing one PAL program.
//!
//! Every violation is recorded as a `Diagnostic` value and appended to an
//! ordered list; nothing here aborts a run. Both stages (grammar and
//! semantics) tag what they record with a [`Seq`], the position of the event
//! in the order a single interleaved pass would have discovered it, so the two
//! lists can be merged back into discovery order.

use std::fmt;

use crate::analyzers::semantic::{LanguageType, Symbol};
use crate::ast::Nonterminal;
use crate::error::{Level, PalErrorExt};
use crate::lexer::Token;
use crate::location::Location;

/// Discovery sequence number handed out by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Seq(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Sequenced<T> {
    pub seq: Seq,
    pub item: T,
}

impl<T> Sequenced<T> {
    pub fn new(seq: Seq, item: T) -> Self {
        Sequenced { seq, item }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A grammar rule was violated while recognizing `nonterminal`; `found`
    /// is the offending token.
    SyntaxError { nonterminal: Nonterminal, found: Token },
    /// `token` re-declares a name already held by `existing` in the same scope.
    AlreadyDeclared { token: Token, existing: Symbol },
    /// `token` refers to a name with no declaration.
    NotDeclared { token: Token },
    /// The type `actual` of `token` does not match the `expected` type.
    TypeConflict {
        token: Token,
        actual: LanguageType,
        expected: LanguageType,
    },
}

impl Diagnostic {
    /// The source position the diagnostic points at.
    pub fn position(&self) -> Location {
        match self {
            Diagnostic::SyntaxError { found, .. } => found.location,
            Diagnostic::AlreadyDeclared { token, .. }
            | Diagnostic::NotDeclared { token }
            | Diagnostic::TypeConflict { token, .. } => token.location,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Diagnostic::SyntaxError { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SyntaxError { nonterminal, found } => {
                write!(f, "Syntax error in {}: unexpected {}.", nonterminal, found)
            }
            Diagnostic::AlreadyDeclared { token, existing } => write!(
                f,
                "Identifier '{}' is already declared at {}.",
                token.value, existing.token.location
            ),
            Diagnostic::NotDeclared { token } => {
                write!(f, "Identifier '{}' is not declared.", token.value)
            }
            Diagnostic::TypeConflict {
                token,
                actual,
                expected,
            } => write!(
                f,
                "Type conflict at '{}': expected {} but found {}.",
                token.value, expected, actual
            ),
        }
    }
}

impl std::error::Error for Diagnostic {}

impl PalErrorExt for Diagnostic {
    fn level(&self) -> Level {
        Level::Error
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn issuer(&self) -> String {
        match self {
            Diagnostic::SyntaxError { .. } => "pal.ast.parser".to_string(),
            _ => "pal.analyzers.semantic".to_string(),
        }
    }

    fn location(&self) -> Option<Location> {
        Some(self.position())
    }
}

/// Append-only, order-preserving collector shared by both stages.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Sequenced<Diagnostic>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, seq: Seq, diagnostic: Diagnostic) {
        log::trace!("diagnostic #{}: {}", seq.0, diagnostic);
        self.entries.push(Sequenced::new(seq, diagnostic));
    }

    pub fn extend(&mut self, others: impl IntoIterator<Item = Sequenced<Diagnostic>>) {
        self.entries.extend(others);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sequenced<Diagnostic>> {
        self.entries.iter()
    }

    /// Discovery order. The sort is stable, so entries sharing a sequence
    /// number keep the order they were pushed in.
    pub fn into_ordered(mut self) -> Vec<Diagnostic> {
        self.entries.sort_by_key(|e| e.seq);
        self.entries.into_iter().map(|e| e.item).collect()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Sequenced<Diagnostic>;
    type IntoIter = std::vec::IntoIter<Sequenced<Diagnostic>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn ident(name: &str, line: usize) -> Token {
        Token::identifier(name, Location::new(line, 1))
    }

    #[test]
    fn ordering_follows_sequence_not_push_order() {
        let mut diags = Diagnostics::new();
        diags.push(Seq(7), Diagnostic::NotDeclared { token: ident("b", 3) });
        diags.push(Seq(2), Diagnostic::NotDeclared { token: ident("a", 1) });
        diags.push(Seq(7), Diagnostic::NotDeclared { token: ident("c", 3) });

        let names: Vec<_> = diags
            .into_ordered()
            .into_iter()
            .map(|d| match d {
                Diagnostic::NotDeclared { token } => token.value,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn messages_name_the_offending_parts() {
        let conflict = Diagnostic::TypeConflict {
            token: Token::new(TokenKind::RealLiteral, "1.5", Location::new(4, 9)),
            actual: LanguageType::Real,
            expected: LanguageType::Integer,
        };
        assert_eq!(
            conflict.message(),
            "Type conflict at '1.5': expected Integer but found Real."
        );
        assert_eq!(conflict.location(), Some(Location::new(4, 9)));

        let syntax = Diagnostic::SyntaxError {
            nonterminal: Nonterminal::Assignment,
            found: Token::end_of_file(Location::new(9, 1)),
        };
        assert_eq!(
            syntax.message(),
            "Syntax error in <Assignment>: unexpected end of file."
        );
        assert!(syntax.is_syntax_error());
    }
}
