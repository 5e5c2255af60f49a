use std::fmt;

use crate::ast::DeclType;
use crate::lexer::{Token, TokenKind};

/// The closed set of PAL value types.
///
/// `Undefined` marks a value that is already erroneous (an undeclared name, a
/// construct that failed to parse). It never takes part in a reported
/// conflict, which keeps one mistake from producing a chain of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageType {
    Integer,
    Real,
    Boolean,
    String,
    Undefined,
}

impl LanguageType {
    pub fn is_undefined(&self) -> bool {
        matches!(self, LanguageType::Undefined)
    }

    /// Intrinsic type of a literal token; `None` for anything that is not a literal.
    pub fn of_literal(token: &Token) -> Option<Self> {
        match token.kind {
            TokenKind::IntegerLiteral => Some(LanguageType::Integer),
            TokenKind::RealLiteral => Some(LanguageType::Real),
            TokenKind::BooleanLiteral => Some(LanguageType::Boolean),
            TokenKind::StringLiteral => Some(LanguageType::String),
            _ => None,
        }
    }

    /// True when a value of `other` conflicts with `self`. There are no
    /// implicit conversions, so any difference between two known types conflicts.
    pub fn conflicts_with(&self, other: LanguageType) -> bool {
        !self.is_undefined() && !other.is_undefined() && *self != other
    }
}

impl From<DeclType> for LanguageType {
    fn from(ty: DeclType) -> Self {
        match ty {
            DeclType::Integer => LanguageType::Integer,
            DeclType::Real => LanguageType::Real,
        }
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LanguageType::Integer => "Integer",
            LanguageType::Real => "Real",
            LanguageType::Boolean => "Boolean",
            LanguageType::String => "String",
            LanguageType::Undefined => "Undefined",
        };
        write!(f, "{}", s)
    }
}
