use super::kind::LanguageType;
use crate::lexer::Token;

/// The permanent record of a declared identifier. Created once, at the first
/// declaration of its name, and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub(crate) name: String,
    pub(crate) ty: LanguageType,
    /// The identifier token of the declaration, kept for diagnostics.
    pub(crate) token: Token,
}

impl Symbol {
    pub fn new(token: Token, ty: LanguageType) -> Self {
        Symbol {
            name: token.value.clone(),
            ty,
            token,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> LanguageType {
        self.ty
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}
