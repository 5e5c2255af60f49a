use super::kind::LanguageType;
use super::symbol::Symbol;
use super::table::SymbolTable;
use crate::diagnostic::{Diagnostic, Diagnostics, Seq};
use crate::lexer::Token;

/// A resolved operand: its type and the token that represents it in
/// diagnostics (`None` for an operand that failed to parse).
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub ty: LanguageType,
    pub token: Option<Token>,
}

impl Operand {
    pub fn new(ty: LanguageType, token: Token) -> Self {
        Operand {
            ty,
            token: Some(token),
        }
    }

    pub fn undefined() -> Self {
        Operand {
            ty: LanguageType::Undefined,
            token: None,
        }
    }
}

/// Declaration, lookup and type-compatibility operations over one program.
///
/// Each operation records what it finds and always hands back a usable type,
/// so the walker can keep going past any number of errors. The `seq`
/// argument is the discovery position the resulting diagnostic is filed under.
pub struct Analyzer {
    tbl: SymbolTable,
    diagnostics: Diagnostics,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer {
            tbl: SymbolTable::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn open_scope(&mut self) {
        self.tbl.enter_scope();
    }

    pub fn close_scope(&mut self) {
        self.tbl.exit_scope();
    }

    /// Register `token` in the current scope with type `ty`. The first
    /// declaration of a name wins; a later one is reported and dropped.
    pub fn declare(&mut self, token: &Token, ty: LanguageType, seq: Seq) {
        if !token.is_identifier() {
            return;
        }
        if let Err(existing) = self.tbl.insert_symbol(Symbol::new(token.clone(), ty)) {
            let existing = existing.clone();
            self.diagnostics.push(
                seq,
                Diagnostic::AlreadyDeclared {
                    token: token.clone(),
                    existing,
                },
            );
        }
    }

    /// Declared type of the name in `token`, or `Undefined` (reported) when
    /// there is no such declaration.
    pub fn require_declared(&mut self, token: &Token, seq: Seq) -> LanguageType {
        match self.tbl.lookup_symbol(&token.value) {
            Some(symbol) => symbol.ty(),
            None => {
                self.diagnostics.push(
                    seq,
                    Diagnostic::NotDeclared {
                        token: token.clone(),
                    },
                );
                LanguageType::Undefined
            }
        }
    }

    /// Identifiers resolve through the symbol table, literals to their
    /// intrinsic type, anything else to `Undefined`.
    pub fn resolve_type(&mut self, token: &Token, seq: Seq) -> LanguageType {
        if token.is_identifier() {
            return self.require_declared(token, seq);
        }
        LanguageType::of_literal(token).unwrap_or(LanguageType::Undefined)
    }

    /// Report `actual` if its type differs from `expected`. Nothing is
    /// reported when either side is `Undefined`.
    pub fn compare_types(&mut self, expected: LanguageType, actual: &Operand, seq: Seq) {
        if !expected.conflicts_with(actual.ty) {
            return;
        }
        let Some(token) = &actual.token else {
            return;
        };
        self.diagnostics.push(
            seq,
            Diagnostic::TypeConflict {
                token: token.clone(),
                actual: actual.ty,
                expected,
            },
        );
    }

    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn get_symbol_table(&self) -> &SymbolTable {
        &self.tbl
    }
}
