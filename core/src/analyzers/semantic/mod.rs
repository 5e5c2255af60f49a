//! file: core/src/analyzers/semantic/mod.rs
//! description: semantic stage of the PAL front-end.
//!
//! Walks a parse tree, declaring names into a scoped symbol table and
//! checking every use and every operand pairing against it. Diagnostics are
//! tagged with the sequence number of the node that triggered them so they
//! can be merged with the grammar stage's.
//!
mod analyzer;
mod expr;
mod kind;
mod stmt;
mod symbol;
mod table;

pub use analyzer::{Analyzer, Operand};
pub use kind::LanguageType;
pub use symbol::Symbol;
pub use table::SymbolTable;

use crate::ast::Program;
use crate::diagnostic::Diagnostics;

pub fn analyze_semantic_rules(program: &Program) -> Diagnostics {
    let mut analyzer = Analyzer::new();
    stmt::analyze_program(program, &mut analyzer);
    let diagnostics = analyzer.take_diagnostics();
    log::debug!("semantic analysis found {} diagnostics", diagnostics.len());
    diagnostics
}
