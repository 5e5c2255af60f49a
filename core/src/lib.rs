//! file: core/src/lib.rs
//! description: PAL compiler front-end.
//!
//! Checks a PAL program for syntax errors, duplicate and undeclared names and
//! type conflicts, reporting every independent problem in one pass.
//!
pub mod analyzers;
pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod lexer;
pub mod location;
pub mod script;

pub use analyzers::analyze_semantic_rules;
pub use analyzers::semantic::{LanguageType, Symbol, SymbolTable};
pub use ast::{Nonterminal, ParseOutcome, Program, generate_ast_from_source, parse_tokens};
pub use diagnostic::{Diagnostic, Diagnostics, Seq};
pub use error::{Level, PalErrorExt};
pub use lexer::{Token, TokenKind, tokenize};
pub use location::Location;
pub use script::{Script, ScriptReadError};

/// Analyze a classified token stream. Returns every diagnostic in the order
/// it was discovered; an empty list means the program is valid.
pub fn analyze_tokens(tokens: Vec<Token>) -> Vec<Diagnostic> {
    check_parsed(parse_tokens(tokens))
}

/// Lex `script` and analyze it.
pub fn analyze_source(script: &Script) -> Vec<Diagnostic> {
    check_parsed(generate_ast_from_source(script))
}

fn check_parsed(outcome: ParseOutcome) -> Vec<Diagnostic> {
    let ParseOutcome {
        program,
        mut diagnostics,
    } = outcome;
    diagnostics.extend(analyze_semantic_rules(&program));
    diagnostics.into_ordered()
}

pub fn generate_error_report<E: PalErrorExt + ?Sized>(error: &E) -> String {
    let level = error.level();
    let location = match error.location() {
        Some(loc) => loc.to_string(),
        None => "unknown location".to_string(),
    };
    let message = error.message();

    format!("PAL | {} | {} | {}", level, location, message)
}
