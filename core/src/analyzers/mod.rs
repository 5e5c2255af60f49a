pub mod semantic;

pub use semantic::analyze_semantic_rules;
