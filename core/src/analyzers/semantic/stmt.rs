use super::analyzer::Analyzer;
use super::expr::{analyze_condition, analyze_expression};
use super::kind::LanguageType;
use crate::ast::{Expr, ExprKind, Program, Statement, StatementKind};

/// Walk a whole program: one scope holds every declaration and is visible to
/// every statement.
pub(crate) fn analyze_program(program: &Program, analyzer: &mut Analyzer) {
    analyzer.open_scope();

    for group in &program.declarations {
        // A group whose type failed to parse still declares its names.
        let ty = group
            .kind
            .ty
            .map(LanguageType::from)
            .unwrap_or(LanguageType::Undefined);
        for ident in &group.kind.idents {
            analyzer.declare(&ident.kind, ty, group.seq());
        }
    }

    analyze_block(&program.statements, analyzer);
    analyzer.close_scope();
}

fn analyze_block(statements: &[Statement], analyzer: &mut Analyzer) {
    for statement in statements {
        analyze_statement(statement, analyzer);
    }
}

fn analyze_statement(node: &Statement, analyzer: &mut Analyzer) {
    match &node.kind {
        StatementKind::Assignment { target, value } => {
            let expected = analyzer.require_declared(&target.kind, target.seq());
            let value = analyze_expression(value, analyzer);
            analyzer.compare_types(expected, &value, node.seq());
        }
        StatementKind::Loop { condition, body } => {
            analyze_condition(condition, analyzer);
            analyze_block(body, analyzer);
        }
        StatementKind::Conditional {
            condition,
            then_body,
            else_body,
        } => {
            analyze_condition(condition, analyzer);
            analyze_block(then_body, analyzer);
            if let Some(else_body) = else_body {
                analyze_block(else_body, analyzer);
            }
        }
        StatementKind::Input { targets } => {
            for target in targets {
                analyzer.require_declared(&target.kind, target.seq());
            }
        }
        StatementKind::Output { values } => {
            // A lone operand is not declaration-checked, operands of a chain are.
            for value in values.iter().filter(|v| !is_single_operand(v)) {
                analyze_expression(value, analyzer);
            }
        }
    }
}

fn is_single_operand(node: &Expr) -> bool {
    match &node.kind {
        ExprKind::Value(_) | ExprKind::Error => true,
        ExprKind::Unary { operand, .. } => is_single_operand(operand),
        ExprKind::Group(inner) => is_single_operand(inner),
        ExprKind::Binary { .. } => false,
    }
}
