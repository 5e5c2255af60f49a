use super::analyzer::{Analyzer, Operand};
use crate::ast::{AstNode, Condition, Expr, ExprKind};

/// Resolve the type of `node`, reporting undeclared names and operand
/// conflicts on the way. The result stands for the whole expression: a
/// binary chain takes the type and representative token of its left operand.
pub(crate) fn analyze_expression(node: &Expr, analyzer: &mut Analyzer) -> Operand {
    match &node.kind {
        ExprKind::Value(token) => {
            let ty = analyzer.resolve_type(token, node.seq());
            Operand::new(ty, token.clone())
        }
        ExprKind::Unary { operand, .. } => analyze_expression(operand, analyzer),
        ExprKind::Group(inner) => analyze_expression(inner, analyzer),
        ExprKind::Binary { left, right, .. } => {
            let left = analyze_expression(left, analyzer);
            let right = analyze_expression(right, analyzer);
            analyzer.compare_types(left.ty, &right, node.seq());
            left
        }
        ExprKind::Error => Operand::undefined(),
    }
}

/// Both sides of a relational comparison must agree. A comparison whose
/// operator failed to parse is still checked.
pub(crate) fn analyze_condition(node: &AstNode<Condition>, analyzer: &mut Analyzer) {
    let left = analyze_expression(&node.kind.left, analyzer);
    let right = analyze_expression(&node.kind.right, analyzer);
    analyzer.compare_types(left.ty, &right, node.seq());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::semantic::LanguageType;
    use crate::ast::{StatementKind, parse_tokens};
    use crate::diagnostic::{Diagnostic, Seq};
    use crate::lexer::{Token, tokenize};
    use crate::location::Location;

    /// Declares `i` Integer and `r` Real, then analyzes `expr` as the
    /// right-hand side of an assignment.
    fn analyze_rhs(expr: &str) -> (Operand, Vec<Diagnostic>) {
        let src = format!("PROGRAM p WITH i AS INTEGER r AS REAL IN i = {} END", expr);
        let outcome = parse_tokens(tokenize(&src));
        assert!(outcome.diagnostics.is_empty(), "{:?}", outcome.diagnostics);

        let mut analyzer = Analyzer::new();
        analyzer.open_scope();
        analyzer.declare(&Token::identifier("i", Location::default()), LanguageType::Integer, Seq(0));
        analyzer.declare(&Token::identifier("r", Location::default()), LanguageType::Real, Seq(0));

        let operand = match &outcome.program.statements[0].kind {
            StatementKind::Assignment { value, .. } => analyze_expression(value, &mut analyzer),
            other => panic!("unexpected {}", other),
        };
        (operand, analyzer.take_diagnostics().into_ordered())
    }

    #[test]
    fn chain_takes_type_of_leftmost_operand() {
        let (operand, diags) = analyze_rhs("-(i + 2) * 3");
        assert!(diags.is_empty());
        assert_eq!(operand.ty, LanguageType::Integer);
        assert_eq!(operand.token.map(|t| t.value), Some("i".to_string()));
    }

    #[test]
    fn mixed_operands_conflict_at_right_operand() {
        let (_, diags) = analyze_rhs("i + r");
        match &diags[..] {
            [Diagnostic::TypeConflict { token, actual, expected }] => {
                assert_eq!(token.value, "r");
                assert_eq!(*actual, LanguageType::Real);
                assert_eq!(*expected, LanguageType::Integer);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn undeclared_operand_is_reported_once_without_conflict() {
        let (operand, diags) = analyze_rhs("q * 2.5");
        assert!(matches!(&diags[..], [Diagnostic::NotDeclared { token }] if token.value == "q"));
        assert_eq!(operand.ty, LanguageType::Undefined);
    }

    #[test]
    fn each_occurrence_is_resolved() {
        let (_, diags) = analyze_rhs("q + q");
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| matches!(d, Diagnostic::NotDeclared { .. })));
    }
}
