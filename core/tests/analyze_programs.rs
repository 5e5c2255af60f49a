use pal_core::{
    Diagnostic, LanguageType, Location, Nonterminal, Script, analyze_source, analyze_tokens,
    generate_error_report, tokenize,
};

fn analyze(src: &str) -> Vec<Diagnostic> {
    analyze_tokens(tokenize(src))
}

/// Short tag per diagnostic, enough to compare discovery order.
fn tags(diags: &[Diagnostic]) -> Vec<String> {
    diags
        .iter()
        .map(|d| match d {
            Diagnostic::SyntaxError { nonterminal, found } => {
                format!("syntax {} at {}", nonterminal, found.value)
            }
            Diagnostic::AlreadyDeclared { token, .. } => format!("redeclared {}", token.value),
            Diagnostic::NotDeclared { token } => format!("undeclared {}", token.value),
            Diagnostic::TypeConflict { token, .. } => format!("conflict at {}", token.value),
        })
        .collect()
}

const WELL_FORMED: &str = r#"
PROGRAM average
WITH
    n, count AS INTEGER
    total, mean AS REAL
IN
    INPUT n
    count = 0
    total = 0.0
    UNTIL count = n REPEAT
        INPUT mean
        total = total + mean
        count = count + 1
    ENDLOOP
    IF n > 0 THEN
        mean = total / 2.0
        OUTPUT mean, count
    ELSE
        OUTPUT n
    ENDIF
END
"#;

#[test]
fn well_formed_program_has_no_diagnostics() {
    assert!(analyze(WELL_FORMED).is_empty());
}

#[test]
fn integer_variable_assigned_a_real() {
    let diags = analyze("PROGRAM demo WITH x AS INTEGER IN x = 1.5 END");
    assert_eq!(diags.len(), 1);
    match &diags[0] {
        Diagnostic::TypeConflict {
            token,
            actual,
            expected,
        } => {
            assert_eq!(token.value, "1.5");
            assert_eq!(*actual, LanguageType::Real);
            assert_eq!(*expected, LanguageType::Integer);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn assignment_to_undeclared_name() {
    let diags = analyze("PROGRAM demo WITH x AS INTEGER IN y = 1 END");
    assert_eq!(tags(&diags), vec!["undeclared y"]);
}

#[test]
fn redeclaration_keeps_the_first_type() {
    let src = "PROGRAM demo\nWITH x AS INTEGER\n  x AS REAL\nIN x = 1\n  x = 2.5\nEND";
    let diags = analyze(src);
    assert_eq!(tags(&diags), vec!["redeclared x", "conflict at 2.5"]);

    match &diags[0] {
        Diagnostic::AlreadyDeclared { token, existing } => {
            assert_eq!(token.location, Location::new(3, 3));
            assert_eq!(existing.token().location, Location::new(2, 6));
            assert_eq!(existing.ty(), LanguageType::Integer);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(
        &diags[1],
        Diagnostic::TypeConflict {
            expected: LanguageType::Integer,
            ..
        }
    ));
}

#[test]
fn every_undeclared_occurrence_is_reported_once() {
    let diags = analyze(
        "PROGRAM p WITH a AS INTEGER IN \
         INPUT a, b \
         a = c + c \
         OUTPUT d, d + a \
         END",
    );
    assert_eq!(
        tags(&diags),
        vec!["undeclared b", "undeclared c", "undeclared c", "undeclared d"]
    );
}

#[test]
fn mixed_numeric_operands_conflict_once_per_construct() {
    let diags = analyze(
        "PROGRAM p WITH i AS INTEGER r AS REAL IN \
         i = i * r \
         r = i \
         IF r < i THEN OUTPUT i ENDIF \
         END",
    );
    assert_eq!(
        tags(&diags),
        vec!["conflict at r", "conflict at i", "conflict at i"]
    );
}

#[test]
fn undefined_operands_do_not_cascade() {
    let diags = analyze("PROGRAM p WITH i AS INTEGER IN i = (q + 1.5) * i END");
    assert_eq!(tags(&diags), vec!["undeclared q"]);
}

#[test]
fn missing_terminals_do_not_hide_later_errors() {
    let src = r#"
PROGRAM p
WITH x AS INTEGER
IN
    UNTIL x > 1.5
        x = x + 1
    ENDLOOP
    IF x = 1 THEN
        x = 2
    z = 3
END
"#;
    let diags = analyze(src);
    assert_eq!(
        tags(&diags),
        vec![
            "conflict at 1.5",
            "syntax <Loop> at x",
            "undeclared z",
            "syntax <Conditional> at END",
        ]
    );
}

#[test]
fn lone_output_value_needs_no_declaration() {
    let diags = analyze("PROGRAM p WITH a AS INTEGER IN a = 1 OUTPUT d END");
    assert!(diags.is_empty());
}

#[test]
fn missing_in_still_checks_the_statements() {
    let diags = analyze("PROGRAM p WITH a AS INTEGER INPUT z a = 1.5 END");
    assert_eq!(
        tags(&diags),
        vec!["syntax <Program> at INPUT", "undeclared z", "conflict at 1.5"]
    );
}

#[test]
fn missing_in_before_an_assignment_is_not_a_redeclaration() {
    let diags = analyze("PROGRAM p WITH a AS INTEGER a = 1 IF z = 1 THEN a = 2 ENDIF END");
    assert_eq!(tags(&diags), vec!["syntax <Program> at a", "undeclared z"]);
}

#[test]
fn missing_with_keeps_the_declarations() {
    let diags = analyze("PROGRAM p a AS INTEGER IN a = 1 a = 2 END");
    assert_eq!(tags(&diags), vec!["syntax <Program> at a"]);
}

#[test]
fn syntax_and_semantic_errors_interleave_in_discovery_order() {
    let diags = analyze("PROGRAM p WITH a AS INTEGER IN b = 1 a 2 c = 3 END");
    assert_eq!(
        tags(&diags),
        vec!["undeclared b", "syntax <Assignment> at 2", "undeclared c"]
    );
}

#[test]
fn bad_type_name_does_not_cascade() {
    let diags = analyze("PROGRAM p WITH a AS TEXT b AS REAL IN a = 1 b = 2 END");
    assert_eq!(tags(&diags), vec!["syntax <Type> at TEXT", "conflict at 2"]);
}

#[test]
fn invalid_characters_are_syntax_errors() {
    let diags = analyze("PROGRAM p WITH a AS INTEGER IN a = 1 $ a = 2 END");
    assert_eq!(tags(&diags), vec!["syntax <Statement> at $"]);
    assert!(diags[0].is_syntax_error());
}

#[test]
fn empty_input_is_one_error() {
    let diags = analyze("");
    assert_eq!(diags.len(), 1);
    match &diags[0] {
        Diagnostic::SyntaxError { nonterminal, .. } => assert_eq!(*nonterminal, Nonterminal::Program),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn analyze_source_reports_lines() {
    let script = Script::from_source("demo.pal", "PROGRAM demo\nWITH x AS INTEGER\nIN\n  x = 1.5\nEND\n");
    let lines: Vec<String> = analyze_source(&script)
        .iter()
        .map(generate_error_report)
        .collect();
    assert_eq!(
        lines,
        vec!["PAL | ERROR | 4:7 | Type conflict at '1.5': expected Integer but found Real."]
    );
}

#[test]
fn independent_runs_share_no_state() {
    let sources = [
        WELL_FORMED.to_string(),
        "PROGRAM demo WITH x AS INTEGER IN x = 1.5 END".to_string(),
        "PROGRAM demo WITH x AS INTEGER IN y = 1 END".to_string(),
    ];
    let expected: Vec<_> = sources.iter().map(|s| analyze(s)).collect();

    let handles: Vec<_> = sources
        .into_iter()
        .map(|src| std::thread::spawn(move || analyze(&src)))
        .collect();
    let actual: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("analysis thread panicked"))
        .collect();

    assert_eq!(actual, expected);
}
