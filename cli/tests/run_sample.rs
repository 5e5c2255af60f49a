use assert_cmd::Command;
use std::path::PathBuf;

fn sample(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("samples");
    path.push(name);
    path
}

fn pal() -> Command {
    Command::cargo_bin("pal").expect("pal binary should be built")
}

#[test]
fn valid_program_reports_no_errors() {
    let output = pal().arg(sample("valid.pal")).output().expect("failed to run pal");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("PAL compiler front-end"));
    assert!(stdout.trim_end().ends_with("0 errors found."));
}

#[test]
fn diagnostics_are_listed_in_discovery_order() {
    let output = pal().arg(sample("errors.pal")).output().expect("failed to run pal");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().filter(|l| l.starts_with("PAL |")).collect();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        lines,
        vec![
            "PAL | ERROR | 4:5 | Identifier 'x' is already declared at 3:5.",
            "PAL | ERROR | 6:9 | Type conflict at '1.5': expected Integer but found Real.",
            "PAL | ERROR | 7:5 | Identifier 'y' is not declared.",
            "PAL | ERROR | 9:9 | Syntax error in <Loop>: unexpected 'x'.",
        ]
    );
    assert!(stdout.trim_end().ends_with("4 errors found."));
}

#[test]
fn program_written_to_a_temp_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tmp.pal");
    std::fs::write(&path, "PROGRAM t WITH a AS REAL IN a = 2 END").expect("write sample");

    let output = pal().arg(&path).output().expect("failed to run pal");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Type conflict at '2': expected Real but found Integer."));
    assert!(stdout.contains("1 errors found."));
}

#[test]
fn unreadable_file_is_reported_without_analysis() {
    let output = pal()
        .arg(sample("does_not_exist.pal"))
        .output()
        .expect("failed to run pal");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("An I/O error occurred opening file"));
    assert!(!stdout.contains("errors found."));
}

#[test]
fn missing_argument_prints_usage() {
    let output = pal().output().expect("failed to run pal");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Usage"));
}
