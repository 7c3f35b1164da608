use std::process::{Command, Output};

fn pineapple(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pineapple"))
        .args(args)
        .output()
        .expect("failed to run pineapple binary")
}

fn case(name: &str) -> String {
    format!("tests/pineapple_test_cases/{}.pine", name)
}

#[test]
fn test_success_writes_stdout_only() {
    let output = pineapple(&[&case("print/twice")]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "TestTest");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_missing_argument() {
    let output = pineapple(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));
}

#[test]
fn test_missing_file() {
    let output = pineapple(&["tests/pineapple_test_cases/no_such_script.pine"]);

    assert_eq!(output.status.code(), Some(66));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: IoError"));
}

#[test]
fn test_unclosed_string() {
    let output = pineapple(&[&case("strings/unclosed")]);

    assert_eq!(output.status.code(), Some(65));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: ScanError: unclosed string"));
    assert!(stderr.contains("line 1"));
}

#[test]
fn test_undefined_variable() {
    let output = pineapple(&[&case("print/undefined")]);

    assert_eq!(output.status.code(), Some(70));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .starts_with("error: UndefinedVariableError: undefined variable `$undefined` on line 1"));
}

#[test]
fn test_dumps_go_to_stderr() {
    let output = pineapple(&["--tokens", "--ast", &case("assignment/hello_world")]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, World!");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("VarPrefix"));
    assert!(stderr.contains("EndOfInput"));
    assert!(stderr.contains("Assignment"));
}

#[test]
fn test_token_dump_lines_follow_statements() {
    let output = pineapple(&["--tokens", &case("print/twice")]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "TestTest");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("   1 VarPrefix \"$\""));
    assert!(stderr.contains("   2 Print \"print\""));
    assert!(stderr.contains("   3 Print \"print\""));
    assert!(!stderr.contains("Test"));
}

#[test]
fn test_token_dump_across_multiline_string() {
    let output = pineapple(&["--tokens", &case("lines/multiline_string_error")]);

    assert_eq!(output.status.code(), Some(65));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("   3 Quote \"\\\"\""));
    assert!(stderr.contains("   4 Print \"print\""));
    assert!(stderr.contains("   5 Name \"a\""));
    assert!(stderr.contains("error: SyntaxError: expected `$`, but got name `a` on line 5"));
}

#[test]
fn test_ast_dump_alone() {
    let output = pineapple(&["--ast", &case("print/twice")]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "TestTest");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Assignment"));
    assert!(stderr.contains("Print"));
    assert!(!stderr.contains("VarPrefix"));
}
