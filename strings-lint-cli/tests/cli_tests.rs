use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn strings_lint_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("strings-lint"))
}

fn run(args: &[&str], source: &Path, dest: &Path) -> Output {
    strings_lint_cmd()
        .args(args)
        .arg(source)
        .arg(dest)
        .env("RUST_LOG", "info")
        .output()
        .unwrap()
}

#[test]
fn test_check_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("copy.txt"),
        "\"hello\" = \"world\";\n\"bye\" = \"see you\";\n",
    )
    .unwrap();

    let output = run(&["--check", "copy.txt"], temp_dir.path(), temp_dir.path());

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CHECKING TEXT FILE"));
    assert!(stdout.contains("NO ERRORS"));
    assert!(!temp_dir.path().join("strings.xml").exists());
}

#[test]
fn test_check_reports_lines_and_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("copy.txt"),
        "\"hello\" = \"world\";\n\"bad key\" = \"x\";\n\"hello\" = \"again\";\n",
    )
    .unwrap();

    let output = run(&["-c", "copy.txt"], temp_dir.path(), temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("ERROR(S) LOCATED"));
    assert!(stderr.contains("One or more lines is formatted incorrectly."), "stderr: {}", stderr);
    assert!(stderr.contains("[Line 2]: \"bad key\" = \"x\";"), "stderr: {}", stderr);
    assert!(stderr.contains("One or more duplicate keys exists."), "stderr: {}", stderr);
    assert!(
        stderr.contains("Key: [hello] - Value Instances: {Line: 1}, world, {Line: 3}, again"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_format_writes_strings_xml() {
    let source_dir = TempDir::new().unwrap();
    let dest_dir = TempDir::new().unwrap();
    fs::write(
        source_dir.path().join("copy_doc.txt"),
        "\"app_name\" = \"Remote\";\n\n\"login\" = \"Sign in\";\n",
    )
    .unwrap();

    let output = run(&["--format", "copy_doc.txt"], source_dir.path(), dest_dir.path());

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("SUCCESSFULLY CREATED FILE"));

    let xml = fs::read_to_string(dest_dir.path().join("strings.xml")).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    let app = xml.find("<string name=\"app_name\">Remote</string>").unwrap();
    let login = xml.find("<string name=\"login\">Sign in</string>").unwrap();
    assert!(app < login);
}

#[test]
fn test_format_with_errors_does_not_write() {
    let source_dir = TempDir::new().unwrap();
    let dest_dir = TempDir::new().unwrap();
    fs::write(source_dir.path().join("copy.txt"), "\"a\" = \"b\";   \n").unwrap();
    fs::write(dest_dir.path().join("strings.xml"), "previous").unwrap();

    let output = run(&["-f", "copy.txt"], source_dir.path(), dest_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please fix all errors before passing in this argument."));
    assert_eq!(
        fs::read_to_string(dest_dir.path().join("strings.xml")).unwrap(),
        "previous"
    );
}

#[test]
fn test_format_empty_source_does_not_write() {
    let source_dir = TempDir::new().unwrap();
    let dest_dir = TempDir::new().unwrap();
    fs::write(source_dir.path().join("copy.txt"), "\n\n").unwrap();
    fs::write(dest_dir.path().join("strings.xml"), "previous").unwrap();

    let output = run(&["--format", "copy.txt"], source_dir.path(), dest_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("SUCCESSFULLY CREATED FILE"));
    assert!(stderr.contains("Please fix all errors before passing in this argument."), "stderr: {}", stderr);
    assert_eq!(
        fs::read_to_string(dest_dir.path().join("strings.xml")).unwrap(),
        "previous"
    );
}

#[test]
fn test_no_verb_only_warns() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("copy.txt"), "\"a\" = \"b\";\n").unwrap();

    let output = run(&["copy.txt"], temp_dir.path(), temp_dir.path());

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Passed argument is invalid."), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("strings.xml").exists());
}

#[test]
fn test_check_and_format_conflict() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&["--check", "--format", "copy.txt"], temp_dir.path(), temp_dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "stderr: {}", stderr);
}

#[test]
fn test_missing_source_file_is_io_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&["--check", "missing.txt"], temp_dir.path(), temp_dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("I/O error"));
}

#[test]
fn test_check_json_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("copy.txt"),
        "\"hello\" = \"world\";\n\"hello\" = \"again\";\n",
    )
    .unwrap();

    let output = run(&["--check", "--json", "copy.txt"], temp_dir.path(), temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["status"], "invalid");
    assert_eq!(v["malformed"].as_array().unwrap().len(), 0);
    assert_eq!(v["duplicates"][0]["key"], "hello");
    assert_eq!(v["duplicates"][0]["occurrences"][1]["line_number"], 2);
    assert_eq!(v["duplicates"][0]["occurrences"][1]["value"], "again");
}

#[test]
fn test_format_json_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("copy.txt"), "\"hello\" = \"world\";\n").unwrap();

    let output = run(&["--format", "--json", "copy.txt"], temp_dir.path(), temp_dir.path());

    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["status"], "clean");
    assert_eq!(v["entries"]["hello"], "world");
    assert!(temp_dir.path().join("strings.xml").exists());
}
