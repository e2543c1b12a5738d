//! End-to-end tests driving the `toylang` binary.

mod common;

use std::fs;

use common::{run_in, run_with_code, scratch_dir, stderr, stdout};

#[test]
fn e2e_prints_token_list() {
    let output = run_with_code("$count = 5");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "REFERENCE:count, WS, ASSIGN, WS, INT:5, WS, EOF\n"
    );
}

#[test]
fn e2e_echoes_unrecognized_text_first() {
    let output = run_with_code("foo + bar");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "foo\nbar\nINVTOK, WS, ADD, WS, INVTOK, WS, EOF\n"
    );
}

#[test]
fn e2e_multiline_source() {
    let output = run_with_code("@x\nPRINT $x\n");
    assert_eq!(
        stdout(&output),
        "DECLARE:x, WS, PRINT, WS, REFERENCE:x, WS, EOF\n"
    );
}

#[test]
fn e2e_non_utf8_source_is_scanned() {
    let dir = scratch_dir();
    fs::write(dir.join("code.txt"), b"@caf\xe9 = 1").expect("write code.txt");
    let output = run_in(&dir, &[]);
    let _ = fs::remove_dir_all(&dir);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "DECLARE:caf\u{FFFD}, WS, ASSIGN, WS, INT:1, WS, EOF\n"
    );
}

#[test]
fn e2e_missing_file_is_fatal() {
    let dir = scratch_dir();
    let output = run_in(&dir, &[]);
    let _ = fs::remove_dir_all(&dir);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with("Invalid File: code.txt"));
}

#[test]
fn e2e_explicit_path() {
    let dir = scratch_dir();
    fs::write(dir.join("prog.toy"), "3.14").expect("write source");
    let output = run_in(&dir, &["prog.toy"]);
    let _ = fs::remove_dir_all(&dir);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "FLOAT:3.14, WS, EOF\n");
}

#[test]
fn e2e_help() {
    let dir = scratch_dir();
    let output = run_in(&dir, &["--help"]);
    let _ = fs::remove_dir_all(&dir);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage: toylang"));
}
