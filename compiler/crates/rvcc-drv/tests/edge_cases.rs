//! Boundary behaviors for the `rvcc` CLI and driver: usage errors, the
//! non-zero exit contract from spec.md §6, and the error-message shapes
//! each phase's `thiserror` enum produces.

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn rvcc() -> Command {
    Command::cargo_bin("rvcc").unwrap()
}

#[test]
fn missing_input_path_fails_with_usage() {
    rvcc().assert().failure().stderr(contains("usage: rvcc"));
}

#[test]
fn nonexistent_input_file_fails_with_an_io_error() {
    rvcc()
        .arg("/no/such/file.rvcc")
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn unrecognized_flag_fails_with_usage() {
    rvcc()
        .arg("main.rvcc")
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(contains("unrecognized option"));
}

#[test]
fn invalid_emit_value_is_rejected_before_touching_the_filesystem() {
    rvcc()
        .arg("main.rvcc")
        .arg("--emit")
        .arg("bytecode")
        .assert()
        .failure()
        .stderr(contains("unrecognized --emit value"));
}

#[test]
fn help_flag_prints_usage_and_exits_nonzero() {
    rvcc().arg("--help").assert().failure().stderr(contains("usage: rvcc"));
}

#[test]
fn unterminated_string_literal_reports_a_lexer_error_on_its_line() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.rvcc");
    fs::write(&input, "write(\"oops, 1);").unwrap();

    rvcc()
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Lexer Error (Line 1)"));
}

#[test]
fn missing_semicolon_at_end_of_input_reports_a_parser_error_with_line_number() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.rvcc");
    fs::write(&input, "int x = 1").unwrap();

    rvcc()
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Parser Error (Line 1)"));
}

#[test]
fn undefined_identifier_reports_a_codegen_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.rvcc");
    fs::write(&input, "exit(never_declared);").unwrap();

    rvcc()
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("CodeGen Error: undefined identifier 'never_declared'"));
}

#[test]
fn duplicate_declaration_reports_a_codegen_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.rvcc");
    fs::write(&input, "int a = 1; int a = 2; exit(a);").unwrap();

    rvcc()
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("already declared"));
}

#[test]
fn an_empty_program_still_compiles_to_a_well_formed_empty_main() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.rvcc");
    fs::write(&input, "").unwrap();

    rvcc().arg(&input).assert().success();

    let asm = fs::read_to_string(dir.path().join("main.s")).unwrap();
    assert!(asm.contains("main:"));
}

#[test]
fn output_flag_short_and_long_forms_are_equivalent() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.rvcc");
    fs::write(&input, "exit(1);").unwrap();

    let short = dir.path().join("short.s");
    rvcc().arg(&input).arg("-o").arg(&short).assert().success();
    assert!(short.exists());

    let long = dir.path().join("long.s");
    rvcc()
        .arg(&input)
        .arg("--output")
        .arg(&long)
        .assert()
        .success();
    assert!(long.exists());
}
