//! Program loader tests: the hex + assembly line format, comment and
//! whitespace handling, and load-time errors.

use std::fs;

use riscv_pipesim::common::SimError;
use riscv_pipesim::sim::loader::Program;

fn temp_file(name: &str, content: &str) -> String {
    let path = std::env::temp_dir().join(format!("pipesim-{}-{}", std::process::id(), name));
    fs::write(&path, content).expect("temp file should be writable");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_parse_basic_program() {
    let program = Program::parse(
        "\
# a comment line
00500093 ADDI x1, x0, 5

00A00113 ADDI x2, x0, 10
",
    )
    .unwrap();

    assert_eq!(program.len(), 2);
    assert_eq!(program.entries()[0].inst.raw, 0x00500093);
    assert_eq!(program.entries()[0].asm, "ADDI x1, x0, 5");
    assert_eq!(program.entries()[1].inst.raw, 0x00A00113);
}

#[test]
fn test_assembly_is_normalized() {
    let program = Program::parse(
        "00500093   ADDI   x1, x0, 5   # load five\n00A00113\t\tADDI x2,\tx0, 10\n",
    )
    .unwrap();

    assert_eq!(program.entries()[0].asm, "ADDI x1, x0, 5");
    assert_eq!(program.entries()[1].asm, "ADDI x2, x0, 10");
}

#[test]
fn test_missing_assembly_becomes_nop_label() {
    let program = Program::parse("00000013\n00500093 # only a comment\n").unwrap();
    assert_eq!(program.entries()[0].asm, "NOP");
    assert_eq!(program.entries()[1].asm, "NOP");
}

#[test]
fn test_hex_prefix_is_accepted() {
    let program = Program::parse("0x00500093 ADDI x1, x0, 5\n").unwrap();
    assert_eq!(program.entries()[0].inst.raw, 0x00500093);
}

#[test]
fn test_bad_machine_code_is_reported_with_line() {
    let err = Program::parse("00500093 ADDI x1, x0, 5\nzzzz bad line\n").unwrap_err();
    match err {
        SimError::BadMachineCode { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "zzzz");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_indented_comment_is_skipped() {
    let program = Program::parse("   # indented comment\n00500093 ADDI x1, x0, 5\n").unwrap();
    assert_eq!(program.len(), 1);
}

#[test]
fn test_load_missing_file_fails() {
    let err = Program::load("/nonexistent/path/to/program.txt").unwrap_err();
    assert!(matches!(err, SimError::ProgramRead { .. }));
}

#[test]
fn test_load_empty_file_fails() {
    let path = temp_file("empty.txt", "# nothing but comments\n\n");
    let err = Program::load(&path).unwrap_err();
    assert!(matches!(err, SimError::EmptyProgram(_)));
    fs::remove_file(&path).ok();
}

#[test]
fn test_load_round_trip() {
    let path = temp_file("prog.txt", "00500093 ADDI x1, x0, 5\n");
    let program = Program::load(&path).unwrap();
    assert_eq!(program.len(), 1);
    fs::remove_file(&path).ok();
}
