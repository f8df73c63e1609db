//! Occupancy recorder tests: stamping rules, composite cells, padding,
//! and table rendering.

use riscv_pipesim::sim::diagram::{DiagramTable, Stage};
use riscv_pipesim::sim::loader::Program;

fn table() -> DiagramTable {
    let program = Program::parse(
        "\
00500093 ADDI x1, x0, 5
00A00113 ADDI x2, x0, 10
002081B3 ADD x3, x1, x2
",
    )
    .unwrap();
    DiagramTable::new(&program)
}

#[test]
fn test_rows_are_preallocated_by_pc() {
    let table = table();
    assert_eq!(table.rows().len(), 3);
    assert_eq!(table.rows()[0].pc, 0);
    assert_eq!(table.rows()[1].pc, 4);
    assert_eq!(table.rows()[2].pc, 8);
    assert_eq!(table.rows()[1].assembly, "ADDI x2, x0, 10");
}

#[test]
fn test_first_slot_is_seeded_in_fetch() {
    let table = table();
    assert_eq!(table.rows()[0].first_cycle, 0);
    assert_eq!(table.rows()[0].stages, vec!["IF".to_string()]);
    assert_eq!(table.rows()[1].first_cycle, -1);
}

#[test]
fn test_stamp_records_first_cycle_and_pads() {
    let mut table = table();
    table.stamp(4, Stage::If, 3);
    table.pad(3);

    let row = table.row(4).unwrap();
    assert_eq!(row.first_cycle, 3);
    assert_eq!(row.stages, vec!["-", "-", "-", "IF"]);

    let untouched = table.row(8).unwrap();
    assert_eq!(untouched.first_cycle, -1);
    assert_eq!(untouched.stages, vec!["-", "-", "-", "-"]);
}

#[test]
fn test_repeated_tag_across_cycles_is_recorded() {
    let mut table = table();
    table.stamp(4, Stage::Id, 2);
    table.stamp(4, Stage::Id, 3);
    table.stamp(4, Stage::Id, 4);

    let row = table.row(4).unwrap();
    assert_eq!(
        row.stages,
        vec!["-", "-", "ID", "ID", "ID"],
        "a stalled instruction shows consecutive identical cells"
    );
}

#[test]
fn test_two_tags_in_one_cycle_join_with_slash() {
    let mut table = table();
    // A re-fetched slot can be in WB (old incarnation) and IF (refetch)
    // during the same cycle.
    table.stamp(4, Stage::Wb, 5);
    table.stamp(4, Stage::If, 5);

    assert_eq!(table.row(4).unwrap().stages[5], "WB/IF");
}

#[test]
fn test_second_tag_equal_to_previous_cycle_is_dropped() {
    let mut table = table();
    table.stamp(4, Stage::If, 4);
    table.stamp(4, Stage::Wb, 5);
    table.stamp(4, Stage::If, 5);

    assert_eq!(
        table.row(4).unwrap().stages[5],
        "WB",
        "an IF repeating the previous cycle's IF does not join"
    );
}

#[test]
fn test_stamp_for_unknown_pc_is_ignored() {
    let mut table = table();
    table.stamp(400, Stage::If, 1);
    assert!(table.row(400).is_none());
    assert!(table.rows().iter().all(|r| r.pc != 400));
}

#[test]
fn test_render_layout() {
    let mut table = table();
    table.stamp(0, Stage::Id, 1);
    table.stamp(4, Stage::If, 1);
    table.pad(1);

    let out = table.render(2);
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with("Instruction (PC)"));
    assert!(lines[0].contains("; C0"));
    assert!(lines[0].contains("; C1"));
    assert!(lines[1].chars().all(|c| c == '-'), "separator row");
    assert!(lines[2].starts_with("ADDI x1, x0, 5 (0)"));
    assert!(lines[2].contains("; IF"));
    assert!(lines[2].contains("; ID"));
    assert!(lines[3].starts_with("ADDI x2, x0, 10 (4)"));
    // The third slot never entered the pipeline: all dashes.
    assert!(lines[4].starts_with("ADD x3, x1, x2 (8)"));
    assert!(!lines[4].contains("IF"));
}

#[test]
fn test_render_does_not_show_lookahead_column() {
    let mut table = table();
    // A stamp one past the rendered range (the engine stamps the upcoming
    // cycle after the final tick) must not appear.
    table.stamp(0, Stage::Id, 2);
    let out = table.render(2);
    assert!(!out.contains("ID"));
}

#[test]
fn test_snapshot_truncates_and_sorts() {
    let mut table = table();
    table.stamp(0, Stage::Id, 1);
    table.stamp(0, Stage::Ex, 2);
    table.pad(2);

    let rows = table.snapshot(2);
    assert_eq!(rows.len(), 3);
    assert!(rows.windows(2).all(|w| w[0].pc < w[1].pc));
    assert_eq!(rows[0].stages, vec!["IF", "ID"]);
}

#[test]
fn test_reset_restores_seeded_state() {
    let mut table = table();
    table.stamp(4, Stage::Id, 2);
    table.pad(4);
    table.reset();

    assert_eq!(table.rows()[0].stages, vec!["IF".to_string()]);
    assert_eq!(table.rows()[1].first_cycle, -1);
    assert!(table.rows()[1].stages.is_empty());
}
