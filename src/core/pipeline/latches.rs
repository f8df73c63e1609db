//! Pipeline latch structure for inter-stage communication.
//!
//! One record shape serves all four latch positions (IF/ID, ID/EX, EX/MEM,
//! MEM/WB); each stage fills in the fields it is responsible for and the
//! downstream stage reads them on the next tick. A bubble is encoded by
//! clearing `valid`, never by a sentinel instruction.

use crate::isa::Instruction;

/// A pipeline latch between two stages.
///
/// Each latch is written by exactly one stage (its upstream producer) and
/// read by exactly one stage (its downstream consumer) per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageLatch {
    /// False when the latch holds a bubble.
    pub valid: bool,
    /// The in-flight instruction.
    pub inst: Instruction,
    /// PC of the in-flight instruction.
    pub pc: u32,
    /// ALU result (also the effective address for loads and stores).
    pub alu_result: i32,
    /// Data read from memory (loads only).
    pub read_data: i32,
    /// rs1 operand value snapshotted in ID (possibly replaced by a
    /// forwarded value in EX).
    pub rs1_value: i32,
    /// rs2 operand value snapshotted in ID (possibly replaced by a
    /// forwarded value in EX); store data for stores.
    pub rs2_value: i32,
    /// The instruction is a conditional branch or a jump.
    pub is_branch_or_jump: bool,
    /// The control transfer was resolved taken.
    pub branch_taken: bool,
    /// Resolved control-transfer target.
    pub branch_target: u32,
}

impl StageLatch {
    /// Resets the latch to the bubble state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
