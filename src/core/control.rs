//! Branch and jump control.
//!
//! Target computation and condition evaluation shared by both hazard
//! policies. The non-forwarding datapath evaluates these in ID with freshly
//! snapshotted registers; the forwarding datapath evaluates them in EX with
//! forwarded operands.

use crate::isa::{funct3, Instruction};

/// Conditional branch target: PC of the branch plus the B-immediate.
pub fn branch_target(inst: &Instruction, pc: u32) -> u32 {
    pc.wrapping_add(inst.imm as u32)
}

/// Jump target: `pc + imm` for JAL, `(rs1 + imm) & !1` for JALR.
pub fn jump_target(inst: &Instruction, pc: u32, rs1_value: i32) -> u32 {
    if inst.is_j_type() {
        pc.wrapping_add(inst.imm as u32)
    } else {
        (rs1_value.wrapping_add(inst.imm) as u32) & !1
    }
}

/// Evaluates a branch condition. Unknown funct3 values are never taken.
pub fn branch_taken(f3: u32, rs1_value: i32, rs2_value: i32) -> bool {
    match f3 {
        funct3::BEQ => rs1_value == rs2_value,
        funct3::BNE => rs1_value != rs2_value,
        funct3::BLT => rs1_value < rs2_value,
        funct3::BGE => rs1_value >= rs2_value,
        funct3::BLTU => (rs1_value as u32) < (rs2_value as u32),
        funct3::BGEU => (rs1_value as u32) >= (rs2_value as u32),
        _ => false,
    }
}
