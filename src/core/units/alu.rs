//! Arithmetic Logic Unit.
//!
//! Implements the Execute-stage arithmetic for the base integer set and the
//! M extension. Division follows the architectural edge cases: division by
//! zero returns quotient -1 (signed) or all-ones (unsigned) with remainder
//! equal to the dividend; `i32::MIN / -1` returns quotient `i32::MIN` with
//! remainder 0. All arithmetic wraps.

use crate::isa::{funct3, funct7, opcodes, Instruction};

/// Bit mask for the 5-bit shift amount.
const SHAMT_MASK: i32 = 0x1f;

/// Integer ALU for the Execute stage.
///
/// Also produces the effective address for loads and stores (`rs1 + imm`)
/// and the link value for jumps (`pc + 4`). Branches and unknown opcodes
/// produce 0.
pub struct Alu;

impl Alu {
    /// Computes the ALU result for `inst` with resolved operand values.
    pub fn execute(inst: &Instruction, pc: u32, rs1_value: i32, rs2_value: i32) -> i32 {
        if inst.is_r_type() {
            if inst.is_mul_div() {
                Self::mul_div(inst.funct3, rs1_value, rs2_value)
            } else {
                Self::register_op(inst.funct3, inst.funct7, rs1_value, rs2_value)
            }
        } else if inst.opcode == opcodes::OP_IMM {
            Self::immediate_op(inst.funct3, rs1_value, inst.imm)
        } else if inst.is_load() || inst.is_store() {
            rs1_value.wrapping_add(inst.imm)
        } else if inst.is_jump() {
            pc.wrapping_add(4) as i32
        } else if inst.opcode == opcodes::OP_LUI {
            inst.imm
        } else if inst.opcode == opcodes::OP_AUIPC {
            pc.wrapping_add(inst.imm as u32) as i32
        } else {
            0
        }
    }

    fn register_op(f3: u32, f7: u32, a: i32, b: i32) -> i32 {
        match f3 {
            funct3::ADD_SUB => {
                if f7 == funct7::SUB {
                    a.wrapping_sub(b)
                } else {
                    a.wrapping_add(b)
                }
            }
            funct3::SLL => a.wrapping_shl((b & SHAMT_MASK) as u32),
            funct3::SLT => (a < b) as i32,
            funct3::SLTU => ((a as u32) < (b as u32)) as i32,
            funct3::XOR => a ^ b,
            funct3::SRL_SRA => {
                if f7 == funct7::SRA {
                    a >> (b & SHAMT_MASK)
                } else {
                    ((a as u32) >> (b & SHAMT_MASK)) as i32
                }
            }
            funct3::OR => a | b,
            funct3::AND => a & b,
            _ => 0,
        }
    }

    fn immediate_op(f3: u32, a: i32, imm: i32) -> i32 {
        match f3 {
            funct3::ADD_SUB => a.wrapping_add(imm),
            funct3::SLT => (a < imm) as i32,
            funct3::SLTU => ((a as u32) < (imm as u32)) as i32,
            funct3::XOR => a ^ imm,
            funct3::OR => a | imm,
            funct3::AND => a & imm,
            funct3::SLL => a.wrapping_shl((imm & SHAMT_MASK) as u32),
            funct3::SRL_SRA => {
                // Bit 30 of the word (imm bits 11..5 = 0x20) selects SRAI.
                if (imm >> 5) & 0x7f == funct7::SRA as i32 {
                    a >> (imm & SHAMT_MASK)
                } else {
                    ((a as u32) >> (imm & SHAMT_MASK)) as i32
                }
            }
            _ => 0,
        }
    }

    fn mul_div(f3: u32, a: i32, b: i32) -> i32 {
        match f3 {
            funct3::MUL => a.wrapping_mul(b),
            funct3::MULH => ((a as i64 * b as i64) >> 32) as i32,
            funct3::MULHSU => ((a as i64 * (b as u32) as i64) >> 32) as i32,
            funct3::MULHU => (((a as u32) as u64 * (b as u32) as u64) >> 32) as i32,
            funct3::DIV => {
                if b == 0 {
                    -1
                } else {
                    a.wrapping_div(b)
                }
            }
            funct3::DIVU => {
                if b == 0 {
                    -1
                } else {
                    ((a as u32) / (b as u32)) as i32
                }
            }
            funct3::REM => {
                if b == 0 {
                    a
                } else {
                    a.wrapping_rem(b)
                }
            }
            funct3::REMU => {
                if b == 0 {
                    a
                } else {
                    ((a as u32) % (b as u32)) as i32
                }
            }
            _ => 0,
        }
    }
}
