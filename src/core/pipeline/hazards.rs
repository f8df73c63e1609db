//! Data hazard detection and forwarding.
//!
//! Both hazard policies observe the latches after the downstream stages have
//! run but before ID and IF, so ID/EX still shows the instruction that just
//! executed. A producer counts only if it actually writes a non-zero
//! destination register; an rs2 dependency counts only for formats that read
//! rs2 (I-, U- and J-type reuse those bits for the immediate).

use crate::core::gpr::RegisterFile;
use crate::core::pipeline::latches::StageLatch;
use crate::isa::Instruction;

/// True when `consumer` reads a register that `producer` is still producing.
fn raw_dependency(consumer: &Instruction, producer: &StageLatch) -> bool {
    if !producer.valid || !producer.inst.writes_reg() {
        return false;
    }
    let rd = producer.inst.rd;
    rd != 0 && (consumer.rs1 == rd || (consumer.rs2 == rd && consumer.reads_rs2()))
}

/// Non-forwarding policy: stall the IF/ID instruction while any of ID/EX,
/// EX/MEM, MEM/WB is producing one of its sources.
///
/// An instruction that completed write-back earlier this tick has already
/// updated the register file (WB runs before ID), so it is no longer in any
/// of the three latches and correctly causes no stall.
pub fn needs_raw_stall(
    if_id: &StageLatch,
    id_ex: &StageLatch,
    ex_mem: &StageLatch,
    mem_wb: &StageLatch,
) -> bool {
    if !if_id.valid {
        return false;
    }
    let consumer = &if_id.inst;
    raw_dependency(consumer, id_ex)
        || raw_dependency(consumer, ex_mem)
        || raw_dependency(consumer, mem_wb)
}

/// Forwarding policy: stall only for the load-use hazard, where ID/EX holds
/// a load whose destination is a source of the IF/ID instruction.
pub fn needs_load_use_stall(if_id: &StageLatch, id_ex: &StageLatch) -> bool {
    if !if_id.valid || !id_ex.valid || !id_ex.inst.is_load() {
        return false;
    }
    let rd = id_ex.inst.rd;
    let consumer = &if_id.inst;
    rd != 0 && (consumer.rs1 == rd || (consumer.rs2 == rd && consumer.reads_rs2()))
}

/// Forwarding operand selection for the EX stage.
///
/// Starts from a register-file read taken now — WB ran earlier this tick,
/// so producers two or more slots ahead are already architectural — then
/// overrides each operand from the MEM/WB latch when it is producing to it
/// (`read_data` for loads, `alu_result` otherwise). An EX/MEM path is not
/// needed: the one case it would cover, load-use, is stalled instead.
pub fn forwarded_operands(
    inst: &Instruction,
    regs: &RegisterFile,
    mem_wb: &StageLatch,
) -> (i32, i32) {
    let mut rs1_value = regs.read(inst.rs1);
    let mut rs2_value = regs.read(inst.rs2);

    if mem_wb.valid && mem_wb.inst.writes_reg() && mem_wb.inst.rd != 0 {
        let value = if mem_wb.inst.is_load() {
            mem_wb.read_data
        } else {
            mem_wb.alu_result
        };
        if inst.rs1 == mem_wb.inst.rd {
            rs1_value = value;
        }
        if inst.rs2 == mem_wb.inst.rd {
            rs2_value = value;
        }
    }

    (rs1_value, rs2_value)
}
