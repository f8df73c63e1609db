use crate::core::control;
use crate::core::cpu::{HazardPolicy, Processor};
use crate::core::pipeline::{hazards, StageLatch};
use crate::core::units::Alu;

pub fn execute_stage(cpu: &mut Processor) {
    if !cpu.id_ex.valid {
        cpu.ex_mem.clear();
        return;
    }

    let inst = cpu.id_ex.inst;
    let pc = cpu.id_ex.pc;

    let (rs1_value, rs2_value) = match cpu.policy {
        HazardPolicy::NonForwarding => (cpu.id_ex.rs1_value, cpu.id_ex.rs2_value),
        HazardPolicy::Forwarding => hazards::forwarded_operands(&inst, &cpu.regs, &cpu.mem_wb),
    };

    let mut latch = StageLatch {
        valid: true,
        inst,
        pc,
        rs1_value,
        rs2_value,
        alu_result: Alu::execute(&inst, pc, rs1_value, rs2_value),
        is_branch_or_jump: cpu.id_ex.is_branch_or_jump,
        branch_taken: cpu.id_ex.branch_taken,
        branch_target: cpu.id_ex.branch_target,
        read_data: 0,
    };

    // The forwarding datapath defers control transfers to EX so the
    // comparison sees forwarded operands. A misprediction costs two
    // bubbles: both upstream latches flush.
    if cpu.policy == HazardPolicy::Forwarding && latch.is_branch_or_jump {
        if inst.is_branch() {
            latch.branch_target = control::branch_target(&inst, pc);
            latch.branch_taken = control::branch_taken(inst.funct3, rs1_value, rs2_value);
        } else {
            latch.branch_target = control::jump_target(&inst, pc, rs1_value);
            latch.branch_taken = true;
        }

        if latch.branch_taken {
            cpu.if_id.clear();
            cpu.id_ex.clear();
            cpu.redirect = Some(latch.branch_target);
            cpu.stats.flushes += 1;
        }
    }

    if cpu.trace_enabled() {
        eprintln!(
            "EX  pc={:#x} inst={:#010x} result={:#x}",
            pc, inst.raw, latch.alu_result
        );
    }

    cpu.ex_mem = latch;
}
