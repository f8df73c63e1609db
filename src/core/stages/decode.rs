use crate::core::control;
use crate::core::cpu::{HazardPolicy, Processor};
use crate::core::pipeline::StageLatch;

pub fn decode_stage(cpu: &mut Processor) {
    if !cpu.if_id.valid {
        cpu.id_ex.clear();
        return;
    }

    if cpu.stall {
        // Inject a bubble; IF/ID is left untouched.
        cpu.id_ex.clear();
        return;
    }

    let inst = cpu.if_id.inst;
    let pc = cpu.if_id.pc;
    let rs1_value = cpu.regs.read(inst.rs1);
    let rs2_value = cpu.regs.read(inst.rs2);

    if cpu.trace_enabled() {
        eprintln!(
            "ID  pc={:#x} inst={:#010x} rs1=x{} v={:#x} rs2=x{} v={:#x}",
            pc, inst.raw, inst.rs1, rs1_value, inst.rs2, rs2_value
        );
    }

    let mut latch = StageLatch {
        valid: true,
        inst,
        pc,
        rs1_value,
        rs2_value,
        is_branch_or_jump: inst.is_branch() || inst.is_jump(),
        ..StageLatch::default()
    };

    // The non-forwarding datapath resolves control transfers here: the
    // snapshots are fresh because any producer has been stalled until its
    // write-back, which ran earlier this tick.
    if cpu.policy == HazardPolicy::NonForwarding && latch.is_branch_or_jump {
        if inst.is_branch() {
            latch.branch_target = control::branch_target(&inst, pc);
            latch.branch_taken = control::branch_taken(inst.funct3, rs1_value, rs2_value);
        } else {
            latch.branch_target = control::jump_target(&inst, pc, rs1_value);
            latch.branch_taken = true;
        }

        if latch.branch_taken {
            cpu.if_id.clear();
            cpu.redirect = Some(latch.branch_target);
            cpu.stats.flushes += 1;
        }
    }

    cpu.id_ex = latch;
}
