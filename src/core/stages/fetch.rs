use crate::core::cpu::Processor;
use crate::core::pipeline::StageLatch;

pub fn fetch_stage(cpu: &mut Processor) {
    // A taken branch or jump resolved earlier this tick posted a redirect;
    // it perturbs the PC only here, at the fetch boundary.
    if let Some(target) = cpu.redirect.take() {
        cpu.if_id.clear();
        cpu.pc = target;
        return;
    }

    if cpu.stall {
        // IF/ID holds; the same instruction re-presents at ID next tick.
        return;
    }

    let inst = cpu.imem.fetch(cpu.pc);

    if cpu.trace_enabled() {
        eprintln!("IF  pc={:#x} inst={:#010x}", cpu.pc, inst.raw);
    }

    cpu.if_id = StageLatch {
        valid: true,
        inst,
        pc: cpu.pc,
        ..StageLatch::default()
    };
    cpu.pc = cpu.pc.wrapping_add(4);
}
