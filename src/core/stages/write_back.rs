use crate::core::cpu::Processor;

pub fn wb_stage(cpu: &mut Processor) {
    if !cpu.mem_wb.valid {
        return;
    }

    let inst = cpu.mem_wb.inst;

    if inst.writes_reg() {
        let value = if inst.is_load() {
            cpu.mem_wb.read_data
        } else {
            cpu.mem_wb.alu_result
        };
        cpu.regs.write(inst.rd, value);

        if cpu.trace_enabled() {
            eprintln!("WB  pc={:#x} x{} <- {:#x}", cpu.mem_wb.pc, inst.rd, value);
        }
    }

    // Synthetic NOPs fetched past the end of the program drain through the
    // pipeline but do not retire.
    if cpu.imem.contains(cpu.mem_wb.pc) {
        cpu.stats.instructions_retired += 1;
    }
}
