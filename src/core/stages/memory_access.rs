use crate::common::SimError;
use crate::core::cpu::Processor;
use crate::isa::funct3;

pub fn mem_stage(cpu: &mut Processor) -> Result<(), SimError> {
    if !cpu.ex_mem.valid {
        cpu.mem_wb.clear();
        return Ok(());
    }

    let inst = cpu.ex_mem.inst;
    let mut latch = cpu.ex_mem;

    if inst.is_load() {
        let addr = latch.alu_result as u32;
        latch.read_data = match inst.funct3 {
            funct3::LB => cpu.dmem.read_byte(addr)? as i8 as i32,
            funct3::LH => cpu.dmem.read_half(addr)? as i16 as i32,
            funct3::LW => cpu.dmem.read_word(addr)? as i32,
            funct3::LBU => cpu.dmem.read_byte(addr)? as i32,
            funct3::LHU => cpu.dmem.read_half(addr)? as i32,
            _ => 0,
        };
        if cpu.trace_enabled() {
            eprintln!(
                "MEM pc={:#x} load addr={:#x} data={:#x}",
                latch.pc, addr, latch.read_data
            );
        }
    } else if inst.is_store() {
        let addr = latch.alu_result as u32;
        let value = latch.rs2_value;
        match inst.funct3 {
            funct3::SB => cpu.dmem.write_byte(addr, value as u8)?,
            funct3::SH => cpu.dmem.write_half(addr, value as u16)?,
            funct3::SW => cpu.dmem.write_word(addr, value as u32)?,
            _ => {}
        }
        if cpu.trace_enabled() {
            eprintln!(
                "MEM pc={:#x} store addr={:#x} data={:#x}",
                latch.pc, addr, value
            );
        }
    }

    cpu.mem_wb = latch;
    Ok(())
}
