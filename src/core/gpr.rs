//! Architectural integer register file.
//!
//! Contains the 32 general-purpose registers (x0-x31) and enforces the
//! architectural invariant that register x0 is hardwired to zero.

/// General-purpose register file.
///
/// Register x0 always reads as zero and silently discards writes.
/// Out-of-range indices behave like x0: reads return 0, writes are ignored.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [i32; 32],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a register value. x0 and out-of-range indices read as 0.
    pub fn read(&self, idx: usize) -> i32 {
        if idx == 0 {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Writes a register value. Writes to x0 and out-of-range indices are
    /// silently ignored.
    pub fn write(&mut self, idx: usize, val: i32) {
        if idx != 0 && idx < self.regs.len() {
            self.regs[idx] = val;
        }
    }

    /// Resets all 32 registers to zero.
    pub fn reset(&mut self) {
        self.regs = [0; 32];
    }

    /// Dumps the register contents to stderr, two per line.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            eprintln!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
