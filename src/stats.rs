//! Simulation statistics collection and reporting.

use serde::Serialize;

/// Counters accumulated over a run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SimStats {
    /// Clock ticks executed.
    pub cycles: u64,
    /// Program instructions that completed write-back.
    pub instructions_retired: u64,
    /// Ticks spent stalled on a data hazard.
    pub stalls_data: u64,
    /// Taken branches and jumps (each costs a pipeline flush).
    pub flushes: u64,
}

impl SimStats {
    /// Prints a summary report to stderr (stdout is reserved for the
    /// occupancy diagram).
    pub fn print(&self) {
        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1);

        eprintln!("==========================================");
        eprintln!("PIPELINE SIMULATION STATISTICS");
        eprintln!("==========================================");
        eprintln!("sim_cycles               {}", self.cycles);
        eprintln!("sim_insts                {}", self.instructions_retired);
        eprintln!(
            "sim_ipc                  {:.4}",
            self.instructions_retired as f64 / cyc as f64
        );
        eprintln!("sim_cpi                  {:.4}", cyc as f64 / instr as f64);
        eprintln!(
            "stalls.data              {} ({:.2}%)",
            self.stalls_data,
            (self.stalls_data as f64 / cyc as f64) * 100.0
        );
        eprintln!("flushes.control          {}", self.flushes);
        eprintln!("==========================================");
    }
}
