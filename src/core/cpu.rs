//! Pipeline engine.
//!
//! Owns the architectural state, the four inter-stage latches, and the
//! occupancy recorder, and advances the machine one clock tick at a time.
//! Stages run in reverse pipeline order so each reads its upstream latch as
//! it was at the start of the tick; hazard detection runs between EX and ID
//! so that ID and IF can honor the stall it raises.

use crate::common::SimError;
use crate::config::Config;
use crate::core::gpr::RegisterFile;
use crate::core::memory::{DataMemory, InstructionMemory};
use crate::core::pipeline::{hazards, StageLatch};
use crate::core::stages;
use crate::sim::diagram::{DiagramTable, Stage};
use crate::sim::loader::Program;
use crate::stats::SimStats;

/// Data-hazard policy selecting which hazard detector and branch
/// resolution stage the shared datapath uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazardPolicy {
    /// Stall the consumer in ID until every producer has written back;
    /// branches and jumps resolve in ID (one-bubble penalty).
    NonForwarding,
    /// Forward results from MEM/WB into EX and stall only for load-use;
    /// branches and jumps resolve in EX (two-bubble penalty).
    Forwarding,
}

/// The five-stage in-order pipeline simulator.
pub struct Processor {
    pub regs: RegisterFile,
    pub pc: u32,
    pub imem: InstructionMemory,
    pub dmem: DataMemory,

    pub if_id: StageLatch,
    pub id_ex: StageLatch,
    pub ex_mem: StageLatch,
    pub mem_wb: StageLatch,

    /// Raised by the hazard unit each tick; consumed by ID and IF.
    pub stall: bool,
    /// Single-slot redirect mailbox: a taken control transfer posts the
    /// target here and IF consumes it at the next fetch boundary.
    pub redirect: Option<u32>,

    pub policy: HazardPolicy,
    pub stats: SimStats,
    pub trace: bool,

    diagram: DiagramTable,
}

impl Processor {
    /// Builds a processor over a loaded program.
    pub fn new(policy: HazardPolicy, program: &Program, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            imem: InstructionMemory::new(program),
            dmem: DataMemory::new(config.memory.data_size_val()),
            if_id: StageLatch::default(),
            id_ex: StageLatch::default(),
            ex_mem: StageLatch::default(),
            mem_wb: StageLatch::default(),
            stall: false,
            redirect: None,
            policy,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            diagram: DiagramTable::new(program),
        }
    }

    /// Whether per-stage trace lines go to stderr.
    pub fn trace_enabled(&self) -> bool {
        cfg!(feature = "always-trace") || self.trace
    }

    /// Advances the pipeline by one clock tick.
    pub fn tick(&mut self) -> Result<(), SimError> {
        stages::write_back::wb_stage(self);
        stages::memory_access::mem_stage(self)?;
        stages::execute::execute_stage(self);

        self.stall = match self.policy {
            HazardPolicy::NonForwarding => {
                hazards::needs_raw_stall(&self.if_id, &self.id_ex, &self.ex_mem, &self.mem_wb)
            }
            HazardPolicy::Forwarding => {
                let stall = hazards::needs_load_use_stall(&self.if_id, &self.id_ex);
                if stall {
                    // The load-use bubble materializes this tick.
                    self.id_ex.clear();
                }
                stall
            }
        };
        if self.stall {
            self.stats.stalls_data += 1;
        }

        stages::decode::decode_stage(self);
        stages::fetch::fetch_stage(self);

        self.stats.cycles += 1;
        self.record_occupancy();
        Ok(())
    }

    /// Runs the simulation for `cycles` ticks. Running N then M cycles is
    /// equivalent to running N + M at once.
    pub fn run(&mut self, cycles: u64) -> Result<(), SimError> {
        for _ in 0..cycles {
            self.tick()?;
        }
        Ok(())
    }

    /// Restores power-on state: registers, memory, latches, counters, and
    /// recorded occupancy. The program itself is retained.
    pub fn reset(&mut self) {
        self.pc = 0;
        self.stall = false;
        self.redirect = None;
        self.regs.reset();
        self.dmem.reset();
        self.if_id.clear();
        self.id_ex.clear();
        self.ex_mem.clear();
        self.mem_wb.clear();
        self.stats = SimStats::default();
        self.diagram.reset();
    }

    /// The occupancy table recorded so far.
    pub fn diagram(&self) -> &DiagramTable {
        &self.diagram
    }

    /// Stamps the occupancy table with the stage each latch will occupy
    /// during the upcoming cycle. ID and IF are stamped even while stalled
    /// (a held instruction shows repeated cells); the IF stamp follows the
    /// PC about to be fetched and is skipped outside the program image.
    fn record_occupancy(&mut self) {
        let cycle = self.stats.cycles as usize;
        if self.mem_wb.valid {
            self.diagram.stamp(self.mem_wb.pc, Stage::Wb, cycle);
        }
        if self.ex_mem.valid {
            self.diagram.stamp(self.ex_mem.pc, Stage::Mem, cycle);
        }
        if self.id_ex.valid {
            self.diagram.stamp(self.id_ex.pc, Stage::Ex, cycle);
        }
        if self.if_id.valid {
            self.diagram.stamp(self.if_id.pc, Stage::Id, cycle);
        }
        if self.imem.contains(self.pc) {
            self.diagram.stamp(self.pc, Stage::If, cycle);
        }
        self.diagram.pad(cycle);
    }
}
