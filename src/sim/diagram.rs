//! Pipeline occupancy recorder.
//!
//! One row per program slot, keyed by PC (never by assembly text, which
//! cannot distinguish identical instructions at different addresses). After
//! every tick the engine stamps the stage each non-bubble latch will occupy
//! during the upcoming cycle; unstamped cells become "-". Rendering produces
//! the cycle-numbered table on stdout.

use serde::Serialize;

use crate::sim::loader::Program;

/// Pipeline stage tags recorded in the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    If,
    Id,
    Ex,
    Mem,
    Wb,
}

impl Stage {
    /// Diagram cell text for this stage.
    pub fn tag(self) -> &'static str {
        match self {
            Stage::If => "IF",
            Stage::Id => "ID",
            Stage::Ex => "EX",
            Stage::Mem => "MEM",
            Stage::Wb => "WB",
        }
    }
}

/// One occupancy row: a program slot and its per-cycle stage cells.
#[derive(Clone, Debug, Serialize)]
pub struct SlotRow {
    /// Normalized assembly text for labeling.
    pub assembly: String,
    /// Program-slot PC.
    pub pc: u32,
    /// First cycle the slot entered the pipeline; -1 if it never did.
    pub first_cycle: i64,
    /// Per-cycle stage cells: a tag, "-", or a slash-joined composite.
    pub stages: Vec<String>,
}

/// Dense row-per-slot, column-per-cycle occupancy table.
#[derive(Clone, Debug, Serialize)]
pub struct DiagramTable {
    rows: Vec<SlotRow>,
}

impl DiagramTable {
    /// Preallocates one row per program slot and seeds the first slot as
    /// being fetched during cycle 0.
    pub fn new(program: &Program) -> Self {
        let mut table = Self {
            rows: program
                .entries()
                .iter()
                .enumerate()
                .map(|(i, entry)| SlotRow {
                    assembly: entry.asm.clone(),
                    pc: (i * 4) as u32,
                    first_cycle: -1,
                    stages: Vec::new(),
                })
                .collect(),
        };
        table.seed();
        table
    }

    fn seed(&mut self) {
        if let Some(first) = self.rows.first_mut() {
            first.first_cycle = 0;
            first.stages.push(Stage::If.tag().to_string());
        }
    }

    /// Clears all recorded stages back to the freshly loaded state.
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.first_cycle = -1;
            row.stages.clear();
        }
        self.seed();
    }

    /// Records `stage` for the slot at `pc` in column `cycle`. Unknown PCs
    /// (instructions fetched past the program image) are ignored. A second
    /// tag in the same cell joins as "first/second" unless it merely repeats
    /// the slot's previous-cycle tag, in which case it is dropped.
    pub fn stamp(&mut self, pc: u32, stage: Stage, cycle: usize) {
        let Some(row) = self.rows.iter_mut().find(|r| r.pc == pc) else {
            return;
        };

        if row.first_cycle < 0 {
            row.first_cycle = cycle as i64;
        }
        if row.stages.len() <= cycle {
            row.stages.resize(cycle + 1, "-".to_string());
        }

        let tag = stage.tag();
        let repeats_previous = cycle > 0 && row.stages[cycle - 1] == tag;
        let cell = &mut row.stages[cycle];
        if cell == "-" {
            *cell = tag.to_string();
        } else if !repeats_previous {
            *cell = format!("{cell}/{tag}");
        }
    }

    /// Extends every row with "-" cells up to and including column `cycle`.
    pub fn pad(&mut self, cycle: usize) {
        for row in &mut self.rows {
            if row.stages.len() <= cycle {
                row.stages.resize(cycle + 1, "-".to_string());
            }
        }
    }

    /// All rows in program order.
    pub fn rows(&self) -> &[SlotRow] {
        &self.rows
    }

    /// The row for a given PC.
    pub fn row(&self, pc: u32) -> Option<&SlotRow> {
        self.rows.iter().find(|r| r.pc == pc)
    }

    /// Rows sorted by PC with cells truncated to the rendered cycle range,
    /// for structured (JSON) output.
    pub fn snapshot(&self, cycles: u64) -> Vec<SlotRow> {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|r| r.pc);
        for row in &mut rows {
            row.stages.truncate(cycles as usize);
        }
        rows
    }

    /// Renders the occupancy table over the first `cycles` columns.
    pub fn render(&self, cycles: u64) -> String {
        let cycles = cycles as usize;
        let label_width = self
            .rows
            .iter()
            .map(|r| r.assembly.len() + 10)
            .max()
            .unwrap_or(0)
            .max(15);
        let cell_width = self
            .rows
            .iter()
            .flat_map(|r| r.stages.iter())
            .map(String::len)
            .max()
            .unwrap_or(2)
            .max(2)
            + 3;

        let mut out = String::new();
        out.push_str(&format!("{:<label_width$}", "Instruction (PC)"));
        for i in 0..cycles {
            out.push_str(&format!("{:<cell_width$}", format!("; C{i}")));
        }
        out.push('\n');
        out.push_str(&"-".repeat(label_width + cycles * cell_width));
        out.push('\n');

        let mut rows: Vec<&SlotRow> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.pc);
        for row in rows {
            out.push_str(&format!(
                "{:<label_width$}",
                format!("{} ({})", row.assembly, row.pc)
            ));
            for i in 0..cycles {
                let cell = if row.first_cycle >= 0 {
                    row.stages.get(i).map(String::as_str).unwrap_or("-")
                } else {
                    "-"
                };
                out.push_str(&format!("{:<cell_width$}", format!("; {cell}")));
            }
            out.push('\n');
        }
        out
    }
}
