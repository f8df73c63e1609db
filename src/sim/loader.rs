//! Program loader.
//!
//! Parses the text program format: one instruction per line as a hexadecimal
//! 32-bit machine word followed by the original assembly source (which may
//! carry a `#` comment tail). Blank lines and lines whose first non-space
//! character is `#` are skipped. Instructions receive PCs 0, 4, 8, ... in
//! file order.

use std::fs;

use crate::common::SimError;
use crate::isa::Instruction;

/// One program slot: the decoded instruction and its display text.
#[derive(Clone, Debug)]
pub struct ProgramEntry {
    /// Decoded machine word.
    pub inst: Instruction,
    /// Normalized assembly text (comments stripped, whitespace collapsed,
    /// empty lines become "NOP").
    pub asm: String,
}

/// A loaded program in file order.
#[derive(Clone, Debug, Default)]
pub struct Program {
    entries: Vec<ProgramEntry>,
}

impl Program {
    /// Loads and parses a program file. A file that yields zero
    /// instructions is an error.
    pub fn load(path: &str) -> Result<Self, SimError> {
        let source = fs::read_to_string(path).map_err(|source| SimError::ProgramRead {
            path: path.to_string(),
            source,
        })?;
        let program = Self::parse(&source)?;
        if program.entries.is_empty() {
            return Err(SimError::EmptyProgram(path.to_string()));
        }
        Ok(program)
    }

    /// Parses program text. May yield an empty program; `load` rejects that.
    pub fn parse(source: &str) -> Result<Self, SimError> {
        let mut entries = Vec::new();
        for (idx, line) in source.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (token, rest) = match trimmed.split_once(char::is_whitespace) {
                Some((token, rest)) => (token, rest),
                None => (trimmed, ""),
            };
            let word = u32::from_str_radix(token.trim_start_matches("0x"), 16).map_err(|_| {
                SimError::BadMachineCode {
                    line: idx + 1,
                    token: token.to_string(),
                }
            })?;

            entries.push(ProgramEntry {
                inst: Instruction::decode(word),
                asm: normalize_assembly(rest),
            });
        }
        Ok(Self { entries })
    }

    /// The program slots in file (= PC) order.
    pub fn entries(&self) -> &[ProgramEntry] {
        &self.entries
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strips the `#` comment tail and collapses whitespace; an empty result
/// becomes "NOP" for diagram labeling.
fn normalize_assembly(text: &str) -> String {
    let code = text.split('#').next().unwrap_or("");
    let collapsed = code.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        "NOP".to_string()
    } else {
        collapsed
    }
}
