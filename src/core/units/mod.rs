//! Execution units.

/// Integer ALU including the M extension.
pub mod alu;

pub use alu::Alu;
