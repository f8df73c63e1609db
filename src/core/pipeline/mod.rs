//! Instruction pipeline plumbing.
//!
//! Contains the inter-stage latches shared by the five pipeline stages and
//! the hazard detection / forwarding logic for both hazard policies.

/// Hazard detection and forwarding operand selection.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

pub use latches::StageLatch;
