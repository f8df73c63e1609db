//! Simulation harness: program loading and diagram rendering.

/// Occupancy recorder and pipeline diagram rendering.
pub mod diagram;

/// Program text loader (hex machine words plus assembly).
pub mod loader;

pub use diagram::{DiagramTable, Stage};
pub use loader::Program;
