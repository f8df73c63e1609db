//! Simulator error types.
//!
//! Every error here is fatal to the run: nothing is retried, and on a memory
//! error the partially built occupancy diagram is not rendered.

use thiserror::Error;

/// Top-level error type for the simulator.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("could not open instruction file '{path}': {source}")]
    ProgramRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no valid instructions found in file: {0}")]
    EmptyProgram(String),

    #[error("invalid machine code '{token}' on line {line}")]
    BadMachineCode { line: usize, token: String },

    #[error("could not read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("memory address out of bounds: {addr:#010x} ({len}-byte access, memory size {size:#x})")]
    AddressOutOfRange { addr: u32, len: u32, size: usize },
}
