//! Pipeline stage implementations.
//!
//! One function per stage, invoked by the engine in reverse pipeline order
//! (WB, MEM, EX, then after hazard detection ID and IF) so that every stage
//! reads its upstream latch as it was at the start of the tick.

/// ID: decode, operand snapshot, non-forwarding branch resolution.
pub mod decode;

/// EX: ALU, forwarding operand selection, forwarding branch resolution.
pub mod execute;

/// IF: fetch and PC advance, redirect consumption.
pub mod fetch;

/// MEM: sized loads and stores.
pub mod memory_access;

/// WB: register-file write-back and retirement.
pub mod write_back;
