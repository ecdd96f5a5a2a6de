//! Deterministic, pure logic.
//!
//! Core modules must be free of I/O side effects.

pub mod classifier;
pub mod sequence;
