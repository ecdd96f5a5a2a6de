//! FizzBuzz classification and the command-line driver around it.
//!
//! - **[`core`]**: Pure, deterministic logic (classification, sequences).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (configuration files).
//!
//! [`args`] validates the iteration count and [`run`] writes the sequence.

pub mod args;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
