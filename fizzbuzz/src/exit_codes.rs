//! Stable exit codes for the fizzbuzz CLI.

/// Sequence printed successfully.
pub const OK: i32 = 0;
/// Invalid or non-positive count, bad configuration, or an output failure.
pub const INVALID: i32 = 1;
