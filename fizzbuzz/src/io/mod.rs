//! I/O helpers for the CLI.

pub mod config;
