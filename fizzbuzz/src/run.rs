//! Sequence output for the CLI.

use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::core::sequence::sequence;

/// Write `classify(i)` for `i` in `1..=count`, one per line, to `writer`.
///
/// Output is buffered and flushed once at the end.
pub fn run_to<W: Write>(count: i64, writer: W) -> io::Result<()> {
    let mut out = BufWriter::new(writer);
    for label in sequence(count) {
        writeln!(out, "{label}")?;
    }
    out.flush()?;
    debug!(count, "sequence written");
    Ok(())
}

/// Write the sequence for `count` to stdout.
pub fn run(count: i64) -> io::Result<()> {
    run_to(count, io::stdout().lock())
}
