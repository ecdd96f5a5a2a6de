//! Ascending label sequences.

use crate::core::classifier::{Label, label};

/// Labels for `1..=count` in ascending order.
///
/// A non-positive `count` yields an empty sequence.
pub fn sequence(count: i64) -> impl Iterator<Item = Label> {
    (1..=count).map(label)
}
