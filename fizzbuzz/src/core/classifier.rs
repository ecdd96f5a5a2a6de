//! Divisibility-based classification of integers.

use std::fmt;

/// Output value for a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Divisible by both 3 and 5.
    FizzBuzz,
    /// Divisible by 3 only.
    Fizz,
    /// Divisible by 5 only.
    Buzz,
    /// Divisible by neither; printed as the decimal value.
    Number(i64),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::FizzBuzz => f.write_str("FizzBuzz"),
            Label::Fizz => f.write_str("Fizz"),
            Label::Buzz => f.write_str("Buzz"),
            Label::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Classify `n` by divisibility.
///
/// The combined check must run first: 15 satisfies both the 3 and 5 rules.
/// Total over `i64`, so zero maps to `FizzBuzz` and negatives follow the
/// same rules as their absolute value.
pub fn label(n: i64) -> Label {
    if n % 15 == 0 {
        Label::FizzBuzz
    } else if n % 3 == 0 {
        Label::Fizz
    } else if n % 5 == 0 {
        Label::Buzz
    } else {
        Label::Number(n)
    }
}

/// String form of [`label`].
pub fn classify(n: i64) -> String {
    label(n).to_string()
}
