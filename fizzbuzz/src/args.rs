//! Iteration count validation.

use thiserror::Error;

/// Count used when no argument is supplied.
pub const DEFAULT_COUNT: i64 = 100;

/// Reasons a supplied count is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CountError {
    /// Argument is not an integer (or does not fit in `i64`).
    #[error("Please provide a valid number (got {input:?})")]
    InvalidFormat { input: String },

    /// Argument parsed but is zero or negative.
    #[error("Please provide a positive number of iterations (got {value})")]
    NonPositive { value: i64 },
}

/// Resolve the iteration count from positional arguments.
///
/// Only the first argument is read. Returns [`DEFAULT_COUNT`] when `args` is empty.
pub fn parse_count<S: AsRef<str>>(args: &[S]) -> Result<i64, CountError> {
    parse_count_or(args, DEFAULT_COUNT)
}

/// Like [`parse_count`], with a caller-supplied default.
pub fn parse_count_or<S: AsRef<str>>(args: &[S], default: i64) -> Result<i64, CountError> {
    let Some(raw) = args.first() else {
        return Ok(default);
    };
    let raw = raw.as_ref();
    let value: i64 = raw.parse().map_err(|_| CountError::InvalidFormat {
        input: raw.to_string(),
    })?;
    if value <= 0 {
        return Err(CountError::NonPositive { value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: &[&str] = &[];

    #[test]
    fn empty_args_use_default() {
        assert_eq!(parse_count(NO_ARGS), Ok(100));
    }

    #[test]
    fn empty_args_use_supplied_default() {
        assert_eq!(parse_count_or(NO_ARGS, 7), Ok(7));
    }

    #[test]
    fn positive_integer_is_accepted() {
        assert_eq!(parse_count(&["15"]), Ok(15));
        assert_eq!(parse_count(&["1".to_string()]), Ok(1));
    }

    #[test]
    fn zero_is_non_positive() {
        assert_eq!(
            parse_count(&["0"]),
            Err(CountError::NonPositive { value: 0 })
        );
    }

    #[test]
    fn negative_is_non_positive() {
        assert_eq!(
            parse_count(&["-5"]),
            Err(CountError::NonPositive { value: -5 })
        );
    }

    #[test]
    fn non_numeric_is_invalid_format() {
        assert_eq!(
            parse_count(&["abc"]),
            Err(CountError::InvalidFormat {
                input: "abc".to_string()
            })
        );
    }

    #[test]
    fn whitespace_and_overflow_are_invalid_format() {
        assert!(matches!(
            parse_count(&[" 5"]),
            Err(CountError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_count(&["99999999999999999999"]),
            Err(CountError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_count(&["3.5"]),
            Err(CountError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn only_first_argument_is_read() {
        assert_eq!(parse_count(&["3", "abc"]), Ok(3));
    }

    #[test]
    fn error_messages_are_human_readable() {
        let err = parse_count(&["abc"]).unwrap_err();
        assert_eq!(err.to_string(), "Please provide a valid number (got \"abc\")");
        let err = parse_count(&["0"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide a positive number of iterations (got 0)"
        );
    }
}
