use std::num::IntErrorKind;

use crate::error::{Error, Result};
use crate::IntType;

/// Parse `value` into the `i64` intermediate.
///
/// Only the emptiness check looks at the trimmed input. The numeric parse
/// runs on `value` as given, so surrounding whitespace is a syntax error.
pub(crate) fn to_i64(value: &str) -> Result<i64> {
    if value.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    value.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::Empty | IntErrorKind::InvalidDigit => Error::InvalidSyntax,
        _ => Error::Parse(err),
    })
}

/// Reject `value` unless it fits `target`.
pub(crate) fn check_range(value: i64, target: IntType) -> Result<i64> {
    if target.contains(value) {
        Ok(value)
    } else {
        Err(Error::OutOfRange(target))
    }
}
