//! A crate for parsing decimal strings into bounds-checked 32-bit integers.
//!
//! Input is parsed into an `i64` first and then narrowed to the target type,
//! so values outside the target range are reported instead of wrapping.
//! Failures are returned as an [`Error`] that callers can match on.
//!
//! ```
//! use bounded_num::{parse_int32, parse_uint32, Error, IntType};
//!
//! assert_eq!(parse_int32("-1"), Ok(-1));
//! assert_eq!(parse_uint32("-1"), Err(Error::OutOfRange(IntType::Uint32)));
//! assert_eq!(parse_uint32(" ").unwrap_err().to_string(), "empty input");
//! ```

mod convert;
mod error;
mod int_type;

pub use error::{Error, Result};
pub use int_type::IntType;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Parse a decimal string into an `i32`
///
/// Accepts an optional `+` or `-` sign followed by ASCII digits. Whitespace
/// around the literal is not stripped.
///
/// # Errors
///
/// * [`Error::EmptyInput`] if the input is empty or only whitespace
/// * [`Error::InvalidSyntax`] if the input is not a decimal integer literal
/// * [`Error::OutOfRange`] if the value does not fit an `i32`
/// * [`Error::Parse`] if the value does not even fit an `i64`
pub fn parse_int32(input: &str) -> Result<i32> {
    let parsed = convert::to_i64(input)?;
    let value = convert::check_range(parsed, IntType::Int32)?;
    i32::try_from(value).map_err(|_| Error::OutOfRange(IntType::Int32))
}

/// Parse a decimal string into a `u32`
///
/// Accepted values are `0..=2147483647`, see [`IntType::max`].
///
/// # Errors
///
/// * [`Error::EmptyInput`] if the input is empty or only whitespace
/// * [`Error::InvalidSyntax`] if the input is not a decimal integer literal
/// * [`Error::OutOfRange`] if the value is negative or above `i32::MAX`
/// * [`Error::Parse`] if the value does not even fit an `i64`
pub fn parse_uint32(input: &str) -> Result<u32> {
    let parsed = convert::to_i64(input)?;
    let value = convert::check_range(parsed, IntType::Uint32)?;
    u32::try_from(value).map_err(|_| Error::OutOfRange(IntType::Uint32))
}
