use std::num::ParseIntError;

use displaydoc::Display;
use thiserror::Error;

use crate::IntType;

/// Error variants while parsing a bounded integer
#[derive(Display, Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// empty input
    EmptyInput,

    /// invalid input value
    InvalidSyntax,

    /// input value out of range ({0})
    OutOfRange(IntType),

    /// {0}
    Parse(#[from] ParseIntError),
}

/// Result type with the crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
