//! The error type shared by every fallible operation in umber. Parsing a hex code is the only thing
//! that can really go wrong with a color, so most of these variants describe bad input of one kind
//! or another.

use thiserror::Error;

/// Everything that can go wrong when reading colors or filter arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input did not look like `#rrggbb` (the `#` is optional, case doesn't matter).
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// A number was not usable: filter text that does not read as a finite number, or a NaN or
    /// infinite amount passed to an adjustment or an alpha.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// No filter goes by this name.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// The filter needs an argument and didn't get one.
    #[error("filter {0} requires an argument")]
    MissingArgument(&'static str),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;
