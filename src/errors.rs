/*!
This module contains the error types produced while building or evaluating a fixed sort as well as
`From` implementations for wrapped errors to enable error propagation.
*/

use std::fmt;

/// Alias for results of fixed sort operations.
pub type FixedSortResult<T> = Result<T, FixedSortError>;

/// Errors raised while building or evaluating a [`FixedSort`](crate::FixedSort).
#[derive(Debug)]
pub enum FixedSortError {
    /**
    Variant for a caller-supplied rank function that returned something other than a number.

    The `found` field names the kind of value that was returned e.g. `string`.
    */
    InvalidRank {
        /// The kind of value the rank function returned.
        found: &'static str,
    },

    /// Variant for a rank function that returned NaN when NaN ranks are configured to be rejected.
    NotANumber,

    /// Variant for pattern terms that could not be compiled.
    Pattern(regex::Error),
}

impl std::error::Error for FixedSortError {}

impl fmt::Display for FixedSortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedSortError::InvalidRank { found } => write!(
                f,
                "Rank function returned a {}, should have returned a number.",
                found
            ),
            FixedSortError::NotANumber => {
                write!(f, "Rank function returned NaN, should have returned a number.")
            }
            FixedSortError::Pattern(base_err) => write!(f, "{}", base_err),
        }
    }
}

impl From<regex::Error> for FixedSortError {
    fn from(err: regex::Error) -> Self {
        FixedSortError::Pattern(err)
    }
}
