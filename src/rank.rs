/*!
Raw results of rank functions and their validation into [`Rank`] values.

Caller-supplied rank functions return a [`RawRank`] rather than a plain number so that a function
can report a missing rank and so that a misbehaving function is caught when its result is first
used instead of being silently converted.
*/

use crate::errors::{FixedSortError, FixedSortResult};
use crate::options::NanRank;

/**
A rank. Lower ranks sort earlier.

Ranks are compared as `f64`. Integer ranks beyond 2^53 in magnitude lose precision, so neighbouring
ranks that large can tie and be ordered by the fallback comparator.
*/
pub type Rank = f64;

/// The unvalidated value returned by a rank function.
#[derive(Clone, Debug, PartialEq)]
pub enum RawRank {
    /// An integer rank. Converted to a [`Rank`], so only magnitudes up to 2^53 are exact.
    Int(i64),

    /// A floating point rank.
    Float(f64),

    /// No rank was produced. This is treated as a rank of 0.
    Missing,

    /**
    A boolean was returned. This is always rejected.

    `false` is rejected as well rather than being coerced to a rank of 0.
    */
    Bool(bool),

    /**
    A string was returned. This is always rejected.

    The empty string is rejected as well rather than being coerced to a rank of 0.
    */
    Str(String),
}

/// Crate-only methods
impl RawRank {
    /**
    Validate the raw value and normalize it into a [`Rank`].

    Missing ranks and both signed zeros become `0.0`. NaN becomes `0.0` or an error depending on the
    provided policy. Non-numeric values are always an error.
    */
    pub(crate) fn into_rank(self, nan_rank: NanRank) -> FixedSortResult<Rank> {
        match self {
            RawRank::Int(rank) => Ok(rank as Rank),
            RawRank::Float(rank) if rank.is_nan() => match nan_rank {
                NanRank::CoerceToZero => Ok(0.0),
                NanRank::Reject => Err(FixedSortError::NotANumber),
            },
            // Folds -0.0 into 0.0
            RawRank::Float(rank) if rank == 0.0 => Ok(0.0),
            RawRank::Float(rank) => Ok(rank),
            RawRank::Missing => Ok(0.0),
            RawRank::Bool(_) => Err(FixedSortError::InvalidRank { found: "boolean" }),
            RawRank::Str(_) => Err(FixedSortError::InvalidRank { found: "string" }),
        }
    }
}

impl From<i32> for RawRank {
    fn from(rank: i32) -> Self {
        RawRank::Int(rank.into())
    }
}

impl From<i64> for RawRank {
    fn from(rank: i64) -> Self {
        RawRank::Int(rank)
    }
}

impl From<u32> for RawRank {
    fn from(rank: u32) -> Self {
        RawRank::Int(rank.into())
    }
}

impl From<usize> for RawRank {
    fn from(rank: usize) -> Self {
        // Positions past i64::MAX cannot come from an in-memory term list
        RawRank::Int(i64::try_from(rank).unwrap_or(i64::MAX))
    }
}

impl From<f32> for RawRank {
    fn from(rank: f32) -> Self {
        RawRank::Float(rank.into())
    }
}

impl From<f64> for RawRank {
    fn from(rank: f64) -> Self {
        RawRank::Float(rank)
    }
}

impl From<bool> for RawRank {
    fn from(value: bool) -> Self {
        RawRank::Bool(value)
    }
}

impl From<&str> for RawRank {
    fn from(value: &str) -> Self {
        RawRank::Str(value.to_owned())
    }
}

impl From<String> for RawRank {
    fn from(value: String) -> Self {
        RawRank::Str(value)
    }
}

impl<T> From<Option<T>> for RawRank
where
    T: Into<RawRank>,
{
    fn from(maybe_rank: Option<T>) -> Self {
        match maybe_rank {
            Some(rank) => rank.into(),
            None => RawRank::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_ranks_pass_through() {
        assert_eq!(RawRank::from(-3).into_rank(NanRank::Reject).unwrap(), -3.0);
        assert_eq!(RawRank::from(2.5).into_rank(NanRank::Reject).unwrap(), 2.5);
        assert_eq!(RawRank::from(7_usize).into_rank(NanRank::Reject).unwrap(), 7.0);
    }

    #[test]
    fn falsy_ranks_are_normalized_to_zero() {
        let negative_zero = RawRank::from(-0.0).into_rank(NanRank::Reject).unwrap();
        assert!(negative_zero == 0.0 && negative_zero.is_sign_positive());

        let missing = RawRank::from(None::<i64>).into_rank(NanRank::Reject).unwrap();
        assert_eq!(missing, 0.0);

        let nan = RawRank::from(f64::NAN)
            .into_rank(NanRank::CoerceToZero)
            .unwrap();
        assert_eq!(nan, 0.0);
    }

    #[test]
    fn falsy_non_numeric_ranks_are_still_rejected() {
        let result = RawRank::from("").into_rank(NanRank::CoerceToZero);
        assert!(matches!(
            result,
            Err(FixedSortError::InvalidRank { found: "string" })
        ));
    }

    #[test]
    fn large_integer_ranks_are_compared_as_floats() {
        let big = RawRank::from(1_i64 << 53).into_rank(NanRank::Reject).unwrap();
        let bigger = RawRank::from((1_i64 << 53) + 1)
            .into_rank(NanRank::Reject)
            .unwrap();
        assert_eq!(big, bigger);
    }

    #[test]
    fn nan_is_rejected_when_configured() {
        let result = RawRank::from(f64::NAN).into_rank(NanRank::Reject);
        assert!(matches!(result, Err(FixedSortError::NotANumber)));
    }

    #[test]
    fn non_numeric_ranks_are_rejected() {
        let result = RawRank::from("first").into_rank(NanRank::CoerceToZero);
        assert!(matches!(
            result,
            Err(FixedSortError::InvalidRank { found: "string" })
        ));

        let result = RawRank::from(false).into_rank(NanRank::CoerceToZero);
        assert!(matches!(
            result,
            Err(FixedSortError::InvalidRank { found: "boolean" })
        ));
    }
}
