/*!
This module holds the option structure that can be passed when building a fixed sort.
*/

use crate::config::DEFAULT_CACHE_CAPACITY;

/// How a rank function returning NaN is treated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NanRank {
    /// Treat NaN like any other falsy rank and normalize it to 0.
    CoerceToZero,

    /// Fail the comparison with [`FixedSortError::NotANumber`](crate::FixedSortError::NotANumber).
    Reject,
}

/**
Holds options to control how a fixed sort ranks values.

Options only affect the memoizing rankers i.e. rank functions and term lists. Literal lists are
resolved by a lookup table built at construction time and are not affected.
*/
#[derive(Clone, Debug)]
pub struct FixedSortOptions {
    /**
    How a NaN returned from a rank function is handled.

    **This defaults to [`NanRank::CoerceToZero`].**
    */
    nan_rank: NanRank,

    /**
    The initial capacity of the rank cache.

    The cache is unbounded and this is only a sizing hint.

    **This defaults to 16 entries.**
    */
    cache_capacity: usize,
}

/// Public methods
impl FixedSortOptions {
    /// Get the NaN handling policy.
    pub fn nan_rank(&self) -> NanRank {
        self.nan_rank
    }

    /// Get the initial capacity of the rank cache.
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    /// Set the NaN handling policy.
    pub fn with_nan_rank(mut self, nan_rank: NanRank) -> Self {
        self.nan_rank = nan_rank;
        self
    }

    /// Set the initial capacity of the rank cache.
    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }
}

impl Default for FixedSortOptions {
    fn default() -> Self {
        FixedSortOptions {
            nan_rank: NanRank::CoerceToZero,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
