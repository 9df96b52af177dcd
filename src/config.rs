/*!
This module contains global configuration constants for fixed sorts.

These values serve as defaults for the matching fields of
[`FixedSortOptions`](crate::options::FixedSortOptions).
*/

/**
The number of distinct values a memoizing ranker makes room for up front.

The cache grows past this as needed and never evicts entries. Sorts usually see few distinct values
relative to the number of comparisons made, so a small starting size is enough.
*/
pub(crate) const DEFAULT_CACHE_CAPACITY: usize = 16;

/// The rank given to values that no literal in a literal list matched.
pub(crate) const UNMATCHED_LITERAL_RANK: f64 = 0.0;
