/*!
The orderer composes a ranker with a fallback comparator into the final comparator.

Values are ordered by rank first. Only when two values have the same rank is the fallback
comparator consulted. The fallback can be any [`Comparator`], including another [`FixedSort`],
which makes it possible to layer several orderings on top of each other.
*/

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{FixedSortError, FixedSortResult};
use crate::options::FixedSortOptions;
use crate::rank::Rank;
use crate::ranker::{build_ranker, Ranker};
use crate::scalar::SortValue;
use crate::spec::SortSpec;
use crate::utils::comparator::{Comparator, NaturalOrder};

/**
A comparator that orders values by a fixed specification and breaks ties with a fallback
comparator.

# Concurrency

A `FixedSort` is `Send` and `Sync`. Its rank cache is protected by a lock so an instance can be shared
by sorts running on different threads.
*/
pub struct FixedSort<V> {
    /// Computes the primary sort key of a value.
    ranker: Box<dyn Ranker<V>>,

    /// Orders values that have the same rank.
    fallback: Box<dyn Comparator<V>>,
}

/// Public methods
impl<V> FixedSort<V>
where
    V: SortValue,
{
    /// Create a new instance of [`FixedSort`] that breaks ties by the natural ordering of values.
    pub fn new(spec: SortSpec<V>) -> Self
    where
        V: Ord,
    {
        FixedSort::with_fallback(spec, NaturalOrder)
    }

    /// Create a new instance of [`FixedSort`] that breaks ties with `fallback`.
    pub fn with_fallback<C>(spec: SortSpec<V>, fallback: C) -> Self
    where
        C: Comparator<V> + 'static,
    {
        FixedSort::with_options(spec, fallback, FixedSortOptions::default())
    }

    /// Create a new instance of [`FixedSort`] with custom ranking options.
    pub fn with_options<C>(spec: SortSpec<V>, fallback: C, options: FixedSortOptions) -> Self
    where
        C: Comparator<V> + 'static,
    {
        Self {
            ranker: build_ranker(spec, &options),
            fallback: Box::new(fallback),
        }
    }

    /**
    Get the rank of `value`.

    # Errors

    Fails if a caller-supplied rank function returned an invalid rank for `value`.
    */
    pub fn rank(&self, value: &V) -> FixedSortResult<Rank> {
        self.ranker.rank(value)
    }

    /**
    Sort `values` in place with the standard library's stable sort.

    # Errors

    Every value is ranked before the sort starts, so a rank function that fails returns its error
    without `values` being reordered.
    */
    pub fn sort(&self, values: &mut [V]) -> FixedSortResult<()> {
        self.rank_all(values)?;

        let mut first_error = None;
        values.sort_by(|a, b| self.compare_or_record(a, b, &mut first_error));

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /**
    Sort `values` in place with the standard library's unstable sort.

    # Errors

    Same as [`FixedSort::sort`].
    */
    pub fn sort_unstable(&self, values: &mut [V]) -> FixedSortResult<()> {
        self.rank_all(values)?;

        let mut first_error = None;
        values.sort_unstable_by(|a, b| self.compare_or_record(a, b, &mut first_error));

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /**
    Get a plain comparison function for use with APIs like [`slice::sort_by`].

    # Panics

    The returned function panics with the error message if a caller-supplied rank function returned
    an invalid rank. The panic propagates out of the sort that called the function.
    */
    pub fn as_fn(&self) -> impl Fn(&V, &V) -> Ordering + '_ {
        move |a: &V, b: &V| match self.compare(a, b) {
            Ok(ordering) => ordering,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Private methods
impl<V> FixedSort<V>
where
    V: SortValue,
{
    /**
    Rank every value, including through nested fixed sorts used as the fallback.

    Comparing a value with itself ranks it and then consults the fallback, which fills the rank cache
    of every fixed sort in the chain. Comparisons made by the sort afterwards are served from the
    caches and cannot fail, which keeps the comparison a total order.
    */
    fn rank_all(&self, values: &[V]) -> FixedSortResult<()> {
        for value in values {
            self.compare(value, value)?;
        }

        Ok(())
    }

    /**
    Compare `a` and `b`, treating a failed comparison as a tie and keeping the first failure.

    Only a custom fallback that fails on values which already ranked successfully can reach the
    failure branch.
    */
    fn compare_or_record(
        &self,
        a: &V,
        b: &V,
        first_error: &mut Option<FixedSortError>,
    ) -> Ordering {
        match self.compare(a, b) {
            Ok(ordering) => ordering,
            Err(error) => {
                if first_error.is_none() {
                    *first_error = Some(error);
                }

                Ordering::Equal
            }
        }
    }
}

impl<V> Comparator<V> for FixedSort<V>
where
    V: SortValue,
{
    fn compare(&self, a: &V, b: &V) -> FixedSortResult<Ordering> {
        let a_rank = self.ranker.rank(a)?;
        let b_rank = self.ranker.rank(b)?;

        // Ranks are never NaN after validation but fall back instead of panicking if one slips by
        match a_rank.partial_cmp(&b_rank) {
            Some(Ordering::Less) => Ok(Ordering::Less),
            Some(Ordering::Greater) => Ok(Ordering::Greater),
            _ => self.fallback.compare(a, b),
        }
    }
}

impl<V> fmt::Debug for FixedSort<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedSort").finish_non_exhaustive()
    }
}

/// Create a [`FixedSort`] from `spec` that breaks ties by the natural ordering of values.
pub fn fixed_sort<V>(spec: SortSpec<V>) -> FixedSort<V>
where
    V: SortValue + Ord,
{
    FixedSort::new(spec)
}

/// Create a [`FixedSort`] from `spec` that breaks ties with `fallback`.
pub fn fixed_sort_with<V, C>(spec: SortSpec<V>, fallback: C) -> FixedSort<V>
where
    V: SortValue,
    C: Comparator<V> + 'static,
{
    FixedSort::with_fallback(spec, fallback)
}
