/*!
Rankers map a value to its [`Rank`], the primary key of a fixed sort.

Three rankers are provided, one per kind of [`SortSpec`]:

1. [`LiteralRanker`] resolves ranks from a lookup table built up front. A list of `N` distinct
   literals gives the literal at position `i` the rank `i - N`, so every listed literal has a negative
   rank and unlisted values get 0.
1. [`TermRanker`] returns the position of the first term that matches a value or the length of the
   term list if no term matches.
1. [`RankFnRanker`] adapts a caller-supplied rank function.

Evaluating terms or rank functions can be arbitrarily expensive so the latter two are always wrapped
in a [`CachedRanker`] which memoizes ranks per distinct value.
*/

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::UNMATCHED_LITERAL_RANK;
use crate::errors::FixedSortResult;
use crate::options::{FixedSortOptions, NanRank};
use crate::rank::{Rank, RawRank};
use crate::scalar::SortValue;
use crate::spec::{RankFn, SortSpec};
use crate::term::{Matcher, Term};
use crate::utils::cache::{Cache, UnboundedCache};

/// Trait for structures that can compute the rank of a value.
pub(crate) trait Ranker<V>: Send + Sync {
    /// Get the rank of `value`.
    fn rank(&self, value: &V) -> FixedSortResult<Rank>;
}

/// Trait for rankers whose results still need to be validated.
pub(crate) trait RawRanker<V>: Send + Sync {
    /// Compute the unvalidated rank of `value`.
    fn raw_rank(&self, value: &V) -> RawRank;
}

/**
Select and build the ranker for a specification.

The returned ranker owns its own cache. Rankers are never shared between specifications even if the
specifications are equal.
*/
pub(crate) fn build_ranker<V>(spec: SortSpec<V>, options: &FixedSortOptions) -> Box<dyn Ranker<V>>
where
    V: SortValue,
{
    log::debug!("Building a ranker for a {}", spec.kind());

    match spec {
        SortSpec::RankerFn(rank_fn) => Box::new(CachedRanker::new(RankFnRanker(rank_fn), options)),
        SortSpec::LiteralList(literals) => Box::new(LiteralRanker::new(literals)),
        SortSpec::TermList(terms) => Box::new(CachedRanker::new(TermRanker::new(terms), options)),
    }
}

/// Ranks values by their position in a list of distinct literals.
pub(crate) struct LiteralRanker<V> {
    /// Mapping of each literal to its rank.
    ranks: HashMap<V, Rank>,
}

/// Crate-only methods
impl<V> LiteralRanker<V>
where
    V: Hash + Eq,
{
    /**
    Create a new instance of [`LiteralRanker`].

    Only the first occurrence of a duplicated literal is kept and later occurrences do not shift the
    ranks of other literals.
    */
    pub(crate) fn new(literals: Vec<V>) -> Self {
        let mut positions: HashMap<V, usize> = HashMap::with_capacity(literals.len());
        for literal in literals {
            let next_position = positions.len();
            positions.entry(literal).or_insert(next_position);
        }

        let num_distinct = positions.len() as Rank;
        let ranks = positions
            .into_iter()
            .map(|(literal, position)| (literal, position as Rank - num_distinct))
            .collect();

        Self { ranks }
    }
}

impl<V> Ranker<V> for LiteralRanker<V>
where
    V: Hash + Eq + Send + Sync,
{
    fn rank(&self, value: &V) -> FixedSortResult<Rank> {
        Ok(self
            .ranks
            .get(value)
            .copied()
            .unwrap_or(UNMATCHED_LITERAL_RANK))
    }
}

/// Ranks values by the position of the first term that matches them.
pub(crate) struct TermRanker<V> {
    /// The compiled terms in priority order.
    matchers: Vec<Matcher<V>>,
}

/// Crate-only methods
impl<V> TermRanker<V>
where
    V: SortValue,
{
    /// Create a new instance of [`TermRanker`] by compiling each of the terms.
    pub(crate) fn new(terms: Vec<Term<V>>) -> Self {
        let matchers = terms.into_iter().map(Term::into_matcher).collect();

        Self { matchers }
    }

    /// Get the position of the first matching term or the number of terms if none match.
    fn position(&self, value: &V) -> usize {
        self.matchers
            .iter()
            .position(|matcher| matcher(value))
            .unwrap_or(self.matchers.len())
    }
}

impl<V> RawRanker<V> for TermRanker<V>
where
    V: SortValue,
{
    fn raw_rank(&self, value: &V) -> RawRank {
        RawRank::from(self.position(value))
    }
}

/// Adapts a caller-supplied rank function.
pub(crate) struct RankFnRanker<V>(RankFn<V>);

impl<V> RawRanker<V> for RankFnRanker<V> {
    fn raw_rank(&self, value: &V) -> RawRank {
        (self.0)(value)
    }
}

/**
Memoizes the ranks produced by another ranker.

On the first request for a value the wrapped ranker is invoked and its result is validated and
stored. Later requests for an equal value are served from the cache. Invalid results are not stored.
*/
pub(crate) struct CachedRanker<V, R>
where
    V: Hash + Eq,
{
    /// The ranker whose results are memoized.
    inner: R,

    /// Ranks computed so far. Entries are never evicted.
    cache: UnboundedCache<V, Rank>,

    /// How NaN results from the wrapped ranker are treated.
    nan_rank: NanRank,
}

/// Crate-only methods
impl<V, R> CachedRanker<V, R>
where
    V: SortValue,
    R: RawRanker<V>,
{
    /// Create a new instance of [`CachedRanker`] wrapping `inner`.
    pub(crate) fn new(inner: R, options: &FixedSortOptions) -> Self {
        Self {
            inner,
            cache: UnboundedCache::with_capacity(options.cache_capacity()),
            nan_rank: options.nan_rank(),
        }
    }

    /// Get the number of distinct values that have been ranked.
    #[cfg(test)]
    pub(crate) fn num_cached(&self) -> usize {
        self.cache.len()
    }
}

impl<V, R> Ranker<V> for CachedRanker<V, R>
where
    V: SortValue,
    R: RawRanker<V>,
{
    fn rank(&self, value: &V) -> FixedSortResult<Rank> {
        if let Some(rank) = self.cache.get(value) {
            return Ok(rank);
        }

        let rank = match self.inner.raw_rank(value).into_rank(self.nan_rank) {
            Ok(rank) => rank,
            Err(error) => {
                log::warn!("Rejected the rank computed for value {}. Error: {}", value, error);
                return Err(error);
            }
        };

        self.cache.insert(value.clone(), rank);
        log::trace!(
            "Rank cache miss for value {}. Ranked it {} and now holding {} ranks.",
            value,
            rank,
            self.cache.len()
        );

        Ok(rank)
    }
}
