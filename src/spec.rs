/*!
A sort specification describes the desired relative order of values.

A specification is either a rank function or a list of terms. Term lists are classified when the
specification is created. Lists made up only of literals are resolved with a lookup table while lists
containing patterns or predicates are evaluated term by term.
*/

use std::fmt;

use crate::rank::RawRank;
use crate::term::Term;

/// A caller-supplied function mapping a value to its rank.
pub(crate) type RankFn<V> = Box<dyn Fn(&V) -> RawRank + Send + Sync>;

/// The shape of a sort specification.
pub enum SortSpec<V> {
    /// Rank values with a caller-supplied function.
    RankerFn(Box<dyn Fn(&V) -> RawRank + Send + Sync>),

    /// Rank values by their position in a list of literals.
    LiteralList(Vec<V>),

    /// Rank values by the position of the first term that matches them.
    TermList(Vec<Term<V>>),
}

/// Public methods
impl<V> SortSpec<V> {
    /**
    Create a specification that ranks values with `ranker`.

    Lower ranks sort first. A rank of 0 (or a missing rank) is a tie for every value that receives
    it and the tie is broken by the fallback comparator.
    */
    pub fn ranker<F, R>(ranker: F) -> Self
    where
        F: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<RawRank>,
    {
        SortSpec::RankerFn(Box::new(move |value: &V| ranker(value).into()))
    }

    /// Create a specification from a list of literals in the desired order.
    pub fn literals<I>(literals: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        SortSpec::LiteralList(literals.into_iter().collect())
    }

    /**
    Create a specification from a list of terms in the desired order.

    If every term is a literal then the cheaper [`SortSpec::LiteralList`] is selected. Otherwise
    the terms are kept as a [`SortSpec::TermList`].
    */
    pub fn terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term<V>>,
    {
        let terms: Vec<Term<V>> = terms.into_iter().collect();
        if !terms.iter().all(Term::is_literal) {
            return SortSpec::TermList(terms);
        }

        let literals = terms
            .into_iter()
            .filter_map(|term| match term {
                Term::Literal(literal) => Some(literal),
                _ => None,
            })
            .collect();

        SortSpec::LiteralList(literals)
    }

    /// A short name for the kind of specification. Used for logging.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            SortSpec::RankerFn(_) => "rank function",
            SortSpec::LiteralList(_) => "literal list",
            SortSpec::TermList(_) => "term list",
        }
    }
}

impl<V> From<Vec<Term<V>>> for SortSpec<V> {
    fn from(terms: Vec<Term<V>>) -> Self {
        SortSpec::terms(terms)
    }
}

impl<V: fmt::Debug> fmt::Debug for SortSpec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortSpec::RankerFn(_) => f.write_str("RankerFn(..)"),
            SortSpec::LiteralList(literals) => {
                f.debug_tuple("LiteralList").field(literals).finish()
            }
            SortSpec::TermList(terms) => f.debug_tuple("TermList").field(terms).finish(),
        }
    }
}
