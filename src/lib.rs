/*!
`fixed-sort` builds comparators from a declarative description of the desired relative order of
values. The resulting comparator is handed to an ordinary sort routine.

An order is described either by a rank function or by an ordered list of terms. A term is a literal,
a regular expression matched against the string form of a value, or a predicate. Values are ordered
by the position of the first term that matches them and ties, including values that match nothing,
are broken by a fallback comparator. The fallback can itself be a fixed sort which allows orderings
to be layered.

```
use fixed_sort::{FixedSort, SortSpec, Term};

let chapters_first = FixedSort::new(SortSpec::terms(vec![
    Term::literal("Foreword"),
    Term::regex(r"^Chapter \d+").unwrap(),
    Term::literal("Index"),
]));

let mut book = vec!["Index", "Chapter 2", "Foreword", "Chapter 1", "Notes"];
chapters_first.sort(&mut book).unwrap();
assert_eq!(book, vec!["Foreword", "Chapter 1", "Chapter 2", "Index", "Notes"]);
```

Ranks computed by rank functions and by term lists are memoized per distinct value for the lifetime
of the comparator, so each value is ranked at most once no matter how many comparisons it takes
part in.
*/

#![warn(missing_debug_implementations, missing_docs)]

mod config;
mod errors;
pub use errors::{FixedSortError, FixedSortResult};

pub mod options;
pub use options::{FixedSortOptions, NanRank};

mod orderer;
pub use orderer::{fixed_sort, fixed_sort_with, FixedSort};

mod rank;
pub use rank::{Rank, RawRank};

mod ranker;

mod scalar;
pub use scalar::{Scalar, SortValue};

mod spec;
pub use spec::SortSpec;

mod term;
pub use term::Term;

mod utils;
pub use utils::comparator::{Comparator, NaturalOrder, PreserveOrder};
