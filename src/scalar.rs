/*!
Value types that can be ranked by a fixed sort.

Ranks are memoized per distinct value and pattern terms match against the string form of a value,
so a sortable value must be hashable and displayable. [`SortValue`] collects these requirements and
is implemented for every type that meets them e.g. `&str`, `String`, the integer types and `char`.

[`Scalar`] is a closed set of primitive values for sorting lists that mix kinds of values, like
numbers and strings, in a single slice.
*/

use std::fmt;
use std::hash::Hash;

/// The bounds a value must satisfy to be ranked by a [`FixedSort`](crate::FixedSort).
pub trait SortValue: Hash + Eq + Clone + fmt::Display + Send + Sync + 'static {}

impl<T> SortValue for T where T: Hash + Eq + Clone + fmt::Display + Send + Sync + 'static {}

/**
A primitive value for heterogeneous lists.

The natural ordering of scalars places all booleans before all integers and all integers before all
strings. Values of the same kind use the ordering of the wrapped type.
*/
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Scalar {
    /// A boolean value.
    Bool(bool),

    /// A signed integer value.
    Int(i64),

    /// A string value.
    Str(String),
}

/// Public methods
impl Scalar {
    /// Returns `true` if the scalar is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Scalar::Bool(_))
    }

    /// Returns `true` if the scalar is an integer.
    pub fn is_int(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    /// Returns `true` if the scalar is a string.
    pub fn is_str(&self) -> bool {
        matches!(self, Scalar::Str(_))
    }

    /// Get the wrapped string if the scalar is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Str(value) => write!(f, "{}", value),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}
