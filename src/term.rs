/*!
Terms are the elements of a term list. A term is a literal value, a regular expression or a
predicate, and every kind of term is compiled into a uniform [`Matcher`] before ranking.
*/

use std::fmt;

use regex::Regex;

use crate::errors::FixedSortResult;

/// A boolean test applied to a candidate value.
pub(crate) type Matcher<V> = Box<dyn Fn(&V) -> bool + Send + Sync>;

/// One element of a term list.
pub enum Term<V> {
    /// Matches values equal to the literal.
    Literal(V),

    /// Matches values whose string form is matched by the regular expression.
    Pattern(Regex),

    /// Matches values for which the predicate returns `true`.
    Predicate(Box<dyn Fn(&V) -> bool + Send + Sync>),
}

/// Public methods
impl<V> Term<V> {
    /// Create a term matching values equal to `value`.
    pub fn literal(value: V) -> Self {
        Term::Literal(value)
    }

    /// Create a term matching the string form of values against `pattern`.
    pub fn pattern(pattern: Regex) -> Self {
        Term::Pattern(pattern)
    }

    /**
    Compile `pattern` and create a term from it.

    # Errors

    Returns [`FixedSortError::Pattern`](crate::FixedSortError::Pattern) if the pattern is invalid.
    */
    pub fn regex(pattern: &str) -> FixedSortResult<Self> {
        Ok(Term::Pattern(Regex::new(pattern)?))
    }

    /// Create a term matching values for which `predicate` returns `true`.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Term::Predicate(Box::new(predicate))
    }

    /// Returns `true` if the term is a plain literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }
}

/// Crate-only methods
impl<V> Term<V>
where
    V: PartialEq + fmt::Display + Send + Sync + 'static,
{
    /// Compile the term into a predicate over candidate values.
    pub(crate) fn into_matcher(self) -> Matcher<V> {
        match self {
            Term::Literal(literal) => Box::new(move |value: &V| *value == literal),
            Term::Pattern(pattern) => {
                Box::new(move |value: &V| pattern.is_match(&value.to_string()))
            }
            Term::Predicate(predicate) => predicate,
        }
    }
}

impl<V> From<Regex> for Term<V> {
    fn from(pattern: Regex) -> Self {
        Term::Pattern(pattern)
    }
}

impl<V: fmt::Debug> fmt::Debug for Term<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Term::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Term::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_terms_match_by_equality() {
        let matcher = Term::literal("HEADER").into_matcher();
        assert!(matcher(&"HEADER"));
        assert!(!matcher(&"HEADERS"));
    }

    #[test]
    fn pattern_terms_match_the_string_form_of_values() {
        let matcher = Term::<i64>::regex(r"^4\d$").unwrap().into_matcher();
        assert!(matcher(&42));
        assert!(!matcher(&142));
    }

    #[test]
    fn predicate_terms_are_used_as_is() {
        let matcher = Term::predicate(|value: &String| value.starts_with("Chapter ")).into_matcher();
        assert!(matcher(&"Chapter 9".to_string()));
        assert!(!matcher(&"Appendix 1".to_string()));
    }

    #[test]
    fn invalid_patterns_are_reported() {
        assert!(Term::<String>::regex("[unclosed").is_err());
    }
}
