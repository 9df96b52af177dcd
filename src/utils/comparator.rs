// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Utilities to assist with comparing based on various characteristics. Useful for sorting by
properties different from the natural ordering provided by ordering traits e.g. [`PartialOrd`].
*/

use std::cmp::Ordering;

use crate::errors::FixedSortResult;

/**
An interface for structs intended to be used as a comparator.

Closures of the form `Fn(&T, &T) -> Ordering` are comparators that never fail. Comparators
that rank values with caller-supplied functions, like [`FixedSort`](crate::FixedSort), can fail
when the caller-supplied function misbehaves.
*/
pub trait Comparator<T>: Send + Sync {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`
    */
    fn compare(&self, a: &T, b: &T) -> FixedSortResult<Ordering>;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &T, b: &T) -> FixedSortResult<Ordering> {
        Ok(self(a, b))
    }
}

/// Compares values by their natural ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> FixedSortResult<Ordering> {
        Ok(a.cmp(b))
    }
}

/**
Considers every pair of values equal.

Used with a stable sort, tied values keep the relative order they had before sorting.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct PreserveOrder;

impl<T> Comparator<T> for PreserveOrder {
    fn compare(&self, _a: &T, _b: &T) -> FixedSortResult<Ordering> {
        Ok(Ordering::Equal)
    }
}
