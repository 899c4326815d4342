//! Sequence helpers

use std::hash::Hash;

use itertools::Itertools;

use crate::{Error, Result};

/// Returns the greatest element of `items`.
///
/// # Errors
///
/// Returns [`Error::EmptySequence`] when `items` is empty.
///
/// # Examples
///
/// ```
/// assert_eq!(kata_core::find_max(&[3, -5, 10, 0]), Ok(10));
/// ```
pub fn find_max<T: Ord + Clone>(items: &[T]) -> Result<T> {
    items.iter().max().cloned().ok_or(Error::EmptySequence {
        operation: "find_max",
    })
}

/// Keeps the first occurrence of every distinct value, in input order.
///
/// # Examples
///
/// ```
/// assert_eq!(kata_core::remove_duplicates(&[1, 2, 2, 3, 3, 3]), vec![1, 2, 3]);
/// assert_eq!(kata_core::remove_duplicates(&["a", "b", "a"]), vec!["a", "b"]);
/// ```
#[must_use]
pub fn remove_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    items.iter().unique().cloned().collect()
}
