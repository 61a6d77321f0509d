//! Ordering functions used to arrange elements in a [`Set`][crate::Set].
//!
//! A [`Set`][crate::Set] never calls `Ord::cmp` directly. Every comparison goes
//! through a [`Compare`] value owned by the set so that the same element type can
//! be stored under different orders.
//!
//! # Examples
//!
//! ```
//! use avlset::{AvlSet, Compare, Natural};
//!
//! // Closures are comparators.
//! let mut descending = AvlSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! descending.extend([1, 3, 2]);
//! assert_eq!(descending.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//!
//! // `Natural` is the order given by `Ord`.
//! assert!(Natural.compare(&1, &2).is_lt());
//! ```

use std::cmp::Ordering;

/// A strict total order over `T`.
///
/// Implementations must be consistent and transitive. A comparator that isn't
/// leaves the tree in an unspecified (but memory safe) shape.
pub trait Compare<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of `T` as defined by its [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_matches_ord() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn closures_compare() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert_eq!(
            by_len.compare(&"aaa".to_string(), &"b".to_string()),
            Ordering::Greater
        );
        assert_eq!(
            by_len.compare(&"aa".to_string(), &"bb".to_string()),
            Ordering::Equal
        );
    }
}
