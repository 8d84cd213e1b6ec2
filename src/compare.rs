//! Comparators used by [`Tree`][crate::tree::Tree] at every comparison point.
//!
//! Rather than relying on an element type's own `Ord`, a tree asks its comparator to
//! project each element onto a key and orders elements by those keys. This lets the same tree
//! store plain values (with [`Natural`]) or `(key, value)` pairs ordered by key alone (with
//! [`ByKey`]) without wrapping the payload in a newtype.

/// Orders the elements of a tree by a projected key.
///
/// Two elements whose keys compare equal are considered the same element by the tree, even if
/// the rest of their contents differ.
pub trait Compare<T> {
    /// The totally ordered key an element is compared by.
    type Key: Ord + ?Sized;

    /// Projects an element onto the key it is ordered by.
    fn key<'a>(&self, item: &'a T) -> &'a Self::Key;
}

/// Orders elements by their own `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    type Key = T;

    fn key<'a>(&self, item: &'a T) -> &'a T {
        item
    }
}

/// Orders `(key, value)` pairs by key only; the value takes no part in ordering or equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByKey;

impl<K: Ord, V> Compare<(K, V)> for ByKey {
    type Key = K;

    fn key<'a>(&self, item: &'a (K, V)) -> &'a K {
        &item.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_key_ignores_value() {
        let a = (1, "one");
        let b = (1, "uno");

        assert_eq!(ByKey.key(&a), ByKey.key(&b));
        assert!(ByKey.key(&(0, "zzz")) < ByKey.key(&a));
    }

    #[test]
    fn natural_is_identity() {
        assert_eq!(Natural.key(&7), &7);
    }
}
