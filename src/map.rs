//! A map from keys to values that keeps its entries sorted by key. Entries are stored as
//! `(key, value)` pairs in a [`Tree`] ordered by [`ByKey`], so the value never takes part in a
//! comparison.
//!
//! # Examples
//!
//! ```
//! use treemap::{Error, TreeMap};
//!
//! let mut map = TreeMap::new();
//! map.set("V", 5);
//! map.set("I", 1);
//! map.set("X", 10);
//!
//! assert_eq!(map.get(&"V"), Ok(&5));
//! assert_eq!(map.keys(), [&"I", &"V", &"X"]);
//!
//! // Setting an existing key replaces its value without growing the map.
//! assert_eq!(map.set("V", 4), Some(5));
//! assert_eq!(map.len(), 3);
//!
//! assert_eq!(map.delete(&"I"), Ok(1));
//! assert_eq!(map.get(&"I"), Err(Error::KeyNotFound));
//! ```

use std::fmt;

use crate::compare::ByKey;
use crate::error::{Error, Result};
use crate::tree::Tree;

/// A key-ordered map backed by an unbalanced [`Tree`].
pub struct TreeMap<K, V> {
    tree: Tree<(K, V), ByKey>,
}

impl<K, V> Default for TreeMap<K, V> {
    fn default() -> Self {
        Self {
            tree: Tree::with_comparator(ByKey),
        }
    }
}

impl<K, V> TreeMap<K, V> {
    /// Generates a new, empty `TreeMap`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All keys, ascending.
    pub fn keys(&self) -> Vec<&K> {
        self.tree.iter().map(|(k, _)| k).collect()
    }

    /// All values, in ascending order of their keys.
    pub fn values(&self) -> Vec<&V> {
        self.tree.iter().map(|(_, v)| v).collect()
    }

    /// All entries, ascending by key.
    pub fn items(&self) -> Vec<(&K, &V)> {
        self.tree.iter().map(|(k, v)| (k, v)).collect()
    }
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Returns `true` if the map has an entry for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    /// The value associated with `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the map has no entry for `key`.
    pub fn get(&self, key: &K) -> Result<&V> {
        self.tree
            .search_key(key)
            .map(|(_, v)| v)
            .ok_or(Error::KeyNotFound)
    }

    /// Associates `value` with `key`, returning the value it replaced, if any.
    ///
    /// An existing entry is deleted from the tree and the new pair inserted in its place.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let replaced = self.tree.delete_key(&key).ok().map(|(_, v)| v);
        if replaced.is_some() {
            log::trace!("TreeMap::set replaced an existing entry");
        }
        self.tree.insert((key, value));
        replaced
    }

    /// Deletes the entry for `key` and returns its value.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the map has no entry for `key`, including when the map is empty.
    pub fn delete(&mut self, key: &K) -> Result<V> {
        self.tree
            .delete_key(key)
            .map(|(_, v)| v)
            .map_err(|_| Error::KeyNotFound)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    /// Applies each entry with [`TreeMap::set`], so later entries win.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for TreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.tree.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {:?}", key, value)?;
        }
        f.write_str("}")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TreeMap").field(&self.items()).finish()
    }
}
