//! This crate exposes an owned, unbalanced Binary Search Tree (BST) and two small collections
//! built on top of it: a key-ordered map and a priority queue.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here does no rebalancing, so inserting
//! already-sorted values produces a tree whose height equals its size minus one. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree; [`TreeMap`] relies on exactly that to list its entries by key.
//!
//! ## Ordering
//!
//! Every comparison a [`Tree`] makes goes through a [`Compare`] implementation. [`Natural`] uses
//! the item's own `Ord`; [`ByKey`] orders `(key, value)` pairs by key alone, which is how
//! [`TreeMap`] stores its entries.
//!
//! ## Logging
//!
//! Structural changes are reported through the [`log`](https://docs.rs/log) facade at `debug` and
//! `trace` level. Those levels are compiled out of release builds.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
mod error;
pub mod map;
pub mod priority_queue;
pub mod tree;


pub use compare::{ByKey, Compare, Natural};
pub use error::{Error, Result};
pub use map::TreeMap;
pub use priority_queue::PriorityQueue;
pub use tree::Tree;
