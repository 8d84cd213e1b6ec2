//! An unbalanced Binary Search Tree that owns its nodes outright. Every child is a `Box` held by
//! exactly one parent, so there are no parent pointers and no shared nodes: moving a subtree
//! means moving the `Box`.
//!
//! # Examples
//!
//! ```
//! use treemap::tree::Tree;
//!
//! let mut tree: Tree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.contains(&3));
//!
//! // Deleting hands the stored item back.
//! assert_eq!(tree.delete(&4), Ok(4));
//! assert_eq!(tree.items_in_order(), [&1, &2, &3, &5, &6, &7]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};

/// An owning, possibly empty, child pointer.
type Link<T> = Option<Box<Node<T>>>;

/// A single vertex of a [`Tree`]. A `Node` stores one item and up to two children.
#[derive(Debug)]
pub struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// The item stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` if this node has at least one child.
    pub fn is_internal(&self) -> bool {
        !self.is_leaf()
    }

    /// The number of edges on the longest downward path from this node to a leaf. A leaf has a
    /// height of 0.
    ///
    /// Counts levels breadth first, so a degenerate subtree costs heap space rather than stack.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level = vec![self];
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Unlinks this node from the tree, returning its item and the subtree that should take its
    /// place in its parent.
    ///
    /// The replacement is the in-order predecessor if there is a left subtree, otherwise the
    /// in-order successor. The promoted node is moved (not copied) into the vacated position and
    /// picks up every subtree this node was holding.
    fn remove(mut self: Box<Self>) -> (T, Link<T>) {
        let replacement = if self.left.is_some() {
            log::debug!("Tree::delete promoting the in-order predecessor");
            let right = self.right.take();
            let mut rest = self.left.take();
            Self::take_rightmost(&mut rest).map(|mut predecessor| {
                predecessor.left = rest;
                predecessor.right = right;
                predecessor
            })
        } else if self.right.is_some() {
            log::debug!("Tree::delete promoting the in-order successor");
            let mut rest = self.right.take();
            Self::take_leftmost(&mut rest).map(|mut successor| {
                successor.right = rest;
                successor
            })
        } else {
            log::debug!("Tree::delete unlinking a leaf");
            None
        };

        (self.data, replacement)
    }

    /// Detaches the rightmost node of the subtree at `link`. Its left child (it has no right
    /// child) is spliced into the position it leaves behind.
    fn take_rightmost(mut link: &mut Link<T>) -> Link<T> {
        while link.as_ref()?.right.is_some() {
            link = &mut link.as_mut()?.right;
        }
        let mut node = link.take()?;
        *link = node.left.take();
        Some(node)
    }

    /// Mirror image of [`Node::take_rightmost`].
    fn take_leftmost(mut link: &mut Link<T>) -> Link<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let mut node = link.take()?;
        *link = node.right.take();
        Some(node)
    }
}

/// A Binary Search Tree. This can be used for inserting, finding, and deleting items and for
/// visiting them in any of the four classical traversal orders.
///
/// Items are ordered by the comparator `C` (see [`Compare`]); by default they are ordered by
/// their own `Ord`. The tree never rebalances so its height depends on the insertion order.
pub struct Tree<T, C = Natural> {
    root: Link<T>,
    size: usize,
    order: C,
}

impl<T: Ord> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s own `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C: Default> Default for Tree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        // Dropping `Box`es recursively would use one stack frame per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("items", &self.items_in_order())
            .finish()
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` that orders its items with `order`.
    pub fn with_comparator(order: C) -> Self {
        Self {
            root: None,
            size: 0,
            order,
        }
    }

    /// The number of items in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the root node, or -1 for an empty tree.
    ///
    /// ```
    /// use treemap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending inserts build a chain.
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        self.root().map_or(-1, Node::height)
    }

    /// The root node, for callers that want to walk the structure themselves.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Iterates over the items in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.size)
    }

    /// Items in ascending order: left subtree, node, right subtree.
    pub fn items_in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Items with each node before its subtrees: node, left subtree, right subtree.
    pub fn items_pre_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.size);
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            items.push(&node.data);
            // Pushed right first so the left subtree is visited first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        items
    }

    /// Items with each node after its subtrees: left subtree, right subtree, node.
    pub fn items_post_order(&self) -> Vec<&T> {
        // Visit node, right, left and reverse the result.
        let mut items = Vec::with_capacity(self.size);
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            items.push(&node.data);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        items.reverse();
        items
    }

    /// Items breadth first: the root, then every node one level down from left to right, and so
    /// on.
    ///
    /// ```
    /// use treemap::tree::Tree;
    ///
    /// let tree: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    /// assert_eq!(tree.items_level_order(), [&4, &2, &6, &1, &3, &5, &7]);
    /// ```
    pub fn items_level_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.size);
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            items.push(&node.data);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        items
    }
}

impl<T, C: Compare<T>> Tree<T, C> {
    /// Returns `true` if an item equal to `item` is in the tree.
    pub fn contains(&self, item: &T) -> bool {
        self.contains_key(self.order.key(item))
    }

    /// Returns `true` if an item whose key equals `key` is in the tree.
    pub fn contains_key(&self, key: &C::Key) -> bool {
        self.locate(key).is_some()
    }

    /// Potentially finds the stored item equal to `item`. If no node holds such an item, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, item: &T) -> Option<&T> {
        self.search_key(self.order.key(item))
    }

    /// Potentially finds the stored item whose key equals `key`.
    pub fn search_key(&self, key: &C::Key) -> Option<&T> {
        self.locate(key).map(Node::data)
    }

    /// Inserts `item` in order. Returns `true` if a new node was created.
    ///
    /// If an equal item is already stored nothing changes: the stored item is kept, `item` is
    /// dropped, the size stays the same, and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        let was_empty = self.root.is_none();
        let slot = Self::locate_slot(&mut self.root, &self.order, self.order.key(&item));
        if slot.is_some() {
            log::trace!("Tree::insert found an equal item, leaving the tree unchanged");
            return false;
        }

        *slot = Some(Node::new_boxed(item));
        self.size += 1;
        if was_empty {
            log::debug!("Tree::insert created a new root");
        }
        true
    }

    /// Deletes the item equal to `item` and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree is empty and [`Error::NotFound`] if no equal item is
    /// stored. The tree is unchanged in both cases.
    pub fn delete(&mut self, item: &T) -> Result<T> {
        let key = self.order.key(item);
        self.delete_key(key)
    }

    /// Deletes the item whose key equals `key` and returns it.
    ///
    /// # Errors
    ///
    /// Same as [`Tree::delete`].
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::tree::Tree;
    /// use treemap::Error;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.delete_key(&1), Err(Error::EmptyTree));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.delete_key(&2), Err(Error::NotFound));
    /// assert_eq!(tree.delete_key(&1), Ok(1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete_key(&mut self, key: &C::Key) -> Result<T> {
        if self.root.is_none() {
            log::trace!("Tree::delete on an empty tree");
            return Err(Error::EmptyTree);
        }

        let slot = Self::locate_slot(&mut self.root, &self.order, key);
        let Some(target) = slot.take() else {
            log::trace!("Tree::delete could not find the item");
            return Err(Error::NotFound);
        };

        let (data, replacement) = target.remove();
        *slot = replacement;
        self.size -= 1;
        Ok(data)
    }

    /// Walks down from the root comparing against `key`.
    fn locate(&self, key: &C::Key) -> Option<&Node<T>> {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(self.order.key(&n.data)) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(n),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Walks down from `link` comparing against `key` and returns the link that holds the
    /// matching node, or the empty link where such a node would be attached. That link is owned
    /// by the parent of the (possible) match, or is the root link itself, so callers can relink
    /// without ever storing a parent pointer.
    fn locate_slot<'a>(mut link: &'a mut Link<T>, order: &C, key: &C::Key) -> &'a mut Link<T> {
        loop {
            let ordering = match link.as_deref() {
                Some(node) => key.cmp(order.key(&node.data)),
                None => return link,
            };
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }
}

impl<T, C> FromIterator<T> for Tree<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Compare<T>> Extend<T> for Tree<T, C> {
    /// Inserts each item in sequence order. Items equal to one already stored are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over a [`Tree`]. It keeps the unvisited left spine on an explicit stack
/// instead of recursing.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, remaining: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
