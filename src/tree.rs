//! An ordered container backed by a plain (non self-balancing) Binary Search Tree. Nodes own
//! their children through `Box`es and carry no parent pointers. Operations that need to modify a
//! parent instead carry the parent's child slot down with them as they descend.
//!
//! The tree is only as balanced as the insertion order makes it. Inserting sorted items
//! produces a chain, so call [`OrderedTree::rebalance`] after bulk loads.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! assert!(tree.contains(&4));
//! assert_eq!(tree.successor(&4), Some(&5));
//! assert_eq!(tree.range_find(&2, &5), vec![&3, &4, &5]);
//!
//! assert_eq!(tree.remove(&3), Ok(3));
//! assert!(tree.remove(&3).is_err());
//! assert_eq!(tree.len(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, log_enabled, trace, Level};

use crate::error::Error;
use crate::util::Side;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An ordered collection of items stored in a Binary Search Tree.
///
/// Equal items are allowed. Each is kept in its own node, to the right of the first one
/// inserted.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone + Ord,
{
    /// Re-inserting a pre-order walk rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        self.pre_order().cloned().collect()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of items in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        // Nodes are released one at a time so a degenerate chain can't overflow the stack.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// The length of the longest path from the root to a leaf. A lone root has height `0` and an
    /// empty tree has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.extend(1..=4);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Whether the tree is reasonably balanced, using the heuristic
    /// `height < 2 * log2(len + 1) - 1`. This flags trees built from sorted input, not every
    /// tree that fails the AVL condition.
    ///
    /// An empty tree is never reported as balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = (0..100).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        (self.height() as f64) < 2.0 * ((self.len + 1) as f64).log2() - 1.0
    }

    /// The smallest item in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.item)
    }

    /// The largest item in the tree. With duplicates, this is the last one inserted.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.item)
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub(crate) fn take_root(&mut self) -> Link<T> {
        self.len = 0;
        self.root.take()
    }
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Potentially finds the stored item equal to `item`. If no such item exists, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add("b");
    ///
    /// assert_eq!(tree.find(&"b"), Some(&"b"));
    /// assert_eq!(tree.find(&"z"), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut link = self.root();
        while let Some(node) = link {
            if *item == node.item {
                return Some(&node.item);
            }
            link = node.child(Side::toward(item, &node.item));
        }
        None
    }

    /// Whether an item equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Adds `item` to the tree. Duplicates are kept; nothing is ever rejected and nothing is
    /// rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(2);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&2, &2]);
    /// ```
    pub fn add(&mut self, item: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            let side = Side::toward(&item, &node.item);
            slot = node.child_mut(side);
        }
        *slot = Some(Node::new_boxed(item));
        self.len += 1;
    }

    /// Removes an item equal to `item` from the tree and returns the stored item. If the tree
    /// holds no such item it is left untouched and [`Error::ItemNotFound`] is returned.
    ///
    /// When duplicates are stored, the one nearest the root is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, OrderedTree};
    ///
    /// let mut tree: OrderedTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(Error::ItemNotFound));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&3, &8]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, Error> {
        // The root link stands in for the left link of a parent above the root, so removing the
        // root takes the same path as removing any other node.
        let Some(removed) = Self::unlink(&mut self.root, item) else {
            trace!("remove missed among {} items", self.len);
            return Err(Error::ItemNotFound);
        };

        self.len -= 1;
        debug_assert_eq!(self.root.is_none(), self.len == 0);
        Ok(removed)
    }

    /// Descends from `slot` to the node holding `item` and takes that item out of the subtree.
    fn unlink(mut slot: &mut Link<T>, item: &T) -> Option<T> {
        // `slot` is always the parent's link on the side the current node hangs from.
        while slot.as_ref().is_some_and(|node| node.item != *item) {
            // Always matches: the condition just saw a node. Binding it here rather than in the
            // condition keeps the mutable borrow off the path that leaves the loop.
            let Some(node) = slot else { break };
            let side = Side::toward(item, &node.item);
            slot = node.child_mut(side);
        }

        let target = slot.as_mut()?;
        if target.left.is_some() && target.right.is_some() {
            // The node stays where it is and takes over its predecessor's item instead.
            let (predecessor, copies) = Self::take_max(&mut target.left)?;

            // Copies of the predecessor can't stay on the left of it. Everything on the right is
            // larger, so they hang below the smallest item there.
            let mut smallest = &mut target.right;
            while let Some(node) = smallest {
                smallest = &mut node.left;
            }
            *smallest = copies;

            return Some(mem::replace(&mut target.item, predecessor));
        }

        let Node {
            item: removed,
            left,
            right,
        } = *slot.take()?;
        *slot = left.or(right);
        Some(removed)
    }

    /// Unlinks the topmost node on the right spine below `slot` that holds the subtree's maximum,
    /// splicing its left child into its place. Returns that maximum along with the chain of equal
    /// items that hung to its right.
    fn take_max(mut slot: &mut Link<T>) -> Option<(T, Link<T>)> {
        // Duplicates of the maximum form a run at the bottom of the right spine. Count the steps
        // down to where that run starts.
        let mut node = slot.as_deref()?;
        let (mut depth, mut run_start) = (0, 0);
        while let Some(right) = node.right() {
            depth += 1;
            if right.item != node.item {
                run_start = depth;
            }
            node = right;
        }

        for _ in 0..run_start {
            if let Some(node) = slot {
                slot = &mut node.right;
            }
        }

        let Node { item, left, right } = *slot.take()?;
        *slot = left;
        Some((item, right))
    }

    /// Overwrites the stored item equal to `item` with `new_item` and returns the old one, or
    /// returns `None` if no such item is stored.
    ///
    /// The new item is written in place. If it does not compare equal to `item`, the tree may
    /// no longer be ordered until the next [`rebalance`][Self::rebalance].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [(2, 'a'), (1, 'b')].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&(2, 'a'), (2, 'z')), Some((2, 'a')));
    /// assert_eq!(tree.replace(&(9, 'a'), (9, 'z')), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            if node.item == *item {
                return Some(mem::replace(&mut node.item, new_item));
            }
            link = if node.item > *item {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        None
    }

    /// Returns every item `x` with `low <= x <= high`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 4, 6, 8, 10].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&4, &8), vec![&4, &6, &8]);
    /// assert!(tree.range_find(&11, &20).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T> {
        let mut found = Vec::new();
        let mut stack = Vec::new();
        let mut cursor = self.root();

        loop {
            while let Some(node) = cursor {
                stack.push(node);
                // Left subtrees only hold items less than their parent.
                cursor = if *low < node.item { node.left() } else { None };
            }

            let Some(node) = stack.pop() else {
                break;
            };
            if *low <= node.item && node.item <= *high {
                found.push(&node.item);
            }
            // Right subtrees only hold items at least as large as their parent.
            cursor = if node.item <= *high { node.right() } else { None };
        }

        found
    }

    /// The smallest stored item strictly greater than `item`. `item` itself does not need to be
    /// in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [1, 3, 5, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&5), Some(&7));
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&9), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        let mut candidate = None;
        let mut link = self.root();
        while let Some(node) = link {
            match item.cmp(&node.item) {
                Ordering::Less => {
                    candidate = Some(&node.item);
                    link = node.left();
                }
                // On a match, carrying on to the right walks down to the minimum of the right
                // subtree, stepping past any duplicates of `item`.
                Ordering::Equal | Ordering::Greater => link = node.right(),
            }
        }
        candidate
    }

    /// The largest stored item strictly less than `item`. `item` itself does not need to be in
    /// the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [1, 3, 5, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&5), Some(&3));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        let mut candidate = None;
        let mut link = self.root();
        while let Some(node) = link {
            match item.cmp(&node.item) {
                Ordering::Greater => {
                    candidate = Some(&node.item);
                    link = node.right();
                }
                // On a match this finds the maximum of the left subtree.
                Ordering::Equal | Ordering::Less => link = node.left(),
            }
        }
        candidate
    }

    /// Rebuilds the whole tree at minimal height. The items are moved out, sorted, and
    /// re-added median first.
    ///
    /// Sorting also repairs any ordering broken by [`replace`][Self::replace].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.pre_order().collect::<Vec<_>>(), vec![&4, &2, &1, &3, &6, &5, &7]);
    /// ```
    pub fn rebalance(&mut self) {
        let height_before = log_enabled!(Level::Debug).then(|| self.height());

        let mut items: Vec<T> = mem::take(self).into_iter().collect();
        items.sort();
        self.rebuild(items);

        if let Some(before) = height_before {
            debug!(
                "rebalanced {} items: height {} -> {}",
                self.len,
                before,
                self.height()
            );
        }
    }

    /// Adds the median of `items`, then the medians of the left and right halves.
    fn rebuild(&mut self, mut items: Vec<T>) {
        if items.is_empty() {
            return;
        }

        let mut right = items.split_off(items.len() / 2);
        let median = right.remove(0);
        self.add(median);
        self.rebuild(items);
        self.rebuild(right);
    }
}

/// A single vertex of the tree. Its item is greater than everything in `left` and no greater
/// than anything in `right`.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
