//! This crate exposes [`OrderedTree`], an ordered collection of items kept in a plain Binary
//! Search Tree (BST) that is only rebalanced when asked to.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores records so they can be inserted, found and deleted. It is built
//! from `Node`s. Each `Node` holds one item and up to two child `Node`s. The invariants that
//! make it a *search* tree are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold items less than its own item.
//! 2. For every `Node`, all the `Node`s in its right subtree hold items greater than *or equal
//!    to* its own item. That is where duplicates go.
//!
//! Searching takes `O(height)`, where `height` is the longest path from the root `Node` to a
//! leaf `Node`. This tree never rotates on insertion or deletion, so its height depends entirely
//! on insertion order. Random insertion keeps it near `O(lg N)`, while sorted insertion makes it
//! a chain of height `N - 1`. [`OrderedTree::rebalance`] rebuilds it at minimal height, and
//! [`OrderedTree::is_balanced`] reports when that might be worthwhile.
//!
//! Visiting the left subtree, then the node, then the right subtree yields the items in sorted
//! order. The tree also offers pre-order, post-order and level-order walks, range queries, and
//! successor/predecessor lookups.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade. `rebalance` reports the heights it started and
//! finished with at `debug` level, and missed removals are logged at `trace` level.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod render;
pub mod tree;
mod util;


pub use error::Error;
pub use tree::OrderedTree;
