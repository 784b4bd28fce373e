//! Traversals over an [`OrderedTree`]. Every traversal is lazy and walks the tree with an
//! explicit stack or queue rather than recursion, so degenerate trees don't exhaust the call
//! stack. Each call starts a fresh walk over the tree as it is at that moment.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{Link, Node, OrderedTree};

/// Borrowing iterator over a tree's items in ascending order.
pub type Iter<'a, T> = InOrder<'a, T>;

impl<T> OrderedTree<T> {
    /// Iterates over the items in ascending order. Same as [`in_order`][Self::in_order].
    pub fn iter(&self) -> Iter<'_, T> {
        self.in_order()
    }

    /// Visits each node before its left subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.pre_order().collect::<Vec<_>>(), vec![&2, &1, &3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Visits the left subtree, then the node, then the right subtree. This yields items in
    /// ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root());
        iter
    }

    /// Visits both subtrees, left first, before the node itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.post_order().collect::<Vec<_>>(), vec![&1, &3, &2]);
    /// ```
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Visits nodes breadth first, level by level from the root, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    /// assert_eq!(
    ///     tree.level_order().collect::<Vec<_>>(),
    ///     vec![&4, &2, &6, &1, &3, &5, &7],
    /// );
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its items in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.take_root());
        iter
    }
}

/// Pre-order iterator returned by [`OrderedTree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.item)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// In-order iterator returned by [`OrderedTree::in_order`] and [`OrderedTree::iter`].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtrees have been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}

/// Post-order iterator returned by [`OrderedTree::post_order`].
pub struct PostOrder<'a, T> {
    /// Each node is pushed unexpanded, then pushed again expanded under its children.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.item);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Level-order iterator returned by [`OrderedTree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.item)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

/// Owning in-order iterator returned by `OrderedTree::into_iter`.
pub struct IntoIter<T> {
    /// Nodes already detached from their left subtrees, which are further up the stack.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { item, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Drain node by node so the remaining right subtrees aren't dropped recursively.
        self.for_each(drop);
    }
}
