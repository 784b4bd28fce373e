//! A sideways text picture of a tree, for debugging. The tree is rotated a quarter turn
//! counterclockwise: the root sits at the left margin, right subtrees are printed above their
//! parent and left subtrees below, and every level deeper is indented by one more marker.
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
//! assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
//! assert_eq!(tree.render("..").to_string(), "..3\n2\n..1\n");
//! ```

use std::fmt;

use crate::tree::{Node, OrderedTree};

/// The indent printed once per level by `OrderedTree`'s `Display` implementation.
pub const DEFAULT_MARKER: &str = "| ";

/// Adapter returned by [`OrderedTree::render`].
pub struct Render<'a, T> {
    tree: &'a OrderedTree<T>,
    marker: &'a str,
}

impl<T> OrderedTree<T> {
    /// Renders the tree sideways, indenting each level by `marker`.
    pub fn render<'a>(&'a self, marker: &'a str) -> Render<'a, T> {
        Render { tree: self, marker }
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(DEFAULT_MARKER), f)
    }
}

impl<T> fmt::Display for Render<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A reverse in-order walk (right, node, left) that remembers each node's depth.
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut cursor = self.tree.root().map(|root| (root, 0));

        loop {
            while let Some((node, level)) = cursor {
                stack.push((node, level));
                cursor = node.right().map(|right| (right, level + 1));
            }

            let Some((node, level)) = stack.pop() else {
                return Ok(());
            };
            for _ in 0..level {
                f.write_str(self.marker)?;
            }
            writeln!(f, "{}", node.item)?;
            cursor = node.left().map(|left| (left, level + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::OrderedTree;

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(OrderedTree::<i32>::new().to_string(), "");
    }

    #[test]
    fn right_subtree_is_printed_first() {
        let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 9].into_iter().collect();

        let expected = "\
| | 9
| 8
5
| | 4
| 3
| | 1
";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn chain_indents_one_marker_per_level() {
        let tree: OrderedTree<_> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(tree.render("-").to_string(), "--c\n-b\na\n");
    }
}
