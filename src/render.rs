//! A human readable dump of a tree, one node per line, children indented under
//! their parent. Only meant for eyeballing a tree in a failing test.

use std::fmt;

use crate::node::NodeRef;
use crate::tree::Tree;

/// # Examples
///
/// ```
/// use redblack::Tree;
///
/// let mut tree = Tree::new();
/// for key in [10, 9, 8] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.to_string(), "9 B\n  L 8 R\n  R 10 R\n");
/// ```
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(NodeRef, usize, &str)> =
            self.root().into_iter().map(|root| (root, 0, "")).collect();
        while let Some((n, depth, side)) = stack.pop() {
            let node = self.node(n);
            writeln!(
                f,
                "{:indent$}{}{} {}",
                "",
                side,
                node.key(),
                node.color(),
                indent = depth * 2
            )?;

            // Right first so the left child is printed first.
            if let Some(right) = node.right() {
                stack.push((right, depth + 1, "R "));
            }
            if let Some(left) = node.left() {
                stack.push((left, depth + 1, "L "));
            }
        }

        Ok(())
    }
}
