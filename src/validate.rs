//! Checks a tree against the red-black rules from scratch. Nothing here is
//! used by the fix-up; this is what tests use to certify its work.

use std::error::Error;
use std::fmt;

use crate::node::NodeRef;
use crate::tree::Tree;

/// The first broken rule [`Tree::validate`] found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// The root is red.
    RedRoot,
    /// `node` is red and so is at least one of its children.
    RedChild {
        /// The red parent.
        node: NodeRef,
    },
    /// The paths down the two sides of `node` cross different numbers of
    /// black nodes.
    BlackHeightMismatch {
        /// Where the counts diverge.
        node: NodeRef,
        /// Black nodes below on the left, including the sentinel.
        left: usize,
        /// Black nodes below on the right, including the sentinel.
        right: usize,
    },
    /// `node`'s key is out of order with the keys of its subtrees.
    OutOfOrder {
        /// The misplaced node.
        node: NodeRef,
    },
    /// A child of `node` doesn't point back at it.
    BrokenParentLink {
        /// The parent whose child disagrees.
        node: NodeRef,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => f.write_str("the root is red"),
            Self::RedChild { node } => write!(f, "red node {:?} has a red child", node),
            Self::BlackHeightMismatch { node, left, right } => write!(
                f,
                "black-height below {:?} is {} on the left but {} on the right",
                node, left, right
            ),
            Self::OutOfOrder { node } => write!(f, "key of {:?} is out of order", node),
            Self::BrokenParentLink { node } => {
                write!(f, "a child of {:?} has the wrong parent", node)
            }
        }
    }
}

impl Error for Violation {}

impl<K> Tree<K> {
    /// `true` if the tree currently is a valid Red-Black Tree. This has no
    /// side effects. See [`validate`](Tree::validate) to find out what's wrong
    /// when it isn't.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Color, Tree};
    ///
    /// let mut tree = Tree::unbalanced();
    /// let ten = tree.insert(10);
    /// let eleven = tree.insert(11);
    ///
    /// // Unbalanced trees never blacken their root.
    /// assert!(!tree.is_balanced());
    ///
    /// tree.set_color(ten, Color::Black);
    /// tree.set_color(eleven, Color::Red);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool
    where
        K: Ord,
    {
        self.validate().is_ok()
    }

    /// Checks every rule and returns the tree's black-height: the number of
    /// black nodes on each path from the root down to a missing child,
    /// counting the root and the black sentinel that stands in for the
    /// missing child. An empty tree has a black-height of 1.
    ///
    /// Besides the coloring rules this checks that keys are in order (left
    /// subtree `<=` node `<=` right subtree) and that parent links agree with
    /// child links.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Tree, Violation};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.validate(), Ok(1));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.validate(), Ok(2));
    ///
    /// let mut tree = Tree::unbalanced();
    /// tree.insert(1);
    /// assert_eq!(tree.validate(), Err(Violation::RedRoot));
    /// ```
    pub fn validate(&self) -> Result<usize, Violation>
    where
        K: Ord,
    {
        let Some(root) = self.root() else {
            return Ok(1);
        };
        if self.node(root).is_red() {
            return Err(Violation::RedRoot);
        }
        if self.node(root).parent().is_some() {
            return Err(Violation::BrokenParentLink { node: root });
        }

        Ok(self.check(root, None, None)? + 1)
    }

    /// Validates the subtree at `n`, whose keys must lie within
    /// `lower..=upper`, and returns its black-height excluding `n` itself.
    fn check(&self, n: NodeRef, lower: Option<&K>, upper: Option<&K>) -> Result<usize, Violation>
    where
        K: Ord,
    {
        let node = self.node(n);
        let key = node.key();
        if lower.map_or(false, |lower| key < lower) || upper.map_or(false, |upper| key > upper) {
            return Err(Violation::OutOfOrder { node: n });
        }

        if node.is_red() && (self.is_red(node.left()) || self.is_red(node.right())) {
            return Err(Violation::RedChild { node: n });
        }

        let left = match node.left() {
            None => 1,
            Some(child) => {
                if self.node(child).parent() != Some(n) {
                    return Err(Violation::BrokenParentLink { node: n });
                }
                self.check(child, lower, Some(key))? + self.black(child)
            }
        };
        let right = match node.right() {
            None => 1,
            Some(child) => {
                if self.node(child).parent() != Some(n) {
                    return Err(Violation::BrokenParentLink { node: n });
                }
                self.check(child, Some(key), upper)? + self.black(child)
            }
        };

        if left != right {
            return Err(Violation::BlackHeightMismatch { node: n, left, right });
        }
        Ok(left)
    }

    fn black(&self, n: NodeRef) -> usize {
        usize::from(!self.node(n).is_red())
    }
}
