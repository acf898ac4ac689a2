//! This crate exposes a Red-Black Tree: a Binary Search Tree that keeps itself
//! balanced by coloring every `Node` red or black and repairing the coloring
//! after each insertion.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores keys in `Node`s, each of which has up to two
//! children. For every `Node`, the keys in its left subtree are not greater
//! than its own key and the keys in its right subtree are not smaller. Lookups
//! take `O(height)` where `height` is the longest path from the root `Node` to
//! a leaf `Node`.
//!
//! ## Red-Black Tree
//!
//! A plain BST built from sorted input degenerates into a linked list. A
//! Red-Black Tree bounds its height by `2 * lg(N + 1)` by maintaining:
//!
//! 1. Every `Node` is either red or black.
//! 2. The root is black.
//! 3. A red `Node` has no red children (missing children count as black).
//! 4. Every path from a `Node` down to a missing child crosses the same number
//!    of black `Node`s (its "black-height").
//!
//! Insertion adds a red leaf and then runs a fix-up that recolors and
//! [rotates](Tree::rotate) its way back up toward the root until the rules
//! above hold again.
//!
//! Nodes live in an arena owned by the [`Tree`] and are addressed with
//! [`NodeRef`] handles, so parent back-references are plain indices rather
//! than pointers.
//!
//! # Examples
//!
//! ```
//! use redblack::{Color, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [10, 9, 8] {
//!     tree.insert(key);
//! }
//!
//! // Inserting in descending order rotated 9 up to the root.
//! let root = tree.root().unwrap();
//! assert_eq!(tree.node(root).key(), &9);
//! assert_eq!(tree.node(root).color(), Color::Black);
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod fixup;
mod node;
mod render;
mod tree;
mod validate;


pub use node::{Color, Direction, Node, NodeRef};
pub use tree::{Iter, Tree};
pub use validate::Violation;
