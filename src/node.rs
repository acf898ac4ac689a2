//! The vertex type of the tree and the small value types used to talk about it.

use std::fmt;

/// The color bit carried by every [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Freshly inserted nodes are red.
    Red,
    /// Missing children are treated as black.
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("R"),
            Self::Black => f.write_str("B"),
        }
    }
}

/// Names a child slot of a [`Node`], and the direction of a rotation.
///
/// Rotating in a `Direction` moves the node *down* toward that side: rotating
/// left promotes the right child and vice-versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The slot holding keys not greater than the node's key.
    Left,
    /// The slot holding keys greater than the node's key.
    Right,
}

impl Direction {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A handle to a [`Node`] in a [`Tree`](crate::Tree).
///
/// Handles are issued by [`Tree::insert`](crate::Tree::insert) and stay valid
/// for as long as the tree that issued them since nodes are never removed.
/// Handing a `NodeRef` to a tree that didn't issue it is a logic error and may
/// panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef(pub(crate) usize);

/// A vertex of the tree: a key, a color, two optional children and an optional
/// parent.
///
/// Children are owned by their parent through the tree's arena; the parent
/// link is only a lookup relation and is rewritten together with the owning
/// link on every relink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeRef>,
    pub(crate) right: Option<NodeRef>,
    pub(crate) parent: Option<NodeRef>,
}

impl<K> Node<K> {
    /// A new red leaf.
    pub(crate) fn new(key: K, parent: Option<NodeRef>) -> Self {
        Self {
            key,
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }

    /// The key this node was inserted with.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The node's current color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// `true` if the node is red.
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// The node's parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef> {
        self.parent
    }

    /// The left child.
    pub fn left(&self) -> Option<NodeRef> {
        self.left
    }

    /// The right child.
    pub fn right(&self) -> Option<NodeRef> {
        self.right
    }

    /// The child on the given side.
    pub fn child(&self, direction: Direction) -> Option<NodeRef> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> &mut Option<NodeRef> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Which side of this node `child` hangs off, if it is a child at all.
    pub(crate) fn side_of(&self, child: NodeRef) -> Option<Direction> {
        if self.left == Some(child) {
            Some(Direction::Left)
        } else if self.right == Some(child) {
            Some(Direction::Right)
        } else {
            None
        }
    }
}
