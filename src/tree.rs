//! The tree itself: lookup, insertion and the rotation primitive. The
//! rebalancing that runs after insertion lives in `fixup.rs` and the invariant
//! checker in `validate.rs`.
//!
//! # Examples
//!
//! ```
//! use redblack::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! let one = tree.insert(1);
//! assert_eq!(tree.get(&1), Some(one));
//!
//! // Duplicates are kept, not overwritten.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//! assert!(tree.is_balanced());
//! ```

use std::cmp::Ordering;

use log::trace;

use crate::node::{Color, Direction, Node, NodeRef};

/// A Red-Black Tree of keys. Duplicate keys are allowed.
///
/// A tree is either *balancing* (the default), in which case every
/// [`insert`](Tree::insert) is followed by a fix-up that restores the
/// red-black rules, or *unbalanced*, in which case inserts leave the raw
/// Binary Search Tree shape alone. The latter is handy to build a particular
/// shape and then poke at it with [`rotate`](Tree::rotate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    // Arena of every node ever inserted. Indexed by `NodeRef`.
    nodes: Vec<Node<K>>,
    root: Option<NodeRef>,
    balanced: bool,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty, self-balancing `Tree`.
    pub fn new() -> Self {
        Self::with_balancing(true)
    }

    /// Generate a new, empty `Tree` that never rebalances after an insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let mut tree = Tree::unbalanced();
    /// for key in [1, 2, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// // A plain BST fed sorted keys is a linked list.
    /// assert_eq!(tree.height(), 3);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn unbalanced() -> Self {
        Self::with_balancing(false)
    }

    /// Generate a new, empty `Tree`, rebalancing after each insert only if
    /// `balanced` is set.
    pub fn with_balancing(balanced: bool) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            balanced,
        }
    }

    /// Whether inserts are followed by a fix-up.
    pub fn is_balancing(&self) -> bool {
        self.balanced
    }

    /// How many keys are stored, duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The current structural root. This follows rotations performed at the
    /// root.
    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    /// Looks up the node behind a handle.
    ///
    /// ## Panics
    ///
    /// When `node` was not issued by this tree.
    pub fn node(&self, node: NodeRef) -> &Node<K> {
        &self.nodes[node.0]
    }

    pub(crate) fn node_mut(&mut self, node: NodeRef) -> &mut Node<K> {
        &mut self.nodes[node.0]
    }

    /// Overwrites the color of a node. Nothing is rebalanced afterwards; use
    /// [`is_balanced`](Tree::is_balanced) to see whether the result is still a
    /// valid Red-Black Tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Color, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.insert(1);
    /// assert!(tree.is_balanced());
    ///
    /// tree.set_color(root, Color::Red);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn set_color(&mut self, node: NodeRef, color: Color) {
        self.node_mut(node).color = color;
    }

    /// `true` if `node` exists and is red. Missing nodes are black.
    pub(crate) fn is_red(&self, node: Option<NodeRef>) -> bool {
        node.map_or(false, |n| self.node(n).is_red())
    }

    /// Number of nodes on the longest path from the root down to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeRef, usize)> = self.root.into_iter().map(|n| (n, 1)).collect();
        while let Some((n, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(n);
            stack.extend(node.left.into_iter().map(|c| (c, depth + 1)));
            stack.extend(node.right.into_iter().map(|c| (c, depth + 1)));
        }

        height
    }

    /// Iterates over the keys in order. Equal keys are yielded in the order
    /// the tree currently holds them.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [3, 1, 2, 1] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Potentially finds a node holding the given key. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// The search stops at the first node with an equal key, so with
    /// duplicates the one nearest the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let ten = tree.insert(10);
    ///
    /// assert_eq!(tree.get(&10), Some(ten));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<NodeRef>
    where
        K: Ord,
    {
        let mut current = self.root;
        while let Some(n) = current {
            let node = self.node(n);
            current = match key.cmp(node.key()) {
                Ordering::Equal => return Some(n),
                Ordering::Greater => node.right,
                Ordering::Less => node.left,
            };
        }

        None
    }

    /// `true` if some node holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.get(key).is_some()
    }

    /// Inserts a new red leaf holding `key` and returns its handle. Keys
    /// strictly greater than a node's key go right and every other key,
    /// including an equal one, goes left.
    ///
    /// On a balancing tree the fix-up runs before this returns. It only
    /// recolors and relinks nodes, so the returned handle still refers to the
    /// freshly inserted node.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Color, Tree};
    ///
    /// let mut tree = Tree::unbalanced();
    /// let two = tree.insert(2);
    /// let one = tree.insert(1);
    /// let also_two = tree.insert(2);
    ///
    /// assert_eq!(tree.node(two).left(), Some(one));
    /// assert_eq!(tree.node(one).right(), Some(also_two));
    ///
    /// // Nothing rebalances an unbalanced tree, not even the root's color.
    /// assert_eq!(tree.node(two).color(), Color::Red);
    /// ```
    pub fn insert(&mut self, key: K) -> NodeRef
    where
        K: Ord,
    {
        let inserted = NodeRef(self.nodes.len());
        let Some(mut current) = self.root else {
            self.nodes.push(Node::new(key, None));
            self.root = Some(inserted);
            if self.balanced {
                self.fix_up(inserted);
            }
            return inserted;
        };

        let (parent, side) = loop {
            let node = self.node(current);
            let side = if &key > node.key() {
                Direction::Right
            } else {
                Direction::Left
            };
            match node.child(side) {
                Some(next) => current = next,
                None => break (current, side),
            }
        };

        self.nodes.push(Node::new(key, Some(parent)));
        *self.node_mut(parent).child_mut(side) = Some(inserted);

        if cfg!(debug_assertions) {
            let parent = self.node(parent);
            match side {
                Direction::Left => assert!(self.node(inserted).key() <= parent.key()),
                Direction::Right => assert!(self.node(inserted).key() > parent.key()),
            }
        }

        if self.balanced {
            self.fix_up(inserted);
        }
        inserted
    }

    /// Rotate `node` in the given direction. This moves `node` down toward
    /// `direction` and its child on the other side up into its place. The
    /// in-order sequence of keys and all colors are unchanged; only links move.
    ///
    /// If `node` was the root, the promoted child becomes the root.
    ///
    /// ## Panics
    ///
    /// When `node` has no child on the side opposite `direction`.
    pub fn rotate(&mut self, node: NodeRef, direction: Direction) {
        let far = direction.opposite();
        let pivot = match direction {
            Direction::Left => self.node(node).right.expect("Rotate left => right child"),
            Direction::Right => self.node(node).left.expect("Rotate right => left child"),
        };
        trace!("rotate {:?} at {:?}, promoting {:?}", direction, node, pivot);

        let inner = self.node(pivot).child(direction);
        let old_parent = self.node(node).parent;

        // The pivot's near subtree crosses over to `node`.
        *self.node_mut(node).child_mut(far) = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(node);
        }

        self.replace_child(old_parent, node, pivot);

        *self.node_mut(pivot).child_mut(direction) = Some(node);
        self.node_mut(node).parent = Some(pivot);

        if cfg!(debug_assertions) {
            self.assert_links(node);
            self.assert_links(pivot);
        }
    }

    /// Rotate `node` to the left. This moves its right child up vertically and
    /// `node` down vertically.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///  Option<parent>              Option<parent>
    ///      /                           /
    ///    node                       pivot
    ///   /    \                      /    \
    ///  x    pivot   rotate ->     node    z
    ///       /   \                /    \
    ///      y     z              x      y
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let mut tree = Tree::unbalanced();
    /// let one = tree.insert(1);
    /// let two = tree.insert(2);
    ///
    /// tree.rotate_left(one);
    /// assert_eq!(tree.root(), Some(two));
    /// assert_eq!(tree.node(two).left(), Some(one));
    /// assert_eq!(tree.node(one).parent(), Some(two));
    /// ```
    pub fn rotate_left(&mut self, node: NodeRef) {
        self.rotate(node, Direction::Left)
    }

    /// Rotate `node` to the right. This moves its left child up vertically and
    /// `node` down vertically.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    Option<parent>          Option<parent>
    ///        /                       /
    ///      node                   pivot
    ///     /    \                  /    \
    ///  pivot    z   rotate ->    x     node
    ///  /   \                           /   \
    /// x     y                         y     z
    /// ```
    pub fn rotate_right(&mut self, node: NodeRef) {
        self.rotate(node, Direction::Right)
    }

    /// Hangs `new` where `old` used to hang under `parent`, or makes it the
    /// root when there is no parent.
    fn replace_child(&mut self, parent: Option<NodeRef>, old: NodeRef, new: NodeRef) {
        self.node_mut(new).parent = parent;
        match parent {
            Some(parent) => {
                let side = self
                    .node(parent)
                    .side_of(old)
                    .expect("Parent link => child link");
                *self.node_mut(parent).child_mut(side) = Some(new);
            }
            None => self.root = Some(new),
        }
    }

    /// Asserts the parent links around `n` agree with the child links.
    fn assert_links(&self, n: NodeRef) {
        let node = self.node(n);
        for child in node.left.into_iter().chain(node.right) {
            assert_eq!(self.node(child).parent, Some(n));
        }
        match node.parent {
            Some(parent) => assert!(self.node(parent).side_of(n).is_some()),
            None => assert_eq!(self.root, Some(n)),
        }
    }
}

/// An in-order iterator over the keys of a [`Tree`]. See [`Tree::iter`].
pub struct Iter<'a, K> {
    tree: &'a Tree<K>,
    stack: Vec<NodeRef>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut current: Option<NodeRef>) {
        while let Some(n) = current {
            self.stack.push(n);
            current = self.tree.node(n).left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        let node = self.tree.node(n);
        self.push_left_spine(node.right);
        Some(node.key())
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a sorted `Vec` holding the
    /// same keys. This way we can ensure that after a random smattering of
    /// inserts the tree holds exactly the keys the model does.
    fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, model: &mut Vec<K>) -> bool
    where
        K: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    let inserted = tree.insert(k.clone());
                    if tree.node(inserted).key() != k {
                        return false;
                    }
                    let pos = model.partition_point(|x| x <= k);
                    model.insert(pos, k.clone());
                }
                Op::Get(k) => {
                    let found = tree.get(k);
                    if found.is_some() != model.binary_search(k).is_ok() {
                        return false;
                    }
                    if found.map_or(false, |n| tree.node(n).key() != k) {
                        return false;
                    }
                }
                Op::Iter => {
                    if !tree.iter().eq(model.iter()) {
                        return false;
                    }
                }
            }
        }

        true
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();

            do_ops(&ops, &mut tree, &mut model) && tree.iter().eq(model.iter())
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_unbalanced_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::unbalanced();
            let mut model = Vec::new();

            do_ops(&ops, &mut tree, &mut model) && tree.iter().eq(model.iter())
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter().all(|x| tree.contains(x)) && tree.len() == xs.len()
        }
    }
}
