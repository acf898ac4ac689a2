use redblack::{Direction, NodeRef, Tree};

use crate::Op;

/// Applies a set of operations to an unbalanced tree. Rotations are skipped
/// when the key is missing or the node lacks the child to rotate with.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k);
            }
            Op::RotateLeft(k) => try_rotate(tree, k, Direction::Left),
            Op::RotateRight(k) => try_rotate(tree, k, Direction::Right),
        }
    }
}

fn try_rotate(tree: &mut Tree<i8>, k: i8, direction: Direction) {
    if let Some(n) = tree.get(&k) {
        if tree.node(n).child(direction.opposite()).is_some() {
            tree.rotate(n, direction);
        }
    }
}

fn is_sorted(tree: &Tree<i8>) -> bool {
    let keys: Vec<_> = tree.iter().collect();
    keys.windows(2).all(|w| w[0] <= w[1])
}

/// Every handle in the tree, in insertion order.
fn handles(tree: &Tree<i8>) -> Vec<NodeRef> {
    let mut found = Vec::new();
    let mut stack: Vec<NodeRef> = tree.root().into_iter().collect();
    while let Some(n) = stack.pop() {
        found.push(n);
        stack.extend(tree.node(n).left());
        stack.extend(tree.node(n).right());
    }
    found.sort();
    found
}

quickcheck::quickcheck! {
    fn balanced_after_every_insert(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        xs.iter().all(|x| {
            tree.insert(*x);
            tree.is_balanced()
        })
    }
}

quickcheck::quickcheck! {
    fn bst_order_holds(xs: Vec<i8>) -> bool {
        let mut balanced = Tree::new();
        let mut unbalanced = Tree::unbalanced();
        for x in &xs {
            balanced.insert(*x);
            unbalanced.insert(*x);
        }

        let mut sorted = xs;
        sorted.sort_unstable();
        balanced.iter().eq(sorted.iter()) && unbalanced.iter().eq(sorted.iter())
    }
}

quickcheck::quickcheck! {
    fn bst_order_survives_rotations(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::unbalanced();
        do_ops(&ops, &mut tree);

        is_sorted(&tree)
            && ops.iter().all(|op| match op {
                Op::Insert(k) => tree.contains(k),
                _ => true,
            })
    }
}

quickcheck::quickcheck! {
    fn rotation_round_trip(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::unbalanced();
        do_ops(&ops, &mut tree);

        handles(&tree).into_iter().all(|n| {
            [Direction::Left, Direction::Right].iter().all(|&direction| {
                let Some(pivot) = tree.node(n).child(direction.opposite()) else {
                    return true;
                };
                let mut rotated = tree.clone();
                rotated.rotate(n, direction);
                rotated.rotate(pivot, direction.opposite());
                rotated == tree
            })
        })
    }
}

quickcheck::quickcheck! {
    fn root_tracks_rotations(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::unbalanced();
        do_ops(&ops, &mut tree);

        match tree.root() {
            None => tree.is_empty(),
            Some(root) => {
                tree.node(root).parent().is_none() && handles(&tree).len() == tree.len()
            }
        }
    }
}

quickcheck::quickcheck! {
    fn validation_is_idempotent(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::unbalanced();
        do_ops(&ops, &mut tree);

        let snapshot = tree.clone();
        tree.validate() == tree.validate() && tree.is_balanced() == tree.is_balanced() && tree == snapshot
    }
}

quickcheck::quickcheck! {
    fn get_finds_every_key(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.get(x).map(|n| tree.node(n).key()) == Some(x))
            && nots
                .iter()
                .filter(|x| !xs.contains(x))
                .all(|x| tree.get(x).is_none())
    }
}
