//! Property tests for the public surface of `redblack`.

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Rotate the first node holding K, if it has the child to rotate with
    RotateLeft(K),
    /// Same as `RotateLeft`, the other way
    RotateRight(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::RotateLeft(K::arbitrary(g)),
            2 => Op::RotateRight(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
