//! Rebalancing after an insert.
//!
//! See <https://en.wikipedia.org/wiki/Red%E2%80%93black_tree#Insertion> for the
//! terminology. The cases are numbered the way they are checked below.

use log::{debug, trace};

use crate::node::{Color, NodeRef};
use crate::tree::Tree;

impl<K> Tree<K> {
    /// Restores the red-black rules after `inserted` was hung as a red leaf.
    ///
    /// Walks toward the root instead of recursing, so a long chain of
    /// recolorings can't grow the stack. The root is always left black.
    pub(crate) fn fix_up(&mut self, inserted: NodeRef) {
        let mut n = inserted;
        let mut recolorings = 0;

        loop {
            // Case 1: `n` is the root. It is blackened below.
            let Some(parent) = self.node(n).parent() else {
                trace!("case 1: {:?} is the root", n);
                break;
            };

            // Case 2: a black parent can take a red child.
            if !self.node(parent).is_red() {
                trace!("case 2: parent {:?} of {:?} is black", parent, n);
                break;
            }

            // A red parent with no grandparent is a red root. Blackening it
            // below fixes both nodes.
            let Some(grandparent) = self.node(parent).parent() else {
                break;
            };

            let parent_side = self
                .node(grandparent)
                .side_of(parent)
                .expect("Parent link => child link");
            let uncle = self.node(grandparent).child(parent_side.opposite());

            // Case 3: push the grandparent's blackness down to both of its
            // children and retry from the grandparent, which is now red.
            if self.is_red(uncle) {
                trace!(
                    "case 3: red uncle {:?}, recoloring grandparent {:?}",
                    uncle,
                    grandparent
                );
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                recolorings += 1;
                n = grandparent;
                continue;
            }

            // Case 4: `n` is an inner grandchild. Rotate it up over its parent
            // so the three nodes form a straight line, then carry on with the
            // old parent as the bottom of the line.
            let mut parent = parent;
            let n_side = self
                .node(parent)
                .side_of(n)
                .expect("Parent link => child link");
            if n_side != parent_side {
                trace!("case 4: {:?} zig-zags under {:?}", n, grandparent);
                self.rotate(parent, parent_side);
                std::mem::swap(&mut n, &mut parent);
            }

            // Case 5: `n` is an outer grandchild. Lift the parent over the
            // grandparent and swap their colors. The lifted parent is black, so
            // re-running from its new position would stop at once.
            trace!("case 5: rotating {:?} over {:?}", parent, grandparent);
            self.rotate(grandparent, parent_side.opposite());
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            break;
        }

        if let Some(root) = self.root() {
            self.set_color(root, Color::Black);
        }
        debug!(
            "fix-up of {:?} done after {} recoloring(s)",
            inserted, recolorings
        );
    }
}
