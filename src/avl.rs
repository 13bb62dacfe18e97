//! A self-balancing BST (specifically, an AVL tree). After every insert and delete, each node on
//! the path back to the root is checked and, if one side has become two levels deeper than the
//! other, the subtree is rotated back into shape. See [the Wikipedia page][wiki] for terminology.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
//!
//! # Examples
//!
//! ```
//! use ordtree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.add_range(1..=7).unwrap();
//!
//! // Ascending input still yields a perfectly balanced tree.
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root().map(|root| *root.value()), Some(4));
//! ```

use log::trace;

use crate::arena::Arena;
use crate::balance::Balance;
use crate::node::{NodeId, Side};
use crate::tree::Tree;

/// The AVL balancing policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

/// A self-balancing AVL tree.
pub type AvlTree<T> = Tree<T, Avl>;

impl Balance for Avl {
    fn rebalance_after_insert<T>(arena: &mut Arena<T>, node: NodeId) -> NodeId {
        let balance = arena.balance_factor(node);
        let root = if balance >= 2 {
            let left = child(arena, node, Side::Left);
            if arena.balance_factor(left) > 0 {
                rotate_right(arena, node)
            } else {
                rotate_left_right(arena, node)
            }
        } else if balance <= -2 {
            let right = child(arena, node, Side::Right);
            if arena.balance_factor(right) > 0 {
                rotate_right_left(arena, node)
            } else {
                rotate_left(arena, node)
            }
        } else {
            node
        };

        if cfg!(debug_assertions) {
            assert!(arena.balance_factor(root).abs() <= 1);
        }
        root
    }

    fn rebalance_after_delete<T>(arena: &mut Arena<T>, node: NodeId, side: Side) -> NodeId {
        // Losing a node shifts the balance by at most one level, so only the exact opposite
        // extreme needs handling. Unlike insertion, a sibling with a balance of 0 still takes a
        // single rotation.
        let root = match (side, arena.balance_factor(node)) {
            (Side::Left, -2) => {
                let right = child(arena, node, Side::Right);
                if arena.balance_factor(right) <= 0 {
                    rotate_left(arena, node)
                } else {
                    rotate_right_left(arena, node)
                }
            }
            (Side::Right, 2) => {
                let left = child(arena, node, Side::Left);
                if arena.balance_factor(left) >= 0 {
                    rotate_right(arena, node)
                } else {
                    rotate_left_right(arena, node)
                }
            }
            _ => node,
        };

        if cfg!(debug_assertions) {
            assert!(arena.balance_factor(root).abs() <= 1);
        }
        root
    }
}

fn child<T>(arena: &Arena<T>, node: NodeId, side: Side) -> NodeId {
    arena[node]
        .child(side)
        .expect("A subtree two levels deeper than its sibling is not empty")
}

/// Rotate `root` to the right. This moves the left child up vertically and `root` down
/// vertically. Used to rebalance the tree when the left child is too tall. Returns the new
/// subtree root.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///       root                pivot
///       /   \               /   \
///    pivot   z   rotate -> x    root
///    /  \                       /  \
///   x    y                     y    z
/// ```
fn rotate_right<T>(arena: &mut Arena<T>, root: NodeId) -> NodeId {
    let pivot = child(arena, root, Side::Left);

    arena[root].left = arena[pivot].right;
    arena.fix_depth(root);

    arena[pivot].right = Some(root);
    arena.fix_depth(pivot);

    trace!("rotated {:?} right; new subtree root {:?}", root, pivot);
    pivot
}

/// Mirror image of [`rotate_right`]: the right child moves up and `root` becomes its left child.
fn rotate_left<T>(arena: &mut Arena<T>, root: NodeId) -> NodeId {
    let pivot = child(arena, root, Side::Right);

    arena[root].right = arena[pivot].left;
    arena.fix_depth(root);

    arena[pivot].left = Some(root);
    arena.fix_depth(pivot);

    trace!("rotated {:?} left; new subtree root {:?}", root, pivot);
    pivot
}

/// The left child leans right: straighten it first, then rotate `root` right.
fn rotate_left_right<T>(arena: &mut Arena<T>, root: NodeId) -> NodeId {
    let left = child(arena, root, Side::Left);
    arena[root].left = Some(rotate_left(arena, left));
    rotate_right(arena, root)
}

/// The right child leans left: straighten it first, then rotate `root` left.
fn rotate_right_left<T>(arena: &mut Arena<T>, root: NodeId) -> NodeId {
    let right = child(arena, root, Side::Right);
    arena[root].right = Some(rotate_right(arena, right));
    rotate_left(arena, root)
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;
    use crate::NodeRef;

    /// The max depth of the subtree, or `None` if any node in it is out of balance.
    fn balanced_depth(node: Option<NodeRef<'_, i8>>) -> Option<isize> {
        let Some(node) = node else {
            return Some(0);
        };
        let left = balanced_depth(node.left())?;
        let right = balanced_depth(node.right())?;
        ((left - right).abs() <= 1).then(|| left.max(right) + 1)
    }

    /// Applies a set of operations to a tree and a set, checking after every operation that they
    /// agree and that the tree is still balanced.
    fn do_ops(ops: &[Op<i8>], tree: &mut AvlTree<i8>, set: &mut BTreeSet<i8>) -> bool {
        for op in ops {
            let agrees = match op {
                Op::Insert(k) => tree.add(*k).is_ok() == set.insert(*k),
                Op::Remove(k) => tree.delete(k).ok() == set.take(k),
                Op::Iter => tree.in_order().eq(set.iter()),
            };
            if !agrees || balanced_depth(tree.root()).is_none() || tree.count() != set.len() {
                return false;
            }
        }
        true
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = AvlTree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set) && set.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn height_is_logarithmic(xs: Vec<i8>) -> bool {
            let mut tree = AvlTree::new();
            for x in xs {
                let _ = tree.add(x);
            }

            // An AVL tree of height h holds at least fib(h + 2) - 1 nodes.
            let (mut a, mut b) = (2usize, 3usize);
            let mut max_height = 1;
            while b <= tree.count() + 1 {
                let next = a + b;
                a = b;
                b = next;
                max_height += 1;
            }
            tree.height() <= max_height
        }
    }
}
