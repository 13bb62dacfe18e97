//! A plain, unbalanced BST. Values land wherever the insertion order puts them, so feeding it
//! sorted input produces a linked list. Useful as a baseline and whenever input is known to be
//! well mixed.
//!
//! # Examples
//!
//! ```
//! use ordtree::Bst;
//!
//! let mut tree = Bst::new();
//! tree.add_range(vec![1, 2, 3]).unwrap();
//!
//! // Ascending input never gets rebalanced.
//! assert_eq!(tree.height(), 3);
//! ```

use crate::arena::Arena;
use crate::balance::Balance;
use crate::node::{NodeId, Side};
use crate::tree::Tree;

/// The no-op balancing policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    fn rebalance_after_insert<T>(_arena: &mut Arena<T>, node: NodeId) -> NodeId {
        node
    }

    fn rebalance_after_delete<T>(_arena: &mut Arena<T>, node: NodeId, _side: Side) -> NodeId {
        node
    }
}

/// An unbalanced binary search tree.
pub type Bst<T> = Tree<T, Unbalanced>;
