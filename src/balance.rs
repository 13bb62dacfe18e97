//! The seam between the shared tree walk and a balancing strategy.

use crate::arena::Arena;
use crate::node::{NodeId, Side};

mod private {
    pub trait Sealed {}

    impl Sealed for crate::bst::Unbalanced {}
    impl Sealed for crate::avl::Avl {}
}

/// How a [`Tree`][crate::Tree] restores its shape after a structural change.
///
/// Inserts and deletes walk down from the root, make their change, and then unwind the path they
/// took bottom-up. On every frame of that unwind the frame's node has already had its child link
/// rewritten and its cached depth refreshed; the policy may then restructure the subtree rooted
/// there and returns whichever node now roots it.
///
/// This trait is sealed: [`Unbalanced`][crate::Unbalanced] and [`Avl`][crate::Avl] are the only
/// implementations.
pub trait Balance: private::Sealed {
    /// Called on every node between the new leaf and the root.
    fn rebalance_after_insert<T>(arena: &mut Arena<T>, node: NodeId) -> NodeId;

    /// Called on every node between the unlinked node and the root. `side` names the child of
    /// `node` whose subtree just lost a node.
    fn rebalance_after_delete<T>(arena: &mut Arena<T>, node: NodeId, side: Side) -> NodeId;
}
