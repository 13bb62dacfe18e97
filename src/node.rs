//! Nodes and the handles callers use to look at them.
//!
//! Nodes live in an [`Arena`] and point at their children through [`NodeId`]s, so moving a
//! subtree around during a rotation is a matter of rewriting a couple of ids. Callers never get a
//! mutable path into a node: [`NodeRef`] only reads.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::arena::Arena;

/// Opaque caller data attached to a node when it is added. See
/// [`Tree::add_tagged`][crate::Tree::add_tagged].
pub type Tag = Arc<dyn Any + Send + Sync>;

/// A stable handle to a node in a tree. It stays valid until the node it names is deleted (or the
/// tree is cleared). After that it never resolves again, even once a later insert reuses the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Which child link of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Smaller values.
    Left,
    /// Larger values.
    Right,
}

/// One slot of an [`Arena`].
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// Distance from the root along the path used to reach this node. The root has a height of
    /// 1. Only refreshed once a mutation has finished rebalancing.
    pub(crate) height: usize,
    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// depth of 1.
    pub(crate) depth: usize,
    pub(crate) tag: Option<Tag>,
}

/// Manual implementation of `Clone` so the tag is shared rather than requiring `dyn Any: Clone`.
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: self.left,
            right: self.right,
            height: self.height,
            depth: self.depth,
            tag: self.tag.as_ref().map(Arc::clone),
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, tag: Option<Tag>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
            depth: 1,
            tag,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// A read-only view of one node in a tree.
pub struct NodeRef<'a, T> {
    arena: &'a Arena<T>,
    id: NodeId,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, id: NodeId) -> Self {
        Self { arena, id }
    }

    fn node(&self) -> &'a Node<T> {
        &self.arena[self.id]
    }

    /// The arena handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// The left child, holding smaller values.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node().left.map(|id| Self::new(self.arena, id))
    }

    /// The right child, holding larger values.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node().right.map(|id| Self::new(self.arena, id))
    }

    /// Distance from the root to this node, counting the root as 1.
    pub fn height(&self) -> usize {
        self.node().height
    }

    /// Max depth of the left subtree minus max depth of the right subtree.
    pub fn balance_factor(&self) -> isize {
        self.arena.balance_factor(self.id)
    }

    /// The tag given to [`Tree::add_tagged`][crate::Tree::add_tagged], if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// let node = tree.add_tagged(1, "one").unwrap();
    ///
    /// let tag = node.tag().and_then(|tag| tag.downcast_ref::<&str>());
    /// assert_eq!(tag, Some(&"one"));
    /// ```
    pub fn tag(&self) -> Option<&'a (dyn Any + Send + Sync)> {
        self.node().tag.as_deref()
    }
}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .field("height", &self.height())
            .finish()
    }
}
