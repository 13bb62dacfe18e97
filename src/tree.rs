//! The tree shared by every balancing policy.
//!
//! # Examples
//!
//! ```
//! use ordtree::{AvlTree, Error};
//!
//! let mut tree = AvlTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.find(&1).err(), Some(Error::NotFound));
//!
//! tree.add(1).unwrap();
//! assert!(tree.contains(&1));
//!
//! // Values are unique.
//! assert_eq!(tree.add(1).err(), Some(Error::AlreadyExists(1)));
//! assert_eq!(tree.count(), 1);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert!(!tree.contains(&1));
//! ```

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::sync::Arc;

use log::{debug, trace};

use crate::arena::Arena;
use crate::balance::Balance;
use crate::error::Error;
use crate::iter::{InOrder, PostOrder, PreOrder};
use crate::node::{Node, NodeId, NodeRef, Side, Tag};

/// An ordered set of unique values stored as a binary search tree. `B` decides how (and whether)
/// the tree rebalances itself; see [`Bst`][crate::Bst] and [`AvlTree`][crate::AvlTree].
pub struct Tree<T, B> {
    arena: Arena<T>,
    root: Option<NodeId>,
    /// The largest node height, i.e. the number of levels in the tree. 0 when empty.
    height: usize,
    policy: PhantomData<fn() -> B>,
}

impl<T, B> Default for Tree<T, B>
where
    B: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Clone for Tree<T, B>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
            height: self.height,
            policy: PhantomData,
        }
    }
}

impl<T, B> fmt::Debug for Tree<T, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("count", &self.arena.len())
            .field("height", &self.height)
            .field(
                "values",
                &InOrder::new(&self.arena, self.root).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a, T, B> IntoIterator for &'a Tree<T, B> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> InOrder<'a, T> {
        InOrder::new(&self.arena, self.root)
    }
}

impl<T, B> Tree<T, B>
where
    B: Balance,
{
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            height: 0,
            policy: PhantomData,
        }
    }

    /// Adds `value` to the tree and returns a handle to its node.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyExists`] (carrying `value` back) if an equal value is already stored. The
    /// tree is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.add(2).unwrap();
    ///
    /// let node = tree.add(1).unwrap();
    /// assert_eq!(node.value(), &1);
    /// assert_eq!(node.height(), 2);
    /// ```
    pub fn add(&mut self, value: T) -> Result<NodeRef<'_, T>, Error<T>>
    where
        T: Ord,
    {
        let id = self.insert(value, None)?;
        Ok(NodeRef::new(&self.arena, id))
    }

    /// Like [`Tree::add`] but attaches an opaque `tag` to the new node, readable later through
    /// [`NodeRef::tag`].
    pub fn add_tagged<G>(&mut self, value: T, tag: G) -> Result<NodeRef<'_, T>, Error<T>>
    where
        T: Ord,
        G: Any + Send + Sync,
    {
        let id = self.insert(value, Some(Arc::new(tag) as Tag))?;
        Ok(NodeRef::new(&self.arena, id))
    }

    /// Adds every value in order. Stops at the first value that is already present and returns
    /// its error; everything added before it stays in the tree.
    pub fn add_range<I>(&mut self, values: I) -> Result<(), Error<T>>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(value, None)?;
        }
        Ok(())
    }

    fn insert(&mut self, value: T, tag: Option<Tag>) -> Result<NodeId, Error<T>>
    where
        T: Ord,
    {
        let mut path = Vec::new();
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.arena[id];
            match value.cmp(&node.value) {
                Ordering::Less => {
                    path.push((id, Side::Left));
                    cursor = node.left;
                }
                Ordering::Equal => return Err(Error::AlreadyExists(value)),
                Ordering::Greater => {
                    path.push((id, Side::Right));
                    cursor = node.right;
                }
            }
        }

        let inserted = self.arena.insert(Node::new(value, tag));
        let mut subtree = inserted;
        while let Some((parent, side)) = path.pop() {
            self.arena[parent].set_child(side, Some(subtree));
            self.arena.fix_depth(parent);
            subtree = B::rebalance_after_insert(&mut self.arena, parent);
        }
        self.root = Some(subtree);
        self.recompute_heights();

        trace!(
            "inserted node {:?}; count = {}, height = {}",
            inserted,
            self.arena.len(),
            self.height
        );
        Ok(inserted)
    }

    /// Finds the node holding `value`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no node holds `value`.
    pub fn find(&self, value: &T) -> Result<NodeRef<'_, T>, Error<T>>
    where
        T: Ord,
    {
        self.locate(value)
            .map(|id| NodeRef::new(&self.arena, id))
            .ok_or(Error::NotFound)
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.locate(value).is_some()
    }

    fn locate(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.arena[id];
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Removes `value` from the tree and hands it back.
    ///
    /// A node with two children is not unlinked itself: it takes over the value of its in-order
    /// successor and the successor's node is unlinked instead. The surviving node keeps the tag it
    /// was added with. Handles to the successor are invalidated by this.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no node holds `value`. The tree is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Bst, Error};
    ///
    /// let mut tree = Bst::new();
    /// tree.add_range(vec![2, 1, 3]).unwrap();
    ///
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.delete(&2), Err(Error::NotFound));
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(3));
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T, Error<T>>
    where
        T: Ord,
    {
        let mut path = Vec::new();
        let mut cursor = self.root;
        let target = loop {
            let id = cursor.ok_or(Error::NotFound)?;
            let node = &self.arena[id];
            match value.cmp(&node.value) {
                Ordering::Less => {
                    path.push((id, Side::Left));
                    cursor = node.left;
                }
                Ordering::Equal => break id,
                Ordering::Greater => {
                    path.push((id, Side::Right));
                    cursor = node.right;
                }
            }
        };

        let (replacement, removed) = match (self.arena[target].left, self.arena[target].right) {
            (Some(_), Some(right)) => {
                path.push((target, Side::Right));
                let mut successor = right;
                while let Some(left) = self.arena[successor].left {
                    path.push((successor, Side::Left));
                    successor = left;
                }

                let successor = self.arena.remove(successor);
                let target = &mut self.arena[target];
                let removed = mem::replace(&mut target.value, successor.value);
                (successor.right, removed)
            }
            (left, right) => (left.or(right), self.arena.remove(target).value),
        };

        let mut subtree = replacement;
        while let Some((parent, side)) = path.pop() {
            self.arena[parent].set_child(side, subtree);
            self.arena.fix_depth(parent);
            subtree = Some(B::rebalance_after_delete(&mut self.arena, parent, side));
        }
        self.root = subtree;
        self.recompute_heights();

        trace!(
            "deleted node {:?}; count = {}, height = {}",
            target,
            self.arena.len(),
            self.height
        );
        Ok(removed)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
        self.height = 0;
    }

    /// Re-walks the whole tree assigning each node its distance from the root and records the
    /// largest one as the tree's height.
    fn recompute_heights(&mut self) {
        self.height = 0;
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        stack.extend(self.root.map(|root| (root, 1)));
        while let Some((id, height)) = stack.pop() {
            let node = &mut self.arena[id];
            node.height = height;
            self.height = self.height.max(height);
            stack.extend(node.left.map(|left| (left, height + 1)));
            stack.extend(node.right.map(|right| (right, height + 1)));
        }
    }
}

impl<T, B> Tree<T, B> {
    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn count(&self) -> usize {
        self.arena.len()
    }

    /// Number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    /// Looks a node up by handle. Returns `None` if that node has since been deleted or the tree
    /// cleared.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.arena.get(id).map(|_| NodeRef::new(&self.arena, id))
    }

    /// The node with the smallest value.
    pub fn min(&self) -> Option<NodeRef<'_, T>> {
        self.spine(Side::Left)
    }

    /// The node with the largest value.
    pub fn max(&self) -> Option<NodeRef<'_, T>> {
        self.spine(Side::Right)
    }

    fn spine(&self, side: Side) -> Option<NodeRef<'_, T>> {
        let mut id = self.root?;
        while let Some(child) = self.arena[id].child(side) {
            id = child;
        }
        Some(NodeRef::new(&self.arena, id))
    }

    /// Values root, then left subtree, then right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.arena, self.root)
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.arena, self.root)
    }

    /// Values left subtree, then right subtree, then root.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.arena, self.root)
    }
}
