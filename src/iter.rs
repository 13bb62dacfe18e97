//! Depth-first traversals. Each keeps its own explicit stack instead of recursing, so an
//! unbalanced tree of any height can be walked, and each can be rewound with `reset` to walk the
//! tree again from its root.
//!
//! # Examples
//!
//! ```
//! use ordtree::Bst;
//!
//! let mut tree = Bst::new();
//! tree.add_range(vec![2, 1, 3]).unwrap();
//!
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
//! ```

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::node::NodeId;

/// Root, then left subtree, then right subtree.
pub struct PreOrder<'a, T> {
    arena: &'a Arena<T>,
    root: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        let mut iter = Self {
            arena,
            root,
            stack: Vec::new(),
        };
        iter.reset();
        iter
    }

    /// Rewinds to the start of the traversal.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.extend(self.root);
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        let node = &arena[self.stack.pop()?];
        // Right goes in first so the left subtree is walked first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

/// Left subtree, then root, then right subtree: ascending order.
pub struct InOrder<'a, T> {
    arena: &'a Arena<T>,
    root: Option<NodeId>,
    stack: Vec<NodeId>,
    /// The next subtree whose left spine still has to be pushed.
    current: Option<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            root,
            stack: Vec::new(),
            current: root,
        }
    }

    /// Rewinds to the start of the traversal.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.current = self.root;
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = arena[id].left;
        }

        let node = &arena[self.stack.pop()?];
        self.current = node.right;
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Left subtree, then right subtree, then root.
///
/// A node is only yielded once its right subtree is done, which is detected by the last yielded
/// node being that right child (or the right child being empty).
pub struct PostOrder<'a, T> {
    arena: &'a Arena<T>,
    root: Option<NodeId>,
    stack: Vec<NodeId>,
    /// The last node yielded, or `None` right after a left spine was pushed.
    last: Option<NodeId>,
    /// The subtree whose left spine gets pushed next, when `descend` is set.
    next: Option<NodeId>,
    descend: bool,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        let mut iter = Self {
            arena,
            root,
            stack: Vec::new(),
            last: None,
            next: None,
            descend: true,
        };
        iter.reset();
        iter
    }

    /// Rewinds to the start of the traversal.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.last = None;
        self.next = self.root;
        self.descend = true;
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        loop {
            if self.descend {
                self.last = None;
                let mut cursor = self.next.take();
                while let Some(id) = cursor {
                    self.stack.push(id);
                    cursor = arena[id].left;
                }
            }

            let &top = self.stack.last()?;

            let node = &arena[top];
            if node.right == self.last {
                self.stack.pop();
                self.last = Some(top);
                self.descend = false;
                return Some(&node.value);
            }

            self.next = node.right;
            self.descend = true;
        }
    }
}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}
