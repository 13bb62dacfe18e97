//! This crate exposes two interchangeable ordered trees over any [`Ord`] value type: a plain
//! Binary Search Tree ([`Bst`]) and a self-balancing AVL tree ([`AvlTree`]).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`. Inserting sorted input into a plain BST makes the
//! height equal to the number of nodes; an AVL tree rotates subtrees as it goes so the height
//! stays within `O(lg N)`. Both share one [`Tree`] type and differ only in their [`Balance`]
//! policy.
//!
//! ## Values are unique
//!
//! Adding a value equal to one already stored fails with [`Error::AlreadyExists`], and finding or
//! deleting a missing value fails with [`Error::NotFound`]. Neither failure changes the tree.
//!
//! ## Traversal
//!
//! [`Tree::pre_order`], [`Tree::in_order`] and [`Tree::post_order`] walk the tree with an explicit
//! stack. The in-order walk yields values in ascending order.
//!
//! # Examples
//!
//! ```
//! use ordtree::{AvlTree, Bst};
//!
//! let values = vec![6, 1, 8, 4, 3, 2, 10, 9, 5, 7];
//!
//! let mut bst = Bst::new();
//! bst.add_range(values.clone()).unwrap();
//!
//! let mut avl = AvlTree::new();
//! avl.add_range(values).unwrap();
//!
//! assert_eq!(bst.height(), 5);
//! assert_eq!(avl.height(), 4);
//! assert!(bst.in_order().eq(avl.in_order()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod avl;
mod balance;
mod bst;
mod error;
mod iter;
mod node;
mod tree;


pub use crate::avl::{Avl, AvlTree};
pub use crate::balance::Balance;
pub use crate::bst::{Bst, Unbalanced};
pub use crate::error::Error;
pub use crate::iter::{InOrder, PostOrder, PreOrder};
pub use crate::node::{NodeId, NodeRef, Tag};
pub use crate::tree::Tree;
