//! This crate exposes an ordered set backed by a self-balancing Binary Search
//! Tree (an AVL tree), plus the plain, unbalanced tree it is built from for
//! comparison.
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
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). Inserting
//! sorted values into a plain BST makes its height grow linearly.
//!
//! ## AVL Tree
//!
//! An AVL tree adds a third invariant:
//!
//! 3. For every `Node`, the heights of its left and right subtrees differ by
//!    at most one.
//!
//! Each node caches its height. After an insert or delete changes a subtree,
//! every node on the path back up to the root recomputes its height and, if
//! the invariant broke, restores it with one or two rotations. This limits the
//! height to `O(lg N)` where `N` is the number of nodes.
//!
//! # Examples
//!
//! ```
//! use avlset::AvlSet;
//!
//! let mut set = AvlSet::new();
//! for x in 1..=7 {
//!     set.insert(x);
//! }
//!
//! // Sorted input still gives a tree of minimal height.
//! assert_eq!(set.depth(), 3);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! assert_eq!(set.successor(&4), Some(&5));
//! assert!(set.remove(&4));
//! assert_eq!(set.successor(&3), Some(&5));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balance;
pub mod compare;
pub mod iter;
pub mod set;
pub mod tree;

pub use balance::{Avl, Balance, Plain};
pub use compare::{Compare, Natural};
pub use set::{AvlSet, BstSet, Set};
pub use tree::{Node, Tree};

#[cfg(test)]
mod test {
    pub(crate) mod invariants;
    pub(crate) mod quick;
}
