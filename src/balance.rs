//! Rebalancing policies.
//!
//! After a node's subtree changes shape the node hands itself to
//! [`Balance::rebalance`], which returns the node that should take its place.
//! [`Avl`] restores the AVL invariant with rotations; [`Plain`] only keeps the
//! cached height current, giving an ordinary unbalanced BST.
//!
//! See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.

use crate::tree::{Node, Tree};

mod sealed {
    /// Keeps [`Balance`][super::Balance] closed to the policies in this module.
    pub trait Sealed {}

    impl Sealed for super::Avl {}
    impl Sealed for super::Plain {}
}

/// A strategy for restoring balance to a node whose subtree just changed.
pub trait Balance: sealed::Sealed {
    /// Rebalances `node` after one of its children changed. Returns the root of
    /// the rebalanced subtree, which may be a different node than `node`.
    fn rebalance<T>(node: Box<Node<T>>) -> Box<Node<T>>;
}

/// Self-balancing: every node's children differ in height by at most one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Avl;

/// No balancing. Inserting sorted input degrades the tree into a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plain;

impl Balance for Plain {
    fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.fix_height();
        node
    }
}

impl Balance for Avl {
    fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.fix_height();
        let bf = node.balance_factor();

        let node = if bf < -1 {
            let left = node.left.node().expect("left side is taller so it has a node");
            if left.left.depth() >= left.right.depth() {
                node.rotate_right()
            } else {
                node.rotate_left_right()
            }
        } else if bf > 1 {
            let right = node.right.node().expect("right side is taller so it has a node");
            if right.right.depth() >= right.left.depth() {
                node.rotate_left()
            } else {
                node.rotate_right_left()
            }
        } else {
            node
        };

        // After balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(debug_assertions) {
            let left_height = node.left.depth();
            let right_height = node.right.depth();
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        node
    }
}

impl<T> Node<T> {
    /// Rotate self to the right. This moves the left child up vertically and self down vertically.
    /// Used to rebalance the tree when the left child is too tall.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///       old_root                new_root
    ///        /     \                /     \
    ///   new_root    z   rotate ->  x    old_root
    ///    /   \                            /  \
    ///   x     y                          y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.left.take() {
            Tree::Node(n) => n,
            Tree::Empty => unreachable!("Rotate right => left child"),
        };

        self.left = new_root.right.take();
        self.fix_height();

        new_root.right = Tree::Node(self);
        new_root.fix_height();
        new_root
    }

    /// Mirror image of `rotate_right`: moves the right child up.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.right.take() {
            Tree::Node(n) => n,
            Tree::Empty => unreachable!("Rotate left => right child"),
        };

        self.right = new_root.left.take();
        self.fix_height();

        new_root.left = Tree::Node(self);
        new_root.fix_height();
        new_root
    }

    fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        self.left = match self.left.take() {
            Tree::Node(left) => Tree::Node(left.rotate_left()),
            Tree::Empty => unreachable!("Rotate left-right => left child"),
        };
        self.rotate_right()
    }

    fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        self.right = match self.right.take() {
            Tree::Node(right) => Tree::Node(right.rotate_right()),
            Tree::Empty => unreachable!("Rotate right-left => right child"),
        };
        self.rotate_left()
    }
}
