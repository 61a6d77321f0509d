//! The tree algebra underneath a [`Set`][crate::Set].
//!
//! A [`Tree`] is either [`Empty`][Tree::Empty] or a [`Node`] owning one
//! element and two child `Tree`s. Every operation is a recursive `match` over
//! those two cases. Mutating operations consume the tree by value and hand back
//! the subtree that should take its place, so a rotation further down never
//! leaves a stale reference behind.
//!
//! The read-only half of this module (`is_empty`, `element`, `left`, `right`,
//! `depth`) is everything tooling that draws a tree needs. The mutating half is
//! crate-private: only the set facade may insert or remove, which keeps the
//! facade's element count the single source of truth.
//!
//! # Examples
//!
//! ```
//! use avlset::{AvlSet, Tree};
//!
//! let set: AvlSet<_> = [2, 1, 3].into_iter().collect();
//! let root = set.root().node().unwrap();
//!
//! assert_eq!(root.element(), &2);
//! assert_eq!(root.left().element(), Some(&1));
//! assert_eq!(root.right().element(), Some(&3));
//! assert!(matches!(root.left().node().unwrap().left(), Tree::Empty));
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::balance::Balance;
use crate::compare::Compare;
use crate::iter::Elements;

/// A binary search tree over elements of type `T`.
#[derive(Clone, Debug)]
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Empty,
    /// A [`Node`] holding an element and two children.
    Node(Box<Node<T>>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::Empty
    }
}

/// A `Node` has an element and two children, either of which may be
/// [`Empty`][Tree::Empty].
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Tree<T>,
    pub(crate) right: Tree<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<T> Tree<T> {
    /// A single node with no children.
    pub(crate) fn leaf(element: T) -> Self {
        Self::Node(Box::new(Node {
            element,
            left: Self::Empty,
            right: Self::Empty,
            height: 1,
        }))
    }

    /// Replaces this tree with [`Empty`][Tree::Empty], returning what was here.
    pub(crate) fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns `true` if there is no node here.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The number of levels in this tree. Reads the height cached in the root
    /// so it runs in constant time.
    pub fn depth(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.height,
        }
    }

    /// The number of levels in this tree, computed by visiting every node
    /// instead of trusting any cached height.
    pub fn measured_depth(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.measured_depth().max(n.right.measured_depth()),
        }
    }

    /// The number of nodes in this tree. This walks the whole tree; the set
    /// facade keeps its own count.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.len() + n.right.len(),
        }
    }

    /// The root node, if any.
    pub fn node(&self) -> Option<&Node<T>> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n),
        }
    }

    /// The element stored at the root, if any.
    pub fn element(&self) -> Option<&T> {
        self.node().map(Node::element)
    }

    /// Returns `true` if an element comparing equal to `x` is in this tree.
    pub fn contains<C>(&self, x: &T, cmp: &C) -> bool
    where
        C: Compare<T>,
    {
        match self {
            Self::Empty => false,
            Self::Node(n) => match cmp.compare(x, &n.element) {
                Ordering::Less => n.left.contains(x, cmp),
                Ordering::Equal => true,
                Ordering::Greater => n.right.contains(x, cmp),
            },
        }
    }

    /// The smallest element in this tree.
    pub fn min(&self) -> Option<&T> {
        self.node().map(|n| &n.leftmost().element)
    }

    /// The largest element in this tree.
    pub fn max(&self) -> Option<&T> {
        self.node().map(|n| &n.rightmost().element)
    }

    /// Finds the node holding the next element after `x`.
    ///
    /// `ancestor` is the closest node above this subtree whose left subtree
    /// contains it, or `None` at the top. Returns `None` if `x` is the largest
    /// element or isn't in the tree at all.
    pub fn successor<'a, C>(
        &'a self,
        x: &T,
        ancestor: Option<&'a Node<T>>,
        cmp: &C,
    ) -> Option<&'a Node<T>>
    where
        C: Compare<T>,
    {
        let node = self.node()?;
        match cmp.compare(x, &node.element) {
            Ordering::Less => node.left.successor(x, Some(node), cmp),
            Ordering::Equal => node.right.node().map(Node::leftmost).or(ancestor),
            Ordering::Greater => node.right.successor(x, ancestor, cmp),
        }
    }

    /// Finds the node holding the element right before `x`. The mirror image of
    /// [`successor`][Tree::successor]: `ancestor` is the closest node above
    /// whose right subtree contains this one.
    pub fn predecessor<'a, C>(
        &'a self,
        x: &T,
        ancestor: Option<&'a Node<T>>,
        cmp: &C,
    ) -> Option<&'a Node<T>>
    where
        C: Compare<T>,
    {
        let node = self.node()?;
        match cmp.compare(x, &node.element) {
            Ordering::Less => node.left.predecessor(x, ancestor, cmp),
            Ordering::Equal => node.left.node().map(Node::rightmost).or(ancestor),
            Ordering::Greater => node.right.predecessor(x, Some(node), cmp),
        }
    }

    /// Calls `f` on every element in ascending order.
    pub fn visit_inorder<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.inorder(&mut f);
    }

    fn inorder<F>(&self, f: &mut F)
    where
        F: FnMut(&T),
    {
        if let Self::Node(n) = self {
            n.left.inorder(f);
            f(&n.element);
            n.right.inorder(f);
        }
    }

    /// Calls `f` on every node before its children, left subtree first. Along
    /// with each element `f` receives the node's parent (`None` for the root)
    /// so callers can rebuild the shape of the tree.
    pub fn visit_preorder<F>(&self, mut f: F)
    where
        F: FnMut(Option<&Node<T>>, &T),
    {
        self.preorder(None, &mut f);
    }

    fn preorder<F>(&self, parent: Option<&Node<T>>, f: &mut F)
    where
        F: FnMut(Option<&Node<T>>, &T),
    {
        if let Self::Node(n) = self {
            f(parent, &n.element);
            n.left.preorder(Some(n), f);
            n.right.preorder(Some(n), f);
        }
    }

    /// A lazy, ascending sequence of the elements in this tree. Nothing is
    /// visited until the sequence is advanced. Call this again to start over.
    pub fn elements(&self) -> Elements<'_, T> {
        Elements::new(self)
    }

    /// Inserts `x` below this tree. Returns the tree that replaces this one and
    /// whether `x` was actually added. An element equal to `x` that is already
    /// present is kept and `x` is dropped.
    pub(crate) fn insert<B, C>(self, x: T, cmp: &C) -> (Self, bool)
    where
        B: Balance,
        C: Compare<T>,
    {
        match self {
            Self::Empty => (Self::leaf(x), true),
            Self::Node(mut n) => {
                let inserted = match cmp.compare(&x, &n.element) {
                    Ordering::Less => {
                        let (left, inserted) = n.left.take().insert::<B, _>(x, cmp);
                        n.left = left;
                        inserted
                    }
                    Ordering::Equal => false,
                    Ordering::Greater => {
                        let (right, inserted) = n.right.take().insert::<B, _>(x, cmp);
                        n.right = right;
                        inserted
                    }
                };

                // Nothing below changed shape if nothing was added.
                let n = if inserted { B::rebalance(n) } else { n };
                (Self::Node(n), inserted)
            }
        }
    }

    /// Removes the element equal to `x`. Returns the tree that replaces this one
    /// and the removed element, if there was one.
    pub(crate) fn remove<B, C>(self, x: &T, cmp: &C) -> (Self, Option<T>)
    where
        B: Balance,
        C: Compare<T>,
    {
        match self {
            Self::Empty => (Self::Empty, None),
            Self::Node(mut n) => {
                let removed = match cmp.compare(x, &n.element) {
                    Ordering::Less => {
                        let (left, removed) = n.left.take().remove::<B, _>(x, cmp);
                        n.left = left;
                        removed
                    }
                    Ordering::Greater => {
                        let (right, removed) = n.right.take().remove::<B, _>(x, cmp);
                        n.right = right;
                        removed
                    }
                    Ordering::Equal => match n.left.take() {
                        // Splice: the right subtree takes this node's place.
                        Self::Empty => {
                            let Node { element, right, .. } = *n;
                            return (right, Some(element));
                        }
                        // Promote the predecessor's element into this node and drop its
                        // node from the left subtree instead.
                        Self::Node(left) => {
                            let (left, predecessor) = left.delete_max::<B>();
                            n.left = left;
                            Some(mem::replace(&mut n.element, predecessor))
                        }
                    },
                };

                let n = if removed.is_some() { B::rebalance(n) } else { n };
                (Self::Node(n), removed)
            }
        }
    }
}

impl<T> Node<T> {
    /// The element stored in this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// The subtree of elements less than this one.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The subtree of elements greater than this one.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    /// How many levels are in the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The difference in height between the right and left subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        self.right.depth() as isize - self.left.depth() as isize
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = self.left.depth().max(self.right.depth()) + 1;
    }

    fn leftmost(&self) -> &Self {
        match &self.left {
            Tree::Empty => self,
            Tree::Node(l) => l.leftmost(),
        }
    }

    fn rightmost(&self) -> &Self {
        match &self.right {
            Tree::Empty => self,
            Tree::Node(r) => r.rightmost(),
        }
    }

    /// Detaches the largest node of this subtree. Returns the subtree left behind
    /// and the detached node's element.
    fn delete_max<B>(mut self: Box<Self>) -> (Tree<T>, T)
    where
        B: Balance,
    {
        match self.right.take() {
            Tree::Empty => {
                let Node { element, left, .. } = *self;
                (left, element)
            }
            Tree::Node(r) => {
                let (right, max) = r.delete_max::<B>();
                self.right = right;
                (Tree::Node(B::rebalance(self)), max)
            }
        }
    }
}
