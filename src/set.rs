//! The ordered set facade.
//!
//! A [`Set`] owns the root of a [`Tree`], the number of elements in it and the
//! comparator that orders them. The tree operations report whether they added
//! or removed anything and the set adjusts its count from that, so the count is
//! only ever written here.
//!
//! # Examples
//!
//! ```
//! use avlset::AvlSet;
//!
//! let mut set = AvlSet::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//!
//! assert!(set.insert(1));
//! assert!(set.contains(&1));
//!
//! // Inserting the same element again does nothing.
//! assert!(!set.insert(1));
//! assert_eq!(set.len(), 1);
//!
//! // Removing it reports whether it was there.
//! assert!(set.remove(&1));
//! assert!(!set.remove(&1));
//! assert!(set.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::balance::{Avl, Balance, Plain};
use crate::compare::{Compare, Natural};
use crate::iter::{IntoIter, Iter};
use crate::tree::{Node, Tree};

/// An ordered set of `T`, ordered by `C` and kept in shape by `B`.
///
/// Most code wants [`AvlSet`]. [`BstSet`] skips rebalancing and exists mostly
/// for comparison.
pub struct Set<T, C = Natural, B = Avl> {
    root: Tree<T>,
    len: usize,
    cmp: C,
    balance: PhantomData<B>,
}

/// A [`Set`] backed by a self-balancing AVL tree.
pub type AvlSet<T, C = Natural> = Set<T, C, Avl>;

/// A [`Set`] backed by a plain, unbalanced binary search tree.
pub type BstSet<T, C = Natural> = Set<T, C, Plain>;

impl<T, B> Set<T, Natural, B>
where
    T: Ord,
    B: Balance,
{
    /// Generates a new, empty `Set` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C, B> Default for Set<T, C, B>
where
    C: Default,
{
    fn default() -> Self {
        Self {
            root: Tree::Empty,
            len: 0,
            cmp: C::default(),
            balance: PhantomData,
        }
    }
}

impl<T, C, B> Set<T, C, B> {
    /// The number of elements in the set. Runs in constant time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the underlying tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlset::{AvlSet, BstSet};
    ///
    /// let balanced: AvlSet<_> = (1..=7).collect();
    /// let unbalanced: BstSet<_> = (1..=7).collect();
    ///
    /// assert_eq!(balanced.depth(), 3);
    /// assert_eq!(unbalanced.depth(), 7);
    /// ```
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// The root of the underlying tree, for tooling that wants to inspect its
    /// shape. The tree can't be modified through this.
    pub fn root(&self) -> &Tree<T> {
        &self.root
    }

    /// The comparator ordering this set.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The smallest element in the set.
    pub fn min(&self) -> Option<&T> {
        self.root.min()
    }

    /// The largest element in the set.
    pub fn max(&self) -> Option<&T> {
        self.root.max()
    }

    /// An iterator over the elements in ascending order. Elements are found as
    /// the iterator advances, not up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlset::AvlSet;
    ///
    /// let set: AvlSet<_> = [3, 1, 2, 1].into_iter().collect();
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.len)
    }

    /// Calls `f` on each element in ascending order.
    pub fn visit_inorder<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.root.visit_inorder(f);
    }

    /// Calls `f` on each element before the elements below it, passing along
    /// the parent node of each element (`None` for the root).
    ///
    /// # Examples
    ///
    /// ```
    /// use avlset::AvlSet;
    ///
    /// let set: AvlSet<_> = [1, 2, 3].into_iter().collect();
    /// let mut edges = Vec::new();
    /// set.visit_preorder(|parent, x| {
    ///     if let Some(parent) = parent {
    ///         edges.push((*parent.element(), *x));
    ///     }
    /// });
    ///
    /// assert_eq!(edges, vec![(2, 1), (2, 3)]);
    /// ```
    pub fn visit_preorder<F>(&self, f: F)
    where
        F: FnMut(Option<&Node<T>>, &T),
    {
        self.root.visit_preorder(f);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.root = Tree::Empty;
        self.len = 0;
    }
}

impl<T, C, B> Set<T, C, B>
where
    C: Compare<T>,
    B: Balance,
{
    /// Generates a new, empty `Set` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlset::AvlSet;
    ///
    /// let mut set = AvlSet::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// set.insert("ccc");
    /// set.insert("a");
    ///
    /// // Same length means same element under this order.
    /// assert!(!set.insert("b"));
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["a", "ccc"]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: Tree::Empty,
            len: 0,
            cmp,
            balance: PhantomData,
        }
    }

    /// Returns `true` if the set holds an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool {
        self.root.contains(x, &self.cmp)
    }

    /// Same as [`contains`][Set::contains] but walks down the tree in a loop
    /// instead of recursing.
    pub fn search(&self, x: &T) -> bool {
        let mut current = &self.root;
        while let Tree::Node(n) = current {
            current = match self.cmp.compare(x, n.element()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// Adds `x` to the set. Returns `true` if it was added and `false` if an
    /// equal element was already present, in which case the set is unchanged.
    pub fn insert(&mut self, x: T) -> bool {
        let (root, inserted) = self.root.take().insert::<B, _>(x, &self.cmp);
        self.root = root;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the element equal to `x`. Returns `true` if there was one.
    pub fn remove(&mut self, x: &T) -> bool {
        self.take(x).is_some()
    }

    /// Removes the element equal to `x` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlset::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(String::from("kept"));
    ///
    /// assert_eq!(set.take(&"kept".to_string()), Some("kept".to_string()));
    /// assert_eq!(set.take(&"kept".to_string()), None);
    /// ```
    pub fn take(&mut self, x: &T) -> Option<T> {
        let (root, removed) = self.root.take().remove::<B, _>(x, &self.cmp);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// The smallest element greater than `x`. Returns `None` if `x` is the
    /// largest element or isn't in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlset::AvlSet;
    ///
    /// let set: AvlSet<_> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(set.successor(&20), Some(&30));
    /// assert_eq!(set.successor(&30), None);
    /// assert_eq!(set.predecessor(&20), Some(&10));
    /// ```
    pub fn successor(&self, x: &T) -> Option<&T> {
        self.root.successor(x, None, &self.cmp).map(Node::element)
    }

    /// The largest element less than `x`. Returns `None` if `x` is the smallest
    /// element or isn't in the set.
    pub fn predecessor(&self, x: &T) -> Option<&T> {
        self.root.predecessor(x, None, &self.cmp).map(Node::element)
    }
}

impl<T, C, B> Clone for Set<T, C, B>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            cmp: self.cmp.clone(),
            balance: PhantomData,
        }
    }
}

impl<T, C, B> fmt::Debug for Set<T, C, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two sets are equal when they hold equal elements in the same order.
impl<T, C, B> PartialEq for Set<T, C, B>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, C, B> Eq for Set<T, C, B> where T: Eq {}

impl<T, C, B> FromIterator<T> for Set<T, C, B>
where
    C: Compare<T> + Default,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, C, B> Extend<T> for Set<T, C, B>
where
    C: Compare<T>,
    B: Balance,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<'a, T, C, B> IntoIterator for &'a Set<T, C, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C, B> IntoIterator for Set<T, C, B> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}
