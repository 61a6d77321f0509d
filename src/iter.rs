//! Lazy, ascending sequences over the elements of a tree.
//!
//! The sequence for a subtree is the sequence for its left child, then its own
//! element, then the sequence for its right child. Rather than building that
//! concatenation up front, each iterator keeps a stack of pending work and
//! only splits a subtree into those three pieces when it reaches it.
//!
//! Every iterator here borrows (or owns) the tree, so the tree can't change
//! while a sequence over it is alive.

use std::fmt;
use std::iter::FusedIterator;

use crate::tree::{Node, Tree};

/// A pending piece of an in-order walk.
enum Step<'a, T> {
    /// Hand out this element next.
    Yield(&'a T),
    /// Split this subtree into left, element, right.
    Descend(&'a Node<T>),
}

impl<'a, T> Clone for Step<'a, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Yield(x) => Self::Yield(*x),
            Self::Descend(n) => Self::Descend(*n),
        }
    }
}

/// The elements of a [`Tree`] in ascending order. Created by
/// [`Tree::elements`].
pub struct Elements<'a, T> {
    work: Vec<Step<'a, T>>,
}

/// Manual implementation of `Clone` so we don't require `T: Clone` just to copy
/// references.
impl<'a, T> Clone for Elements<'a, T> {
    fn clone(&self) -> Self {
        Self {
            work: self.work.clone(),
        }
    }
}

impl<'a, T> Elements<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            work: tree.node().map(Step::Descend).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.work.pop()? {
                Step::Yield(x) => return Some(x),
                Step::Descend(n) => {
                    // Pushed in reverse: the left subtree is popped first.
                    if let Some(right) = n.right().node() {
                        self.work.push(Step::Descend(right));
                    }
                    self.work.push(Step::Yield(n.element()));
                    if let Some(left) = n.left().node() {
                        self.work.push(Step::Descend(left));
                    }
                }
            }
        }
    }
}

impl<'a, T> FusedIterator for Elements<'a, T> {}

impl<'a, T> fmt::Debug for Elements<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the elements of a [`Set`][crate::Set] in ascending order.
/// Created by [`Set::iter`][crate::Set::iter].
pub struct Iter<'a, T> {
    elements: Elements<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, len: usize) -> Self {
        Self {
            elements: Elements::new(tree),
            remaining: len,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.elements.next()?;
        self.remaining -= 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> fmt::Debug for Iter<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.elements.fmt(f)
    }
}

/// A pending piece of a consuming in-order walk.
enum OwnedStep<T> {
    Yield(T),
    Descend(Box<Node<T>>),
}

/// An owning iterator over the elements of a [`Set`][crate::Set] in ascending
/// order. Created by the `into_iter` method on `Set`.
pub struct IntoIter<T> {
    work: Vec<OwnedStep<T>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(tree: Tree<T>, len: usize) -> Self {
        let work = match tree {
            Tree::Empty => Vec::new(),
            Tree::Node(n) => vec![OwnedStep::Descend(n)],
        };
        Self {
            work,
            remaining: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.work.pop()? {
                OwnedStep::Yield(x) => {
                    self.remaining -= 1;
                    return Some(x);
                }
                OwnedStep::Descend(n) => {
                    let Node {
                        element,
                        left,
                        right,
                        ..
                    } = *n;
                    if let Tree::Node(right) = right {
                        self.work.push(OwnedStep::Descend(right));
                    }
                    self.work.push(OwnedStep::Yield(element));
                    if let Tree::Node(left) = left {
                        self.work.push(OwnedStep::Descend(left));
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::AvlSet;

    #[test]
    fn elements_are_lazy_and_restartable() {
        let set: AvlSet<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        let mut elements = set.root().elements();
        assert_eq!(elements.next(), Some(&1));
        assert_eq!(elements.next(), Some(&3));

        // A fresh call starts over without being affected by the first.
        let all: Vec<_> = set.root().elements().copied().collect();
        assert_eq!(all, vec![1, 3, 4, 5, 7, 8, 9]);

        let rest: Vec<_> = elements.copied().collect();
        assert_eq!(rest, vec![4, 5, 7, 8, 9]);
    }

    #[test]
    fn iter_knows_its_length() {
        let set: AvlSet<_> = (0..10).collect();
        let mut iter = set.iter();

        assert_eq!(iter.len(), 10);
        iter.next();
        assert_eq!(iter.len(), 9);
        assert_eq!(iter.count(), 9);
    }

    #[test]
    fn iter_is_fused() {
        let set: AvlSet<_> = [1].into_iter().collect();
        let mut iter = set.iter();

        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_iter_yields_owned_elements_in_order() {
        let set: AvlSet<_> = ["pear", "apple", "fig"]
            .into_iter()
            .map(String::from)
            .collect();
        let mut iter = set.into_iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().as_deref(), Some("apple"));
        assert_eq!(iter.collect::<Vec<_>>(), vec!["fig", "pear"]);
    }

    #[test]
    fn empty_sequences() {
        let set: AvlSet<i32> = AvlSet::new();

        assert_eq!(set.root().elements().next(), None);
        assert_eq!(set.iter().len(), 0);
        assert_eq!(set.into_iter().next(), None);
    }
}
