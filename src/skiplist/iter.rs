use std::iter::FusedIterator;

use crate::skiplist::node::{
    Arena,
    Link,
};

/// Borrowing iterator over the values of a [`SkipList`] in ascending order.
///
/// Follows the level 0 links from the head, so it sees every element exactly
/// once. The list is borrowed for the lifetime of the iterator; what an
/// iterator observes if the list is structurally changed underneath it (which
/// safe code can't do) is unspecified.
///
/// [`SkipList`]: crate::skiplist::SkipList
#[derive(Debug)]
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    next: Link,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, first: Link, len: usize) -> Self {
        Iter {
            arena,
            next: first,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        self.next = node.forward(0);
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator, yields the values in ascending order and releases each
/// node as it goes.
#[derive(Debug)]
pub struct IntoIter<T> {
    arena: Arena<T>,
    next: Link,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(arena: Arena<T>, first: Link, len: usize) -> Self {
        IntoIter {
            arena,
            next: first,
            remaining: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.release(self.next?);
        self.next = node.forward(0);
        self.remaining -= 1;
        Some(node.into_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
