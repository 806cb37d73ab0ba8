// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! A skiplist implementation which gives sorted-set semantics with expected
//! `O(log n)` search, insertion and removal, without ever rotating or
//! rebalancing anything.
//!
//! SkipLists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level `n > 0` will contain a random subset of the nodes on level `n - 1`.
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! A geometric distribution is used whereby the chance that a node occupies
//! level `n` is `p` times the chance of occupying level `n-1`, with `p = 0.5`.
//! A new node can be at most one level taller than the current head, so the
//! list grows by at most one level per insertion.
//!
//! Every operation starts with the same top-down descent from the head which
//! records, per level, the rightmost node that sorts strictly before the
//! target. That "update table" is exactly the set of links that have to be
//! rewritten to splice a node in or out.
//!
//! Nodes live in an index arena owned by the list, so a link is just a slot
//! index and there is a single owner for every value. The list is not
//! synchronized: wrap it in a lock if you need to share it between threads.

use std::{
    cmp::Ordering,
    fmt::{
        self,
        Debug,
        Display,
        Formatter,
    },
};

use tracing::{
    debug,
    instrument,
    trace,
};

use crate::{
    config::{
        Config,
        TrimPolicy,
        DEFAULT_PROBABILITY,
        INITIAL_HEIGHT,
    },
    errs::{
        Error,
        Result,
    },
    skiplist::node::{
        Arena,
        Head,
        Link,
        Node,
        Position,
    },
    stats::Stats,
};

mod comparator;
mod iter;
mod level_generator;
mod node;

pub use comparator::{
    Comparator,
    NaturalOrder,
};
pub use iter::{
    IntoIter,
    Iter,
};
pub use level_generator::{
    GeometricalLevelGenerator,
    LevelGenerator,
};

/// An ordered set backed by a probabilistic skip list. Duplicates, as decided
/// by the comparator `C`, are never stored.
pub struct SkipList<T, C = NaturalOrder, G = GeometricalLevelGenerator> {
    head: Head,
    arena: Arena<T>,
    len: usize,
    comparator: C,
    generator: G,
    config: Config,
    stats: Stats,
}

impl<T: Ord> SkipList<T> {
    /// An empty list in the natural order of `T`, with heights drawn from OS
    /// entropy.
    pub fn new() -> Self {
        Self::with_config(Config::default(), NaturalOrder)
    }

    /// An empty list whose shape is fully determined by `seed` and the order of
    /// insertions.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(Config::new().with_seed(seed), NaturalOrder)
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> SkipList<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_config(Config::default(), comparator)
    }

    pub fn with_config(config: Config, comparator: C) -> Self {
        let generator = GeometricalLevelGenerator::new(DEFAULT_PROBABILITY, config.seed());
        Self::with_generator(config, comparator, generator)
    }
}

impl<T, C, G> SkipList<T, C, G> {
    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the head sentinel, i.e. the number of levels currently in
    /// use.
    pub fn height(&self) -> usize {
        self.head.height()
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Ascending iterator over the elements. Every call starts a fresh walk
    /// from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head.forward(0), self.len)
    }

    /// Number of comparator invocations since construction or the last
    /// [`reset_comparisons`](Self::reset_comparisons).
    pub fn comparisons(&self) -> u64 {
        self.stats.comparisons()
    }

    pub fn reset_comparisons(&self) {
        self.stats.reset();
    }

    /// Renders every node with its height and the targets of its forward links,
    /// topmost level first. Handy when eyeballing the shape of a small list.
    pub fn structure(&self) -> Structure<'_, T> {
        Structure {
            arena: &self.arena,
            first: self.head.forward(0),
        }
    }

    /// Drops every element and resets the head to a single empty level.
    #[instrument(level = "trace", skip_all)]
    pub fn clear(&mut self) {
        debug!(len = self.len, height = self.head.height(), "clearing skiplist");
        self.head = Head::new();
        self.arena.clear();
        self.len = 0;
    }

    fn forward(&self, position: Position, level: usize) -> Link {
        match position {
            | Position::Head => self.head.forward(level),
            | Position::Node(id) => self.arena.get(id).forward(level),
        }
    }

    fn set_forward(&mut self, position: Position, level: usize, link: Link) {
        match position {
            | Position::Head => self.head.set_forward(level, link),
            | Position::Node(id) => self.arena.get_mut(id).set_forward(level, link),
        }
    }

    fn trim(&mut self) {
        match self.config.trim_policy() {
            | TrimPolicy::Single => {
                if self.head.height() > INITIAL_HEIGHT && self.head.top().is_none() {
                    self.head.decrement_height();
                    trace!(height = self.head.height(), "trimmed head");
                }
            },
            | TrimPolicy::Exhaustive => {
                while self.head.height() > INITIAL_HEIGHT && self.head.top().is_none() {
                    self.head.decrement_height();
                    trace!(height = self.head.height(), "trimmed head");
                }
            },
        }
    }
}

impl<T, C, G> SkipList<T, C, G>
where
    C: Comparator<T>,
    G: LevelGenerator,
{
    /// An empty list that takes node heights from `generator`. The seed in
    /// `config` is not used, since the generator brings its own randomness.
    pub fn with_generator(config: Config, comparator: C, generator: G) -> Self {
        SkipList {
            head: Head::new(),
            arena: Arena::new(),
            len: 0,
            comparator,
            generator,
            config,
            stats: Stats::default(),
        }
    }

    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.stats.record_comparison();
        self.comparator.compare(left, right)
    }

    /// Descends from the top of the head and returns, for every level, the
    /// rightmost position whose value sorts strictly before `value`.
    fn build_update_table(&self, value: &T) -> Vec<Position> {
        let height = self.head.height();
        let mut updates = vec![Position::Head; height];
        let mut current = Position::Head;

        for level in (0..height).rev() {
            while let Some(next) = self.forward(current, level) {
                if self.compare(self.arena.get(next).value(), value) != Ordering::Less {
                    break;
                }
                current = Position::Node(next);
            }
            updates[level] = current;
        }

        updates
    }

    /// The node right after `predecessor` on level 0, if it holds `value`.
    fn matching_successor(&self, predecessor: Position, value: &T) -> Option<usize> {
        let next = self.forward(predecessor, 0)?;
        (self.compare(self.arena.get(next).value(), value) == Ordering::Equal).then_some(next)
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut current = Position::Head;

        for level in (0..self.head.height()).rev() {
            while let Some(next) = self.forward(current, level) {
                match self.compare(self.arena.get(next).value(), value) {
                    | Ordering::Equal => return true,
                    | Ordering::Less => current = Position::Node(next),
                    | Ordering::Greater => break,
                }
            }
        }

        false
    }

    /// Adds `value` to the list. Adding a value that is already present leaves
    /// the list untouched.
    pub fn add(&mut self, value: T) {
        self.insert(value);
    }

    /// Adds `value` to the list, returning `false` if an equal value was
    /// already present.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> bool {
        let mut updates = self.build_update_table(&value);
        if self.matching_successor(updates[0], &value).is_some() {
            trace!("rejected duplicate value");
            return false;
        }

        let max_level = self.head.height() + 1;
        let height = self.generator.random(max_level).clamp(1, max_level);
        if height > self.head.height() {
            self.head.increment_height();
            updates.push(Position::Head);
            trace!(height = self.head.height(), "grew head");
        }

        let id = self.arena.alloc(Node::new(value, height));
        for (level, &predecessor) in updates.iter().enumerate().take(height) {
            let next = self.forward(predecessor, level);
            self.arena.get_mut(id).set_forward(level, next);
            self.set_forward(predecessor, level, Some(id));
        }

        self.len += 1;
        true
    }

    /// Removes `value` from the list, returning whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes `value` from the list and hands back the stored element.
    #[instrument(level = "trace", skip_all)]
    pub fn take(&mut self, value: &T) -> Option<T> {
        let updates = self.build_update_table(value);
        let target = self.matching_successor(updates[0], value)?;

        for (level, &predecessor) in updates.iter().enumerate() {
            // a node missing on this level can't be on any level above it
            if self.forward(predecessor, level) != Some(target) {
                break;
            }
            let next = self.arena.get(target).forward(level);
            self.set_forward(predecessor, level, next);
        }

        self.len -= 1;
        self.trim();

        Some(self.arena.release(target).into_value())
    }

    /// Clones every element, in ascending order, into `buffer` starting at
    /// `index`. On error neither the list nor the buffer is modified.
    pub fn copy_to(&self, buffer: &mut [T], index: usize) -> Result<()>
    where
        T: Clone,
    {
        let len = buffer.len();
        if index > len || (index == len && !self.is_empty()) {
            debug!(index, len, "copy index out of bounds");
            return Err(Error::IndexOutOfBounds { index, len });
        }

        let available = len - index;
        if available < self.len {
            debug!(required = self.len, available, "copy buffer too small");
            return Err(Error::InsufficientSpace {
                required: self.len,
                available,
            });
        }

        for (slot, value) in buffer[index..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }

        Ok(())
    }

    /// [`copy_to`](Self::copy_to) starting at the front of `buffer`.
    pub fn copy_into(&self, buffer: &mut [T]) -> Result<()>
    where
        T: Clone,
    {
        self.copy_to(buffer, 0)
    }
}

impl<T, C, G> Extend<T> for SkipList<T, C, G>
where
    C: Comparator<T>,
    G: LevelGenerator,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T, C, G> IntoIterator for &'a SkipList<T, C, G> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C, G> IntoIterator for SkipList<T, C, G> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        let first = self.head.forward(0);
        IntoIter::new(self.arena, first, self.len)
    }
}

impl<T: Debug, C, G> Debug for SkipList<T, C, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// See [`SkipList::structure`].
pub struct Structure<'a, T> {
    arena: &'a Arena<T>,
    first: Link,
}

impl<T: Display> Display for Structure<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut next = self.first;
        while let Some(id) = next {
            let node = self.arena.get(id);
            write!(f, "{} [ H={}", node.value(), node.height())?;
            for level in (0..node.height()).rev() {
                match node.forward(level) {
                    | Some(target) => write!(f, " | {}", self.arena.get(target).value())?,
                    | None => f.write_str(" | NULL")?,
                }
            }
            f.write_str(" ] ; ")?;
            next = node.forward(0);
        }
        Ok(())
    }
}
