//! An in-memory ordered set built on a probabilistic [`skip list`].
//!
//! ```
//! use skipset::SkipList;
//!
//! let mut list = SkipList::with_seed(7);
//! for value in [5, 1, 9, 3] {
//!     list.add(value);
//! }
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 9]);
//!
//! assert!(list.remove(&3));
//! assert!(!list.contains(&3));
//! assert_eq!(list.len(), 3);
//! ```
//!
//! [`skip list`]: https://en.wikipedia.org/wiki/Skip_list

/// Construction options for a [`SkipList`].
pub mod config;
pub mod errs;
/// The skip list itself, plus the pieces it is generic over.
pub mod skiplist;

mod stats;

pub use crate::{
    config::{
        Config,
        TrimPolicy,
    },
    errs::Error,
    skiplist::{
        Comparator,
        GeometricalLevelGenerator,
        LevelGenerator,
        NaturalOrder,
        SkipList,
    },
};
