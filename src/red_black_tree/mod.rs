//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! `RedBlackTree` is the balancing engine. `RedBlackSet`, `RedBlackMap`, `RedBlackMultiset`, and
//! `RedBlackMultimap` each own an engine and decide how an already present key is treated.

mod map;
mod multimap;
mod multiset;
mod node;
mod set;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter};
pub use self::multimap::{RedBlackMultimap, RedBlackMultimapIter};
pub use self::multiset::{RedBlackMultiset, RedBlackMultisetCounts, RedBlackMultisetIter};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
pub use self::tree::{
    Duplicates, Insertion, NodeHandle, RedBlackTree, RedBlackTreeIntoIter, RedBlackTreeIter,
    DEFAULT_INDENT,
};
