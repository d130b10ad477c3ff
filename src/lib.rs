//! Ordered collections built on an arena-backed red black tree.
//!
//! The tree engine lives in [`red_black_tree::RedBlackTree`]. The set, multiset, map, and multimap
//! types wrap an engine instance and decide what happens when an inserted key is already present.

mod entry;
mod error;
pub mod arena;
pub mod red_black_tree;

pub use self::entry::Entry;
pub use self::error::{Error, Result};
