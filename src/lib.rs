//! Ordered collections for Rust backed by a left-leaning red-black tree.
//!
//! This crate provides [`LLRBTreeMap`] and [`LLRBTreeSet`], symbol tables with a
//! `BTreeMap`/`BTreeSet`-style API plus the classic order-statistic queries:
//!
//! - [`floor`](LLRBTreeMap::floor) / [`ceiling`](LLRBTreeMap::ceiling) - nearest key at or
//!   below / at or above a target
//! - [`rank`](LLRBTreeMap::rank) - how many keys are strictly smaller than a target
//! - [`select`](LLRBTreeMap::select) - the key at a given 1-indexed sorted position
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the first element
//! - [`traverse`](LLRBTreeMap::traverse) plus pre-, in- and post-order iterators
//! - [`validate`](LLRBTreeMap::validate) and the four invariant predicates
//!
//! # Example
//!
//! ```
//! use llrb_tree::LLRBTreeMap;
//!
//! let mut scores = LLRBTreeMap::new();
//! scores.insert(50, "Alice");
//! scores.insert(85, "Bob");
//! scores.insert(92, "Carol");
//!
//! assert_eq!(scores.get(&85), Some(&"Bob"));
//!
//! // Greatest score at or below 90 and smallest at or above 90.
//! assert_eq!(scores.floor(&90), Some((&85, &"Bob")));
//! assert_eq!(scores.ceiling(&90), Some((&92, &"Carol")));
//!
//! // Two scores are strictly below 90; the second-lowest is 85.
//! assert_eq!(scores.rank(&90), 2);
//! assert_eq!(scores.select(2), Some((&85, &"Bob")));
//!
//! assert!(scores.validate().is_ok());
//! ```
//!
//! # Implementation
//!
//! The tree encodes a 2-3 tree as a binary search tree with one color bit per node: a red
//! node is glued to its parent to form a 3-node, and red links always lean left. Insertion
//! and deletion recurse to the affected position and restore the encoding with rotations and
//! color flips on the way back up, keeping the height below `2 * log2(n + 1)`.
//!
//! Nodes live in an arena and refer to their children by handle; every node has exactly one
//! parent. Each node records the size of its subtree, which drives `rank` and `select`.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;
mod traversal;

pub mod llrb_map;
pub mod llrb_set;

pub use error::InvariantViolation;
pub use llrb_map::LLRBTreeMap;
pub use llrb_set::LLRBTreeSet;
pub use order_statistic::Rank;
pub use traversal::Traversal;
