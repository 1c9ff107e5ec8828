//! A flat, sorted map for Rust.
//!
//! This crate provides [`IndexMap`], an ordered map that keeps its keys in one
//! ascending `Vec` and its values in a second, parallel `Vec`. Lookups are a
//! binary search; inserts and removes shift the tail of both vectors. The
//! trade is slower mutation for compact memory, cheap ordered iteration and
//! range queries that cost two binary searches:
//!
//! - [`get_range`](IndexMap::get_range) - Copy out every entry with `min <= key <= max`
//! - [`range_slices`](IndexMap::range_slices) - Borrow the same span as two slices
//! - [`position`](IndexMap::position) - The index of a key, or where it would go
//! - [`cursor_mut`](IndexMap::cursor_mut) - Walk the map while inserting or removing entries
//!
//! # Example
//!
//! ```
//! use flat_index_map::IndexMap;
//!
//! let mut map = IndexMap::from_pairs([(5, "e"), (1, "a"), (3, "c")]);
//!
//! let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
//! assert_eq!(entries, [(1, "a"), (3, "c"), (5, "e")]);
//!
//! // Both bounds are inclusive.
//! let (keys, values) = map.get_range(&2, &5);
//! assert_eq!(keys, [3, 5]);
//! assert_eq!(values, ["c", "e"]);
//!
//! assert_eq!(map.remove(&3), Some("c"));
//! assert_eq!(map.get(&3), None);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Trusted bulk construction** - [`IndexMap::from_sorted_keys`] and friends adopt
//!   pre-sorted input in O(n), checked only in debug builds
//! - **`serde`** (optional) - Serializes as a `(keys, values)` tuple and validates on the way back in
//!
//! # Concurrency
//!
//! The map has no internal locking. Share it across threads behind a lock that
//! covers every call.

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
mod raw;

pub mod index_map;

pub use error::PartsError;
pub use index_map::{CursorMut, IndexMap};
