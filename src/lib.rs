// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A K.I.S.S. skip list, the sorted in-memory index of an LSM-tree memtable.
//!
//! ##### About
//!
//! This crate exports a [`SkipList`] that maps unique string keys to opaque
//! byte values, kept in ascending key order.
//!
//! A skip list is a stack of sorted linked lists ("levels"). Level 0 links every
//! key; each higher level links a random subset of the level below it, so a search
//! can skip over many keys at once by starting at the top and descending.
//! Node heights are drawn at insertion time from a geometric distribution, which
//! gives expected _O(log n)_ search, insert and delete without any rebalancing.
//!
//! Unlike a concurrent memtable skiplist, this one supports in-place updates and
//! physical deletes, but is strictly single-threaded: wrap it in a lock to share it.
//!
//! ##### Example
//!
//! ```
//! use lsm_skiplist::Config;
//!
//! let mut list = Config::new(16).seed(7).build()?;
//!
//! list.put("b", "2");
//! list.put("a", "1");
//! list.put("c", "3");
//! assert_eq!(3, list.len());
//!
//! list.remove("b");
//! assert!(!list.contains_key("b"));
//! assert_eq!(2, list.len());
//! #
//! # Ok::<(), lsm_skiplist::Error>(())
//! ```

#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]
#![warn(clippy::redundant_feature_names)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

/// Configuration
pub mod config;

mod error;
mod skiplist;
mod slice;

/// User defined key
pub type UserKey = String;

/// User defined data (byte array)
pub type UserValue = Slice;

pub use {
    config::Config,
    error::{Error, Result},
    skiplist::{SkipList, P_VALUE},
    slice::Slice,
};
