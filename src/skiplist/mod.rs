// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A single-threaded skip list intended for use as a memtable index.
//!
//! Nodes live in an arena and link to each other through stable handles,
//! so the structure needs no unsafe code and no reference counting.
//!
//! ```text
//! L2: head ──────────────► c ─────────────────────► NIL
//! L1: head ──────► b ────► c ──────────► e ───────► NIL
//! L0: head ─► a ─► b ────► c ─► d ─────► e ─► f ──► NIL
//! ```
//!
//! Unlike the crossbeam-based memtable of `lsm-tree`, it supports
//! in-place updates and physical deletes, but no concurrent access:
//! callers that share a list must wrap it in a lock.

mod arena;
mod level;


pub use level::P_VALUE;

use crate::{Config, Error, UserKey, UserValue};
use arena::{empty_tower, Arena, Node, NodeId, Tower};
use rand::{rngs::StdRng, Rng};

/// Position of a traversal cursor; `None` is the head sentinel
type Position = Option<NodeId>;

/// An ordered map from string keys to byte values
///
/// Keys are kept in ascending order across up to `max_level` linked levels.
/// Each new node draws its level count from a geometric distribution
/// (see [`P_VALUE`]), which gives expected _O(log n)_ search, insert and
/// delete without any rebalancing.
///
/// The level generator is held by the list, so a seeded generator yields
/// a fully reproducible structure.
///
/// # Examples
///
/// ```
/// use lsm_skiplist::SkipList;
///
/// let mut list = SkipList::new(16)?;
///
/// list.put("b", "2");
/// list.put("a", "1");
/// list.put("a", "one");
/// assert_eq!(2, list.len());
/// assert_eq!(Some(b"one".as_slice()), list.get("a").map(|v| &**v));
///
/// list.remove("b");
/// list.remove("b");
/// assert_eq!(1, list.len());
/// #
/// # Ok::<(), lsm_skiplist::Error>(())
/// ```
pub struct SkipList<R = StdRng> {
    arena: Arena,

    // Head sentinel, holds `max_level` forward links and no key
    head: Tower,

    rng: R,
    len: usize,
    max_level: usize,

    // Number of levels in use
    height: usize,
}

impl SkipList<StdRng> {
    /// Creates an empty skip list using an OS-seeded level generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxLevel`] if `max_level` is zero.
    pub fn new(max_level: usize) -> crate::Result<Self> {
        Config::new(max_level).build()
    }
}

impl Default for SkipList<StdRng> {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Config::default()
            .build()
            .expect("default max level should be positive")
    }
}

impl<R: Rng> SkipList<R> {
    /// Creates an empty skip list drawing node levels from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxLevel`] if `max_level` is zero.
    pub fn with_rng(max_level: usize, rng: R) -> crate::Result<Self> {
        if max_level == 0 {
            return Err(Error::InvalidMaxLevel(max_level));
        }

        Ok(Self {
            arena: Arena::default(),
            head: empty_tower(max_level),
            rng,
            len: 0,
            max_level,
            height: 0,
        })
    }

    /// Inserts a key-value pair, or overwrites the value if the key exists.
    ///
    /// Overwriting never changes the structure of the list and does not
    /// consume randomness.
    #[allow(clippy::indexing_slicing)]
    pub fn put<K: Into<UserKey>, V: Into<UserValue>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();

        let mut passed = vec![None; self.height];
        let mut cursor: Position = None;
        let mut found = None;

        for level in (0..self.height).rev() {
            cursor = self.advance(cursor, level, &key);
            passed[level] = cursor;

            // NOTE: Stopping early leaves the lower predecessors unrecorded,
            // which is fine because a match never links a new node
            if let Some(next) = self.next(cursor, level) {
                if self.arena.get(next).key == key {
                    found = Some(next);
                    break;
                }
            }
        }

        if let Some(id) = found {
            log::trace!("put: overwriting value of {key:?}");
            self.arena.get_mut(id).value = value;
            return;
        }

        let node_height = level::random_level(&mut self.rng, self.max_level);
        let id = self.arena.alloc(Node::new(key, value, node_height));

        for (level, &prev) in passed.iter().enumerate().take(node_height) {
            let next = self.next(prev, level);
            self.arena.get_mut(id).tower[level] = next;
            self.set_next(prev, level, Some(id));
        }

        if node_height > self.height {
            // These levels were empty, so the head is the only predecessor
            for slot in &mut self.head[self.height..node_height] {
                *slot = Some(id);
            }

            log::trace!("put: height grew from {} to {node_height}", self.height);
            self.height = node_height;
        }

        self.len += 1;
    }

    /// Removes a key from the list.
    ///
    /// Removing a key that does not exist is a no-op.
    pub fn remove(&mut self, key: &str) {
        let passed = self.predecessors(key);

        let Some(target) = passed
            .first()
            .and_then(|&prev| self.next(prev, 0))
            .filter(|&id| self.arena.get(id).key == key)
        else {
            log::trace!("remove: {key:?} not found");
            return;
        };

        let Some(node) = self.arena.free(target) else {
            return;
        };

        for (level, (&prev, &next)) in passed.iter().zip(node.tower.iter()).enumerate() {
            self.set_next(prev, level, next);
        }

        let height_before = self.height;
        while self.height > 0 && self.head.get(self.height - 1).copied().flatten().is_none() {
            self.height -= 1;
        }
        if self.height < height_before {
            log::trace!("remove: height shrank from {height_before} to {}", self.height);
        }

        self.len -= 1;
    }
}

impl<R> SkipList<R> {
    /// Returns the value for a key, if it exists.
    ///
    /// Uses the same descent as [`SkipList::put`], returning as soon as the
    /// key shows up at any level.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&UserValue> {
        let mut cursor: Position = None;

        for level in (0..self.height).rev() {
            cursor = self.advance(cursor, level, key);

            if let Some(next) = self.next(cursor, level) {
                let node = self.arena.get(next);
                if node.key == key {
                    return Some(&node.value);
                }
            }
        }

        None
    }

    /// Returns `true` if the list contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The number of keys in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of levels currently in use.
    ///
    /// This is 0 for an empty list and never exceeds [`SkipList::max_level`].
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The maximum number of levels a node may occupy.
    #[must_use]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    fn tower(&self, at: Position) -> &[Option<NodeId>] {
        match at {
            None => &self.head,
            Some(id) => &self.arena.get(id).tower,
        }
    }

    fn next(&self, at: Position, level: usize) -> Option<NodeId> {
        self.tower(at).get(level).copied().flatten()
    }

    fn set_next(&mut self, at: Position, level: usize, next: Option<NodeId>) {
        let tower = match at {
            None => &mut self.head,
            Some(id) => &mut self.arena.get_mut(id).tower,
        };

        debug_assert!(level < tower.len(), "node should occupy level {level}");

        if let Some(slot) = tower.get_mut(level) {
            *slot = next;
        }
    }

    /// Moves right along `level` while the next key is strictly smaller.
    fn advance(&self, mut cursor: Position, level: usize, key: &str) -> Position {
        while let Some(next) = self.next(cursor, level) {
            if self.arena.get(next).key.as_str() >= key {
                break;
            }
            cursor = Some(next);
        }
        cursor
    }

    /// Records the last position before `key` on every level in use.
    ///
    /// Index `i` holds the predecessor at level `i`.
    #[allow(clippy::indexing_slicing)]
    fn predecessors(&self, key: &str) -> Vec<Position> {
        let mut passed = vec![None; self.height];
        let mut cursor: Position = None;

        for level in (0..self.height).rev() {
            cursor = self.advance(cursor, level, key);
            passed[level] = cursor;
        }

        passed
    }

    /// Walks level 0 in key order.
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&UserKey, &UserValue)> + '_ {
        self.chain(0).map(|id| {
            let node = self.arena.get(id);
            (&node.key, &node.value)
        })
    }

    /// Walks the chain of one level, yielding node handles in order.
    fn chain(&self, level: usize) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.next(None, level), move |&id| {
            self.next(Some(id), level)
        })
    }
}

impl<R> std::fmt::Debug for SkipList<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "SkipList {{ len: {}, height: {}, max_level: {} }}",
            self.len, self.height, self.max_level,
        )?;

        for level in (0..self.height).rev() {
            write!(f, "L{level}:")?;
            for id in self.chain(level) {
                write!(f, " {:?}", self.arena.get(id).key)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
