// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::SkipList;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Default maximum number of levels
///
/// With a branching probability of 1/4, 16 levels comfortably index
/// a few billion keys.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Skip list configuration builder
///
/// # Examples
///
/// ```
/// use lsm_skiplist::Config;
///
/// let mut list = Config::new(12).seed(42).build()?;
/// list.put("a", "abc");
/// assert!(list.contains_key("a"));
/// #
/// # Ok::<(), lsm_skiplist::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of levels a node may occupy
    #[doc(hidden)]
    pub max_level: usize,

    /// Seed of the level generator, OS entropy if not set
    #[doc(hidden)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            seed: None,
        }
    }
}

impl Config {
    /// Initializes a new config
    #[must_use]
    pub fn new(max_level: usize) -> Self {
        Self {
            max_level,
            ..Default::default()
        }
    }

    /// Sets the maximum number of levels.
    ///
    /// Must be at least 1. Each level beyond what the key count needs only
    /// costs one empty link in the head.
    ///
    /// Defaults to 16.
    #[must_use]
    pub fn max_level(mut self, n: usize) -> Self {
        self.max_level = n;
        self
    }

    /// Seeds the level generator, making the node layout reproducible.
    ///
    /// By default, the generator is seeded from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds an empty skip list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMaxLevel`] if the maximum level is zero.
    pub fn build(self) -> crate::Result<SkipList<StdRng>> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.build_with_rng(rng)
    }

    /// Builds an empty skip list that draws node levels from `rng`.
    ///
    /// The configured seed is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMaxLevel`] if the maximum level is zero.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> crate::Result<SkipList<R>> {
        log::debug!(
            "Creating skip list with max_level={}, seed={:?}",
            self.max_level,
            self.seed,
        );
        SkipList::with_rng(self.max_level, rng)
    }
}
