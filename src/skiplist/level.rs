// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use rand::Rng;

/// Probability that a node present at some level also occupies the next one.
pub const P_VALUE: f64 = 0.25;

/// Draws the number of levels for a new node.
///
/// The result is geometrically distributed in `1..=max_level`:
/// a node reaches level `L` with probability of about `P_VALUE^(L-1)`.
pub fn random_level<R: Rng>(rng: &mut R, max_level: usize) -> usize {
    let mut level = 1;
    while level < max_level && rng.random::<f64>() < P_VALUE {
        level += 1;
    }
    level
}
