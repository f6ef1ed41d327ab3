// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur when building a skip list
#[derive(Debug)]
pub enum Error {
    /// The configured maximum level count is not positive
    ///
    /// A skip list needs at least one level (level 0) to hold any key.
    InvalidMaxLevel(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SkipListError: {self:?}")
    }
}

impl std::error::Error for Error {}

/// Skip list result
pub type Result<T> = std::result::Result<T, Error>;
