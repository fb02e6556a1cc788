use std::io;

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Why an input array can't be benchmarked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("array is empty")]
    Empty,

    #[error("{algorithm} can't sort negative value {value}")]
    Negative { algorithm: Algorithm, value: i32 },

    #[error("`{token}` is not an integer")]
    Token { token: String },

    #[error("line is not valid UTF-8 (bad byte at offset {offset})")]
    Encoding { offset: usize },
}

#[derive(Error, Debug)]
pub enum BenchError {
    /// `position` is the 1-based line of the array in the source.
    #[error("array #{position}: {reason}")]
    InvalidInput { position: usize, reason: InvalidInput },

    #[error("no arrays were processed")]
    EmptyRun,

    #[error("can't read arrays: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
