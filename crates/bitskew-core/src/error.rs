use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output path exists and is not a directory: {}", .0.display())]
    OutputPathConflict(PathBuf),

    #[error("Malformed artifact name '{name}': {reason}")]
    MalformedName { name: String, reason: String },

    #[error("Invalid offset: window {offset}+{width} exceeds buffer of {len} bytes")]
    InvalidOffset {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("Key {key} does not fit a {width}-byte window")]
    KeyOutOfRange { key: u64, width: usize },

    #[error("Invalid search plan: {0}")]
    InvalidPlan(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
