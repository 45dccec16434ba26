//! Search space parameterization.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::transform::{MAX_WIDTH, key_mask};

/// Parameters of one search run: window width, offset stride, key space.
///
/// The sliding 2-byte window and the 3-byte chunk pipeline are the same
/// search with different plans, so both are presets here instead of
/// separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchPlan {
    /// Window width in bytes.
    pub width: usize,
    /// Step between consecutive window offsets.
    pub stride: usize,
    /// Number of keys tried per window, starting at 0.
    pub key_space: u64,
}

impl SearchPlan {
    /// Overlapping windows (stride 1) over the full key space.
    pub fn sliding(width: usize) -> Result<Self> {
        Self::new(width, 1, key_mask(width) + 1)
    }

    /// Non-overlapping windows (stride = width) over the full key space.
    pub fn chunked(width: usize) -> Result<Self> {
        Self::new(width, width, key_mask(width) + 1)
    }

    /// Full key space with an explicit stride.
    pub fn with_stride(width: usize, stride: usize) -> Result<Self> {
        Self::new(width, stride, key_mask(width) + 1)
    }

    pub fn new(width: usize, stride: usize, key_space: u64) -> Result<Self> {
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::InvalidPlan(format!(
                "window width {width} not in 1..={MAX_WIDTH}"
            )));
        }
        if stride == 0 {
            return Err(Error::InvalidPlan("stride must be at least 1".to_string()));
        }
        let full = key_mask(width) + 1;
        if key_space == 0 || key_space > full {
            return Err(Error::InvalidPlan(format!(
                "key space {key_space} not in 1..={full} for width {width}"
            )));
        }
        Ok(Self {
            width,
            stride,
            key_space,
        })
    }

    /// Cap the key space at `limit` keys per window.
    pub fn limit_keys(self, limit: u64) -> Result<Self> {
        Self::new(self.width, self.stride, limit.min(self.key_space))
    }

    /// Window offsets evaluated against a buffer of `len` bytes.
    ///
    /// Empty when the buffer is shorter than the window.
    pub fn offsets(&self, len: usize) -> impl Iterator<Item = usize> {
        let stride = self.stride;
        len.checked_sub(self.width)
            .map(move |last| (0..=last).step_by(stride))
            .into_iter()
            .flatten()
    }

    /// Number of window offsets for a buffer of `len` bytes.
    pub fn offset_count(&self, len: usize) -> usize {
        match len.checked_sub(self.width) {
            Some(last) => last / self.stride + 1,
            None => 0,
        }
    }

    /// Total (offset, key) pairs evaluated for a buffer of `len` bytes.
    pub fn pair_count(&self, len: usize) -> u64 {
        self.offset_count(len) as u64 * self.key_space
    }
}
