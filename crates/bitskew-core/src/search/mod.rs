//! Exhaustive (offset, key) variation search.

mod plan;

pub use plan::SearchPlan;

use serde::Serialize;
use tracing::debug;

use crate::cancel::StopSignal;
use crate::error::Result;
use crate::score::count_bits;
use crate::transform::{read_window, xor_window};

/// One strict score improvement discovered during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Improvement {
    pub offset: usize,
    pub key: u64,
    pub zeros: u64,
    pub ones: u64,
    pub score: u64,
}

/// Receives each improvement together with the transformed buffer.
///
/// Implementations persist the candidate as soon as it arrives; the engine
/// never buffers improvements.
pub trait VariantSink {
    fn persist(&mut self, improvement: &Improvement, data: &[u8]) -> Result<()>;
}

/// Outcome of a completed (or interrupted) search run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    /// (offset, key) pairs evaluated.
    pub evaluated: u64,
    /// Strict improvements emitted.
    pub improvements: u64,
    /// Last (highest-scoring) improvement, if any.
    pub best: Option<Improvement>,
    /// Whether the run was stopped before exhausting the space.
    pub interrupted: bool,
}

/// Exhaustive search over every (offset, key) pair of a plan.
///
/// Offsets ascend, keys ascend within each offset, and an improvement is
/// emitted only on a strict score increase over the best seen so far, so
/// emitted scores are strictly increasing across a run.
pub struct VariationSearch<'a> {
    data: &'a [u8],
    plan: SearchPlan,
    best_score: i64,
}

impl<'a> VariationSearch<'a> {
    pub fn new(data: &'a [u8], plan: SearchPlan) -> Self {
        Self {
            data,
            plan,
            // below any real score, so the first candidate always wins
            best_score: -1,
        }
    }

    /// Run the search, pushing each strict improvement into `sink` the
    /// moment it is found.
    ///
    /// A candidate differs from the original only inside one window, so
    /// its one-bit total is the base total adjusted by the window's
    /// popcount delta; the full candidate buffer is materialized only when
    /// an improvement is persisted. The stop signal is checked between
    /// offset rows.
    pub fn run<S: VariantSink>(
        &mut self,
        sink: &mut S,
        stop: &StopSignal,
    ) -> Result<SearchSummary> {
        let plan = self.plan;
        let total_bits = self.data.len() as u64 * 8;
        let base = count_bits(self.data);

        debug!(
            "Starting search: {} bytes, width {}, stride {}, {} keys per window",
            self.data.len(),
            plan.width,
            plan.stride,
            plan.key_space
        );

        let mut evaluated = 0u64;
        let mut improvements = 0u64;
        let mut best: Option<Improvement> = None;
        let mut interrupted = false;

        for offset in plan.offsets(self.data.len()) {
            if stop.is_stopped() {
                interrupted = true;
                break;
            }

            let window = read_window(self.data, offset, plan.width)?;
            let window_ones = u64::from(window.count_ones());

            for key in 0..plan.key_space {
                evaluated += 1;

                let ones = base.ones - window_ones + u64::from((window ^ key).count_ones());
                let zeros = total_bits - ones;
                let score = zeros.abs_diff(ones);

                if score as i64 > self.best_score {
                    self.best_score = score as i64;
                    let improvement = Improvement {
                        offset,
                        key,
                        zeros,
                        ones,
                        score,
                    };
                    let candidate = xor_window(self.data, offset, plan.width, key)?;
                    sink.persist(&improvement, &candidate)?;
                    improvements += 1;
                    best = Some(improvement);
                    debug!(
                        "New best at pos {}, key {}: 0s={}, 1s={}, score={}",
                        offset, key, zeros, ones, score
                    );
                }
            }
        }

        if interrupted {
            debug!("Search interrupted after {} candidates", evaluated);
        } else {
            debug!(
                "Search space exhausted: {} candidates, {} improvements",
                evaluated, improvements
            );
        }

        Ok(SearchSummary {
            evaluated,
            improvements,
            best,
            interrupted,
        })
    }
}
