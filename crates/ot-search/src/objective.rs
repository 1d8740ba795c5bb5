//! External collaborator contracts: the evaluation oracle and the scoring
//! objectives.

use ot_types::{HyperParams, Metrics};

/// The external model-evaluation oracle.
///
/// Maps a candidate point to quality metrics. Assumed total (never fails) and
/// free of side effects observable to the search logic; it may be
/// non-deterministic, which is why it takes `&mut self`.
pub trait Oracle {
    fn evaluate(&mut self, params: &HyperParams) -> Metrics;
}

/// Algorithm-specific reduction of metrics to one comparable score.
///
/// Higher is always better. Scores produced by different objectives are not
/// comparable with each other; each engine is handed exactly one objective
/// for the whole run.
pub trait Objective {
    fn score(&self, metrics: &Metrics) -> f64;

    /// Human-readable objective name.
    fn name(&self) -> &str;
}

impl<F> Oracle for F
where
    F: FnMut(&HyperParams) -> Metrics,
{
    fn evaluate(&mut self, params: &HyperParams) -> Metrics {
        self(params)
    }
}
