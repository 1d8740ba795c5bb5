//! Search run outcome.

use serde::Serialize;

use ot_types::{HyperParams, Metrics};

/// Final outcome of one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchReport {
    /// Best point found by the run.
    pub best: HyperParams,
    /// Metrics the oracle reported for `best` when it was evaluated.
    pub best_metrics: Metrics,
    /// Score of `best` under the engine's objective.
    pub best_score: f64,
    /// Number of iterations (hill climbing), levels (beam search), or steps
    /// (annealing) actually executed.
    pub iterations: usize,
}

impl SearchReport {
    pub fn new(best: HyperParams, best_metrics: Metrics, best_score: f64, iterations: usize) -> Self {
        Self {
            best,
            best_metrics,
            best_score,
            iterations,
        }
    }
}
