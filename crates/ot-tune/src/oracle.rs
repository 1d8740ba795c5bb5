//! Synthetic evaluation oracle.
//!
//! Deterministic stand-in for a real model-training run, shaped so the three
//! search algorithms have something worth finding: accuracy peaks at a
//! preferred depth and learning rate, f1 follows accuracy with a
//! regularization-dependent discount, and latency grows with depth.

use ot_search::Oracle;
use ot_types::{HyperParams, Metrics};

/// Depth at which the synthetic model performs best.
const PREFERRED_DEPTH: i32 = 7;
/// Learning rate at which the synthetic model performs best.
const PREFERRED_LR: f64 = 0.01;
/// Regularization strength with the best generalization trade-off.
const PREFERRED_REG: f64 = 0.3;
/// Fixed latency overhead in milliseconds.
const BASE_LATENCY_MS: f64 = 20.0;
/// Additional latency per depth level in milliseconds.
const LATENCY_PER_LEVEL_MS: f64 = 15.0;

/// Deterministic synthetic oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticOracle;

impl SyntheticOracle {
    pub fn new() -> Self {
        Self
    }
}

impl Oracle for SyntheticOracle {
    fn evaluate(&mut self, params: &HyperParams) -> Metrics {
        let depth_term = {
            let d = (params.depth - PREFERRED_DEPTH) as f64;
            (-d * d / 8.0).exp()
        };
        // Learning rate acts on a log scale.
        let lr_term = {
            let d = (params.lr / PREFERRED_LR).ln();
            (-d * d / 2.0).exp()
        };
        let reg_fit = 1.0 - (params.reg - PREFERRED_REG).abs();

        let accuracy = (0.55 + 0.30 * depth_term + 0.10 * lr_term + 0.05 * reg_fit).clamp(0.0, 1.0);
        let f1 = (accuracy * (0.90 + 0.08 * reg_fit)).clamp(0.0, 1.0);
        let latency = BASE_LATENCY_MS + LATENCY_PER_LEVEL_MS * params.depth as f64;

        Metrics::new(accuracy, f1, latency)
    }
}
