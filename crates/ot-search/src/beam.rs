//! Beam search.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ot_types::{Bounds, HyperParams, Metrics};

use crate::neighbor::{generate_neighbors, DEFAULT_STEP_SCALE};
use crate::objective::{Objective, Oracle};
use crate::observer::{SearchObserver, StepRecord};
use crate::result::SearchReport;

/// Configuration for a beam search run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Maximum number of points carried between levels.
    pub beam_width: usize,
    /// Number of expansion levels.
    pub depth: usize,
    /// Neighbors generated per beam member per level.
    pub neighbors_per_state: usize,
    /// Perturbation scale for neighbor sampling.
    pub step_scale: f64,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            beam_width: 3,
            depth: 10,
            neighbors_per_state: 5,
            step_scale: DEFAULT_STEP_SCALE,
        }
    }
}

impl BeamConfig {
    pub fn with_beam_width(mut self, n: usize) -> Self {
        self.beam_width = n;
        self
    }

    pub fn with_depth(mut self, n: usize) -> Self {
        self.depth = n;
        self
    }

    pub fn with_neighbors_per_state(mut self, n: usize) -> Self {
        self.neighbors_per_state = n;
        self
    }

    pub fn with_step_scale(mut self, scale: f64) -> Self {
        self.step_scale = scale;
        self
    }
}

/// Beam search engine.
///
/// Carries a bounded working set of points between levels. Each level pools
/// the neighbors of every beam member, keeps the top `beam_width` by score
/// (stable sort, ties keep generation order), and tracks a global best
/// independently of beam membership — in later levels the best-ever point is
/// not necessarily still in the beam. Returns the global best.
#[derive(Debug, Clone, Copy)]
pub struct BeamSearch {
    config: BeamConfig,
}

impl BeamSearch {
    pub fn new(config: BeamConfig) -> Self {
        Self { config }
    }

    pub fn run<R, K, J, O>(
        &self,
        start: HyperParams,
        bounds: &Bounds,
        rng: &mut R,
        oracle: &mut K,
        objective: &J,
        observer: &mut O,
    ) -> SearchReport
    where
        R: Rng,
        K: Oracle,
        J: Objective,
        O: SearchObserver,
    {
        let mut beam = vec![start];

        let mut best = start;
        let mut best_metrics = oracle.evaluate(&start);
        let mut best_score = objective.score(&best_metrics);

        observer.on_step(&StepRecord::new(0, best_score, &best_metrics));

        let mut levels = 0;
        for level in 1..=self.config.depth {
            let mut candidates: Vec<(f64, HyperParams, Metrics)> = Vec::new();
            for state in &beam {
                let neighbors = generate_neighbors(
                    state,
                    self.config.neighbors_per_state,
                    rng,
                    bounds,
                    self.config.step_scale,
                );
                for neighbor in neighbors {
                    let metrics = oracle.evaluate(&neighbor);
                    let score = objective.score(&metrics);
                    candidates.push((score, neighbor, metrics));
                }
            }

            if candidates.is_empty() {
                info!(level, "beam search stopped: empty candidate pool");
                break;
            }
            levels = level;

            // Stable sort keeps generation order among equal scores.
            candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

            beam.clear();
            for &(score, point, metrics) in candidates.iter().take(self.config.beam_width) {
                beam.push(point);
                if score > best_score {
                    best_score = score;
                    best = point;
                    best_metrics = metrics;
                }
            }

            debug!(level, best_score, beam_len = beam.len(), "beam level complete");
            observer.on_step(&StepRecord::new(level, best_score, &best_metrics));
        }

        SearchReport::new(best, best_metrics, best_score, levels)
    }
}
