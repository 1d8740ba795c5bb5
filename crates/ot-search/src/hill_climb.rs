//! Greedy hill climbing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ot_types::{Bounds, HyperParams};

use crate::neighbor::{generate_neighbors, DEFAULT_STEP_SCALE};
use crate::objective::{Objective, Oracle};
use crate::observer::{SearchObserver, StepRecord};
use crate::result::SearchReport;

/// Configuration for a hill climbing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HillClimbConfig {
    /// Hard cap on iterations.
    pub max_iterations: usize,
    /// Neighbors sampled around the current point each iteration.
    pub neighbors_per_step: usize,
    /// Perturbation scale for neighbor sampling.
    pub step_scale: f64,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            neighbors_per_step: 10,
            step_scale: DEFAULT_STEP_SCALE,
        }
    }
}

impl HillClimbConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_neighbors_per_step(mut self, n: usize) -> Self {
        self.neighbors_per_step = n;
        self
    }

    pub fn with_step_scale(mut self, scale: f64) -> Self {
        self.step_scale = scale;
        self
    }
}

/// Greedy hill climbing engine.
///
/// Keeps a single current point and moves to the strictly best sampled
/// neighbor each iteration. Stops at the first iteration where no sampled
/// neighbor improves on the current score — a *sampled* local maximum, since
/// discarded neighbors are never revisited. The acceptance rule itself is
/// deterministic; all randomness lives in neighbor sampling.
#[derive(Debug, Clone, Copy)]
pub struct HillClimb {
    config: HillClimbConfig,
}

impl HillClimb {
    pub fn new(config: HillClimbConfig) -> Self {
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
        let mut current = start;
        let mut current_metrics = oracle.evaluate(&current);
        let mut current_score = objective.score(&current_metrics);

        observer.on_step(&StepRecord::new(0, current_score, &current_metrics));

        let mut iterations = 0;
        for iter in 1..=self.config.max_iterations {
            iterations = iter;

            let neighbors = generate_neighbors(
                &current,
                self.config.neighbors_per_step,
                rng,
                bounds,
                self.config.step_scale,
            );

            let mut best_neighbor = None;
            let mut best_score = current_score;
            for neighbor in neighbors {
                let metrics = oracle.evaluate(&neighbor);
                let score = objective.score(&metrics);
                if score > best_score {
                    best_score = score;
                    best_neighbor = Some((neighbor, metrics));
                }
            }

            let Some((neighbor, metrics)) = best_neighbor else {
                info!(
                    iteration = iter,
                    score = current_score,
                    "hill climbing stopped: sampled local maximum"
                );
                break;
            };

            current = neighbor;
            current_metrics = metrics;
            current_score = best_score;
            debug!(iteration = iter, score = current_score, "hill climbing moved");

            observer.on_step(&StepRecord::new(iter, current_score, &current_metrics));
        }

        SearchReport::new(current, current_metrics, current_score, iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;
    use ot_types::Metrics;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Deterministic oracle: accuracy peaks at depth 7, ignores lr and reg.
    fn depth_oracle(p: &HyperParams) -> Metrics {
        let acc = 1.0 - (p.depth - 7).abs() as f64 / 10.0;
        Metrics::new(acc, acc, 0.0)
    }

    struct AccuracyObjective;

    impl Objective for AccuracyObjective {
        fn score(&self, metrics: &Metrics) -> f64 {
            metrics.accuracy
        }

        fn name(&self) -> &str {
            "accuracy"
        }
    }

    #[test]
    fn climbs_toward_preferred_depth() {
        let bounds = Bounds::default();
        let start = HyperParams::new(0.05, 5, 0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut oracle = depth_oracle;
        let mut observer = RecordingObserver::new();

        let config = HillClimbConfig::default()
            .with_max_iterations(60)
            .with_neighbors_per_step(20)
            .with_step_scale(1.0);
        let report = HillClimb::new(config).run(
            start,
            &bounds,
            &mut rng,
            &mut oracle,
            &AccuracyObjective,
            &mut observer,
        );

        assert_eq!(report.best.depth, 7);
        assert!((report.best_score - 1.0).abs() < 1e-12);

        // Current-score trajectory is strictly increasing after the start record.
        for pair in observer.steps.windows(2) {
            assert!(pair[1].score > pair[0].score);
        }
    }

    #[test]
    fn flat_landscape_terminates_immediately() {
        let bounds = Bounds::default();
        let start = bounds.center();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut oracle = |_: &HyperParams| Metrics::new(0.5, 0.5, 1.0);
        let mut observer = RecordingObserver::new();

        let report = HillClimb::new(HillClimbConfig::default()).run(
            start,
            &bounds,
            &mut rng,
            &mut oracle,
            &AccuracyObjective,
            &mut observer,
        );

        // Equal scores are not strict improvements.
        assert_eq!(report.best, start);
        assert_eq!(report.iterations, 1);
        assert_eq!(observer.steps.len(), 1);
    }

    #[test]
    fn respects_max_iterations() {
        let bounds = Bounds::new(0.0, 1.0, 1, 1_000_000, 0.0, 1.0).unwrap();
        let start = HyperParams::new(0.5, 1, 0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        // Unbounded slope: deeper is always better, so only the cap stops us.
        let mut oracle = |p: &HyperParams| Metrics::new(p.depth as f64, 0.0, 0.0);
        let mut observer = RecordingObserver::new();

        let config = HillClimbConfig::default()
            .with_max_iterations(5)
            .with_neighbors_per_step(40)
            .with_step_scale(1.0);
        let report = HillClimb::new(config).run(
            start,
            &bounds,
            &mut rng,
            &mut oracle,
            &AccuracyObjective,
            &mut observer,
        );

        assert_eq!(report.iterations, 5);
        assert!(report.best.depth > 1);
    }

    #[test]
    fn identical_seeds_give_identical_trajectories() {
        let bounds = Bounds::default();
        let start = HyperParams::new(0.05, 5, 0.5);
        let config = HillClimbConfig::default()
            .with_max_iterations(30)
            .with_neighbors_per_step(8)
            .with_step_scale(1.0);

        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut oracle = depth_oracle;
            let mut observer = RecordingObserver::new();
            let report = HillClimb::new(config).run(
                start,
                &bounds,
                &mut rng,
                &mut oracle,
                &AccuracyObjective,
                &mut observer,
            );
            (report, observer.steps)
        };

        let (report_a, steps_a) = run(123);
        let (report_b, steps_b) = run(123);
        assert_eq!(report_a, report_b);
        assert_eq!(steps_a, steps_b);
    }
}
