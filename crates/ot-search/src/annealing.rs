//! Simulated annealing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ot_types::{config_error, Bounds, HyperParams, OtResult};

use crate::neighbor::{local_neighbor, ANNEAL_STEP_SCALE};
use crate::objective::{Objective, Oracle};
use crate::observer::{AnnealRecord, SearchObserver};
use crate::result::SearchReport;

/// Configuration for a simulated annealing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealingConfig {
    /// Hard cap on annealing steps.
    pub max_iterations: usize,
    /// Initial temperature.
    pub t_start: f64,
    /// The run stops once the temperature is at or below this threshold.
    pub t_end: f64,
    /// Geometric cooling factor, strictly between 0 and 1.
    pub alpha: f64,
    /// Perturbation scale for proposals.
    pub step_scale: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 2000,
            t_start: 1.5,
            t_end: 1e-4,
            alpha: 0.995,
            step_scale: ANNEAL_STEP_SCALE,
        }
    }
}

impl AnnealingConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_temperatures(mut self, t_start: f64, t_end: f64) -> Self {
        self.t_start = t_start;
        self.t_end = t_end;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_step_scale(mut self, scale: f64) -> Self {
        self.step_scale = scale;
        self
    }
}

/// Metropolis acceptance probability for a score deficit `d_e >= 0` at
/// temperature `temperature`.
///
/// Strictly decreasing in `d_e`, strictly increasing in `temperature`:
/// approaches 0 as the temperature drops to 0 and 1 as it grows without
/// bound. A non-positive temperature rejects outright.
pub fn metropolis(d_e: f64, temperature: f64) -> f64 {
    if temperature <= 0.0 {
        return 0.0;
    }
    (-d_e / temperature).exp().min(1.0)
}

/// Simulated annealing engine.
///
/// Each step proposes one large-step neighbor, accepts it outright when it
/// improves the score, and otherwise accepts with the Metropolis probability
/// `exp(-dE / T)` where `dE = current_score - next_score`. The best-ever
/// point is tracked separately from the current one — the walk may move
/// downhill, the best never does. Temperature decays geometrically after
/// every step.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAnnealing {
    config: AnnealingConfig,
}

impl SimulatedAnnealing {
    /// Creates the engine, rejecting cooling factors outside `(0, 1)`.
    pub fn new(config: AnnealingConfig) -> OtResult<Self> {
        if !(config.alpha > 0.0 && config.alpha < 1.0) {
            return Err(config_error!(
                "cooling factor alpha must be in (0, 1), got {}",
                config.alpha
            ));
        }
        Ok(Self { config })
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

        let mut best = current;
        let mut best_metrics = current_metrics;
        let mut best_score = current_score;

        let mut temperature = self.config.t_start;

        observer.on_anneal_step(&AnnealRecord {
            iteration: 0,
            temperature,
            score: current_score,
            accepted_worse: false,
        });

        let mut steps = 0;
        for step in 1..=self.config.max_iterations {
            if temperature <= self.config.t_end {
                info!(step, temperature, "annealing stopped: temperature floor reached");
                break;
            }
            steps = step;

            let proposal = local_neighbor(&current, rng, bounds, self.config.step_scale);
            let proposal_metrics = oracle.evaluate(&proposal);
            let proposal_score = objective.score(&proposal_metrics);

            // Energy framed for maximization: a score drop is a positive cost.
            let d_e = current_score - proposal_score;

            let mut accepted_worse = false;
            if d_e < 0.0 {
                current = proposal;
                current_metrics = proposal_metrics;
                current_score = proposal_score;
            } else {
                let probability = metropolis(d_e, temperature);
                if rng.gen::<f64>() < probability {
                    current = proposal;
                    current_metrics = proposal_metrics;
                    current_score = proposal_score;
                    accepted_worse = true;
                }
            }

            if current_score > best_score {
                best = current;
                best_metrics = current_metrics;
                best_score = current_score;
                debug!(step, best_score, "annealing found new best");
            }

            observer.on_anneal_step(&AnnealRecord {
                iteration: step,
                temperature,
                score: current_score,
                accepted_worse,
            });

            temperature *= self.config.alpha;
        }

        SearchReport::new(best, best_metrics, best_score, steps)
    }
}
