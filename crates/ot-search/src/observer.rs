//! Trajectory observation hooks.
//!
//! Observers receive per-iteration records for logging or analysis. They are a
//! pure side channel: records are passed by shared reference and no hook
//! returns anything, so an observer cannot influence search decisions.

use serde::Serialize;

use ot_types::Metrics;

/// Per-iteration record emitted by hill climbing and beam search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepRecord {
    pub iteration: usize,
    pub score: f64,
    pub accuracy: f64,
    pub f1: f64,
    pub latency: f64,
}

impl StepRecord {
    pub fn new(iteration: usize, score: f64, metrics: &Metrics) -> Self {
        Self {
            iteration,
            score,
            accuracy: metrics.accuracy,
            f1: metrics.f1,
            latency: metrics.latency,
        }
    }
}

/// Per-step record emitted by simulated annealing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnealRecord {
    pub iteration: usize,
    pub temperature: f64,
    pub score: f64,
    /// `true` when a strictly worse proposal was accepted this step.
    pub accepted_worse: bool,
}

/// Receives trajectory events. All hooks default to no-ops so an observer only
/// implements the ones it cares about.
pub trait SearchObserver {
    fn on_step(&mut self, _record: &StepRecord) {}

    fn on_anneal_step(&mut self, _record: &AnnealRecord) {}
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl SearchObserver for NoOpObserver {}

/// Observer that keeps every record in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub steps: Vec<StepRecord>,
    pub anneal_steps: Vec<AnnealRecord>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_step(&mut self, record: &StepRecord) {
        self.steps.push(*record);
    }

    fn on_anneal_step(&mut self, record: &AnnealRecord) {
        self.anneal_steps.push(*record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_observer_keeps_order() {
        let mut obs = RecordingObserver::new();
        let m = Metrics::new(0.9, 0.8, 10.0);
        obs.on_step(&StepRecord::new(0, 0.9, &m));
        obs.on_step(&StepRecord::new(1, 0.95, &m));
        assert_eq!(obs.steps.len(), 2);
        assert_eq!(obs.steps[0].iteration, 0);
        assert_eq!(obs.steps[1].score, 0.95);
    }

    #[test]
    fn noop_observer_accepts_records() {
        let mut obs = NoOpObserver;
        obs.on_anneal_step(&AnnealRecord {
            iteration: 1,
            temperature: 1.0,
            score: 0.5,
            accepted_worse: false,
        });
    }
}
