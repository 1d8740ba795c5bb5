//! Per-algorithm objectives.
//!
//! Each objective reduces oracle metrics to one scalar where higher is
//! better. The formulas are deliberately simple and independent; engines only
//! ever compare scores produced by their own objective.

use ot_search::Objective;
use ot_types::Metrics;

/// Latency normalization constant: a 200ms evaluation costs one full unit
/// before weighting.
const LATENCY_SCALE_MS: f64 = 200.0;

/// Hill climbing optimizes raw accuracy.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbObjective;

impl Objective for HillClimbObjective {
    fn score(&self, metrics: &Metrics) -> f64 {
        metrics.accuracy
    }

    fn name(&self) -> &str {
        "accuracy"
    }
}

/// Beam search balances accuracy, f1, and response time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeamObjective;

impl Objective for BeamObjective {
    fn score(&self, metrics: &Metrics) -> f64 {
        0.5 * metrics.accuracy + 0.3 * metrics.f1 - 0.2 * (metrics.latency / LATENCY_SCALE_MS)
    }

    fn name(&self) -> &str {
        "balanced"
    }
}

/// Annealing favors quality with only a soft latency penalty, leaving room
/// for the wide-ranging walk to explore extreme parameter values.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnealingObjective;

impl Objective for AnnealingObjective {
    fn score(&self, metrics: &Metrics) -> f64 {
        0.6 * metrics.accuracy + 0.4 * metrics.f1 - 0.05 * (metrics.latency / LATENCY_SCALE_MS)
    }

    fn name(&self) -> &str {
        "quality"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hill_climb_objective_is_accuracy() {
        let m = Metrics::new(0.91, 0.5, 400.0);
        assert_eq!(HillClimbObjective.score(&m), 0.91);
    }

    #[test]
    fn beam_objective_penalizes_latency() {
        let fast = Metrics::new(0.9, 0.9, 50.0);
        let slow = Metrics::new(0.9, 0.9, 350.0);
        assert!(BeamObjective.score(&fast) > BeamObjective.score(&slow));
    }

    #[test]
    fn annealing_objective_weights_quality_over_latency() {
        // A large accuracy gain should outweigh a moderate latency hit.
        let accurate_slow = Metrics::new(0.95, 0.93, 170.0);
        let sloppy_fast = Metrics::new(0.70, 0.68, 35.0);
        assert!(AnnealingObjective.score(&accurate_slow) > AnnealingObjective.score(&sloppy_fast));
    }

    #[test]
    fn objective_names_are_distinct() {
        let names = [
            HillClimbObjective.name().to_string(),
            BeamObjective.name().to_string(),
            AnnealingObjective.name().to_string(),
        ];
        assert_eq!(
            names.iter().collect::<std::collections::HashSet<_>>().len(),
            3
        );
    }
}
