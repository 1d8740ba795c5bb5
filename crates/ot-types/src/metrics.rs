//! Quality metrics reported by the evaluation oracle.

use serde::{Deserialize, Serialize};

/// Metrics produced by evaluating one candidate point.
///
/// Opaque to the search engines: they only ever see the scalar score an
/// objective derives from these fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub f1: f64,
    /// Evaluation latency in milliseconds.
    pub latency: f64,
}

impl Metrics {
    pub fn new(accuracy: f64, f1: f64, latency: f64) -> Self {
        Self {
            accuracy,
            f1,
            latency,
        }
    }
}

impl std::fmt::Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{accuracy: {:.4}, f1: {:.4}, latency: {:.2}ms}}",
            self.accuracy, self.f1, self.latency
        )
    }
}
