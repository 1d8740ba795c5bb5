//! # ot-search
//!
//! Local-search engines for Optitune.
//!
//! Provides stochastic neighbor generation over the bounded parameter domain and
//! three independent metaheuristics — greedy hill climbing, beam search, and
//! simulated annealing — that share the same oracle, objective, and observer
//! contracts.
//!
//! All entropy flows through an explicit `rand::Rng` handle passed by mutable
//! reference; given a fixed seed and an identical call sequence, every engine
//! produces a bit-identical trajectory.

mod annealing;
mod beam;
mod hill_climb;
mod neighbor;
mod objective;
mod observer;
mod result;

pub use annealing::{metropolis, AnnealingConfig, SimulatedAnnealing};
pub use beam::{BeamConfig, BeamSearch};
pub use hill_climb::{HillClimb, HillClimbConfig};
pub use neighbor::{
    generate_neighbors, local_neighbor, random_point, ANNEAL_STEP_SCALE, DEFAULT_STEP_SCALE,
};
pub use objective::{Objective, Oracle};
pub use observer::{AnnealRecord, NoOpObserver, RecordingObserver, SearchObserver, StepRecord};
pub use result::SearchReport;
