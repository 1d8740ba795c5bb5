//! # ot-tune
//!
//! Tuning orchestration for Optitune: a synthetic evaluation oracle, the three
//! per-algorithm objectives, and best-effort CSV trajectory output.

pub mod history;
pub mod oracle;
pub mod score;

pub use history::{write_summary, HistoryWriter, SummaryRow};
pub use oracle::SyntheticOracle;
pub use score::{AnnealingObjective, BeamObjective, HillClimbObjective};
