//! Best-effort CSV trajectory output.
//!
//! History files are a pure side channel: if a writer cannot be opened the
//! failure is logged and the search runs without trajectory records. Nothing
//! here is ever read back by the engines.

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use serde::Serialize;
use tracing::warn;

use ot_search::{AnnealRecord, SearchObserver, SearchReport, StepRecord};
use ot_types::{OtError, OtResult};

#[derive(Debug, Serialize)]
struct StepRow {
    iter: usize,
    score: f64,
    accuracy: f64,
    f1: f64,
    latency: f64,
}

#[derive(Debug, Serialize)]
struct AnnealRow {
    iter: usize,
    #[serde(rename = "T")]
    temperature: f64,
    score: f64,
    accepted_worse: u8,
}

/// CSV-backed search observer.
///
/// Writes `iter,score,accuracy,f1,latency` rows for hill climbing and beam
/// search, or `iter,T,score,accepted_worse` rows for annealing, depending on
/// which hook the engine drives. Degrades to a no-op when the file cannot be
/// created.
pub struct HistoryWriter {
    writer: Option<Writer<File>>,
}

impl HistoryWriter {
    /// Opens a history file at `path`, creating parent directories as needed.
    /// On failure the writer is inert and the failure is logged once.
    pub fn create(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let writer = match Self::try_create(path) {
            Ok(writer) => Some(writer),
            Err(e) => {
                warn!("could not open history file {}: {e}", path.display());
                None
            }
        };
        Self { writer }
    }

    fn try_create(path: &Path) -> OtResult<Writer<File>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Writer::from_path(path).map_err(|e| OtError::Csv(e.to_string()))
    }

    /// Returns `true` when records are actually being persisted.
    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    pub fn flush(&mut self) {
        if let Some(writer) = &mut self.writer {
            if let Err(e) = writer.flush() {
                warn!("could not flush history file: {e}");
            }
        }
    }

    fn write<T: Serialize>(&mut self, row: &T) {
        if let Some(writer) = &mut self.writer {
            if let Err(e) = writer.serialize(row) {
                warn!("could not write history record: {e}");
            }
        }
    }
}

impl SearchObserver for HistoryWriter {
    fn on_step(&mut self, record: &StepRecord) {
        self.write(&StepRow {
            iter: record.iteration,
            score: record.score,
            accuracy: record.accuracy,
            f1: record.f1,
            latency: record.latency,
        });
    }

    fn on_anneal_step(&mut self, record: &AnnealRecord) {
        self.write(&AnnealRow {
            iter: record.iteration,
            temperature: record.temperature,
            score: record.score,
            accepted_worse: record.accepted_worse as u8,
        });
    }
}

/// One line of the final per-algorithm summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub algorithm: String,
    pub lr: f64,
    pub depth: i32,
    pub reg: f64,
    pub accuracy: f64,
    pub f1: f64,
    pub latency: f64,
    pub score: f64,
}

impl SummaryRow {
    pub fn from_report(algorithm: &str, report: &SearchReport) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            lr: report.best.lr,
            depth: report.best.depth,
            reg: report.best.reg,
            accuracy: report.best_metrics.accuracy,
            f1: report.best_metrics.f1,
            latency: report.best_metrics.latency,
            score: report.best_score,
        }
    }
}

/// Writes the per-algorithm summary table. Unlike history output this is a
/// run deliverable, so failures propagate.
pub fn write_summary(path: impl AsRef<Path>, rows: &[SummaryRow]) -> OtResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = Writer::from_path(path).map_err(|e| OtError::Csv(e.to_string()))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| OtError::Csv(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ot_types::{HyperParams, Metrics};

    #[test]
    fn history_writer_emits_step_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hc_history.csv");

        let mut writer = HistoryWriter::create(&path);
        assert!(writer.is_active());

        let metrics = Metrics::new(0.9, 0.85, 120.0);
        writer.on_step(&StepRecord::new(0, 0.9, &metrics));
        writer.on_step(&StepRecord::new(1, 0.92, &metrics));
        writer.flush();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("iter,score,accuracy,f1,latency"));
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn history_writer_emits_anneal_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sa_history.csv");

        let mut writer = HistoryWriter::create(&path);
        writer.on_anneal_step(&AnnealRecord {
            iteration: 1,
            temperature: 1.5,
            score: 0.7,
            accepted_worse: true,
        });
        writer.flush();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("iter,T,score,accepted_worse"));
        assert_eq!(lines.next(), Some("1,1.5,0.7,1"));
    }

    #[test]
    fn unopenable_history_degrades_to_noop() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, b"file").unwrap();

        // Parent path is a regular file, so creation must fail.
        let mut writer = HistoryWriter::create(blocker.join("history.csv"));
        assert!(!writer.is_active());

        let metrics = Metrics::new(0.5, 0.5, 10.0);
        writer.on_step(&StepRecord::new(0, 0.5, &metrics));
        writer.flush();
    }

    #[test]
    fn summary_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csv").join("summary.csv");

        let report = ot_search::SearchReport::new(
            HyperParams::new(0.01, 7, 0.3),
            Metrics::new(0.95, 0.9, 125.0),
            0.95,
            42,
        );
        let rows = vec![
            SummaryRow::from_report("HC", &report),
            SummaryRow::from_report("Beam", &report),
            SummaryRow::from_report("SA", &report),
        ];
        write_summary(&path, &rows).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("algorithm,lr,depth,reg,accuracy,f1,latency,score")
        );
        assert_eq!(contents.lines().count(), 4);
        assert!(contents.contains("HC,0.01,7,0.3"));
    }
}
