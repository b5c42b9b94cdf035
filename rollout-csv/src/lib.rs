//! CSV progress log for the rollout training harness.
use anyhow::Result;
use log::warn;
use rollout_core::record::{Record, Recorder};
use std::path::Path;

/// Fixed column schema of the progress log, one row per epoch.
pub const PROGRESS_COLUMNS: [&str; 6] = [
    "epoch",
    "timestep",
    "train_ep_len",
    "train_ep_ret",
    "test_ep_len",
    "test_ep_ret",
];

/// Append-only tabular sink, one CSV row per epoch record.
///
/// The schema is fixed to [`PROGRESS_COLUMNS`]; the header row is written
/// on creation and every epoch record contributes exactly one row with
/// the values taken from the record verbatim. Keys outside the schema
/// are ignored.
pub struct CsvRecorder {
    wtr: csv::Writer<std::fs::File>,
}

impl CsvRecorder {
    /// Creates the progress file at `path` and writes the header row.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(&PROGRESS_COLUMNS)?;
        Ok(Self { wtr })
    }
}

impl Recorder for CsvRecorder {
    /// Appends one row built from the epoch record.
    ///
    /// `epoch` and `timestep` are written as integers, the remaining
    /// columns as floating point values. A key missing from the record
    /// leaves its field empty.
    fn write(&mut self, record: Record) {
        let row: Vec<String> = PROGRESS_COLUMNS
            .iter()
            .map(|k| match record.get_scalar(k) {
                Ok(v) if *k == "epoch" || *k == "timestep" => format!("{}", v as i64),
                Ok(v) => format!("{}", v),
                Err(_) => String::new(),
            })
            .collect();

        if let Err(e) = self.wtr.write_record(&row) {
            warn!("Failed to append a progress row: {}", e);
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.wtr.flush() {
            warn!("Failed to flush the progress log: {}", e);
        }
    }
}
