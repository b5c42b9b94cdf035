use super::{Record, RecordValue, Recorder};
use log::info;

/// Keys printed first, in this order, when present in the record.
const LEADING_KEYS: [&str; 7] = [
    "epoch",
    "timestep",
    "train_ep_len",
    "train_ep_ret",
    "test_ep_len",
    "test_ep_ret",
    "hour",
];

/// Human-readable epoch summaries through the `log` facade.
///
/// Scalar values are printed as a table, one line per key, leading with
/// the epoch progress fields. Remaining scalar keys follow in
/// alphabetical order.
pub struct ConsoleRecorder {}

impl ConsoleRecorder {
    /// Construct the recorder.
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ConsoleRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder for ConsoleRecorder {
    fn write(&mut self, record: Record) {
        let mut lines: Vec<String> = vec!["=".repeat(49)];

        for k in LEADING_KEYS.iter() {
            if let Ok(v) = record.get_scalar(k) {
                lines.push(format!("| {:<13} | {}", k, v));
            }
        }

        let mut rest: Vec<&String> = record
            .keys()
            .filter(|k| !LEADING_KEYS.contains(&k.as_str()))
            .collect();
        rest.sort();
        for k in rest {
            match record.get(k) {
                Some(RecordValue::Scalar(v)) => lines.push(format!("| {:<13} | {}", k, v)),
                _ => {}
            }
        }

        lines.push("=".repeat(49));
        info!("\n{}", lines.join("\n"));
    }
}
