use crate::system_time_as_millis;
use anyhow::Result;
use log::warn;
use reqwest::blocking::Client;
use rollout_core::record::{Record, RecordValue, Recorder};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LogMetricParams<'a> {
    run_id: &'a str,
    key: &'a str,
    value: f64,
    timestamp: i64,
    step: i64,
}

#[derive(Debug, Serialize)]
struct UpdateRunParams<'a> {
    run_id: &'a str,
    status: &'a str,
    end_time: i64,
}

/// Pushes the scalars of every written record to the tracking server.
///
/// The value under `timestep` is used as the step field of the logged
/// metrics; the remaining scalar values are logged under their record
/// key. Non-scalar values are ignored. When dropped, the recorder marks
/// the run as finished on the server.
pub struct TrackingRecorder {
    client: Client,
    base_url: String,
    run_id: String,
    step_key: String,
}

impl TrackingRecorder {
    /// Binds a recorder to an existing run.
    ///
    /// This method is used in [`TrackingClient::create_recorder`].
    ///
    /// [`TrackingClient::create_recorder`]: crate::TrackingClient::create_recorder
    pub(crate) fn new(client: Client, base_url: String, run_id: String) -> Self {
        Self {
            client,
            base_url,
            run_id,
            step_key: "timestep".to_string(),
        }
    }

    fn log_metric(&self, key: &str, value: f64, step: i64) -> Result<()> {
        let url = format!("{}/api/runs/log-metric", self.base_url);
        self.client
            .post(&url)
            .json(&LogMetricParams {
                run_id: &self.run_id,
                key,
                value,
                timestamp: system_time_as_millis(),
                step,
            })
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

impl Recorder for TrackingRecorder {
    fn write(&mut self, record: Record) {
        let step = match record.get_scalar(&self.step_key) {
            Ok(v) => v as i64,
            Err(_) => {
                warn!("No {} in the record, nothing is pushed", self.step_key);
                return;
            }
        };

        for (k, v) in record.iter() {
            if k == &self.step_key {
                continue;
            }
            if let RecordValue::Scalar(v) = v {
                if let Err(e) = self.log_metric(k.as_str(), *v as f64, step) {
                    warn!("Failed to push metric {}: {}", k, e);
                }
            }
        }
    }
}

impl Drop for TrackingRecorder {
    /// Marks the run as finished on the server.
    fn drop(&mut self) {
        let url = format!("{}/api/runs/update", self.base_url);
        let result = self
            .client
            .post(&url)
            .json(&UpdateRunParams {
                run_id: &self.run_id,
                status: "FINISHED",
                end_time: system_time_as_millis(),
            })
            .send();
        if let Err(e) = result {
            warn!("Failed to finish the run {}: {}", self.run_id, e);
        }
    }
}
