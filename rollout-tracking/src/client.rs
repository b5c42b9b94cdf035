use crate::{system_time_as_millis, TrackingRecorder};
use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct CreateRunParams<'a> {
    name: &'a str,
    start_time: i64,
}

/// Client of a metric tracking server.
///
/// # Examples
///
/// ```no_run
/// use rollout_tracking::TrackingClient;
///
/// let client = TrackingClient::new("http://localhost:8080");
/// let recorder = client.create_recorder("sac-pendulum-1").unwrap();
/// ```
pub struct TrackingClient {
    client: Client,
    base_url: String,
}

impl TrackingClient {
    /// Constructs a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a run on the server and returns a recorder bound to it.
    ///
    /// Fails when the server is unreachable or answers without a run id.
    pub fn create_recorder(&self, run_name: &str) -> Result<TrackingRecorder> {
        let url = format!("{}/api/runs/create", self.base_url);
        let resp: Value = self
            .client
            .post(&url)
            .json(&CreateRunParams {
                name: run_name,
                start_time: system_time_as_millis(),
            })
            .send()?
            .error_for_status()?
            .json()?;

        let run_id = resp["run_id"]
            .as_str()
            .ok_or_else(|| anyhow!("No run_id in the response of {}", url))?
            .to_string();

        Ok(TrackingRecorder::new(
            self.client.clone(),
            self.base_url.clone(),
            run_id,
        ))
    }
}
