//! HTTP telemetry for the rollout training harness.
//!
//! Pushes epoch metrics to a tracking server in real time. The server is
//! expected to expose a small JSON API:
//!
//! * `POST {base}/api/runs/create` with `{"name", "start_time"}`,
//!   answering `{"run_id": "..."}`.
//! * `POST {base}/api/runs/log-metric` with
//!   `{"run_id", "key", "value", "timestamp", "step"}`.
//! * `POST {base}/api/runs/update` with
//!   `{"run_id", "status", "end_time"}`.
//!
//! [`TrackingClient`] creates runs; the [`TrackingRecorder`] bound to a
//! run implements [`Recorder`](rollout_core::record::Recorder) and logs
//! every scalar of each written record.
mod client;
mod recorder;

pub use client::TrackingClient;
pub use recorder::TrackingRecorder;

/// Current local time in milliseconds since the epoch, as the tracking
/// API expects timestamps.
pub(crate) fn system_time_as_millis() -> i64 {
    chrono::Local::now().timestamp_millis()
}
