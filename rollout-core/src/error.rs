//! Errors of the library.
use thiserror::Error;

/// Errors raised by the training harness.
///
/// Contract violations ([`RolloutError::EnvContract`]) and configuration
/// errors ([`RolloutError::InvalidConfig`]) indicate a broken collaborator
/// or a broken setup; they are never retried.
#[derive(Debug, Error)]
pub enum RolloutError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// The environment violated its termination/truncation contract.
    #[error("Environment contract violated: {0}")]
    EnvContract(String),

    /// A required configuration value is missing or out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
