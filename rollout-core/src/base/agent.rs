//! Agent.
use super::{Env, Policy, ReplayBufferBase};
use crate::record::Record;
use anyhow::Result;
use std::path::Path;

/// Represents a trainable policy on an environment.
pub trait Agent<E: Env, R: ReplayBufferBase>: Policy<E> {
    /// Set the policy to training mode, i.e. stochastic action selection.
    fn train(&mut self);

    /// Set the policy to evaluation mode, i.e. deterministic action selection.
    fn eval(&mut self);

    /// Return if it is in training mode.
    fn is_train(&self) -> bool;

    /// Performs a single learning update on the given batch.
    ///
    /// Returns the algorithm-specific statistics of the update as scalar
    /// entries of a [`Record`]. The key set is expected to be stable
    /// across calls within a run; the trainer aggregates the values per
    /// epoch by arithmetic mean per key.
    fn update(&mut self, batch: R::Batch) -> Record;

    /// Save the parameters of the agent in the given directory.
    ///
    /// This method commonly creates a number of files consisting the
    /// agent in the directory, e.g. one file per network.
    fn save_params(&self, path: &Path) -> Result<()>;

    /// Load the parameters of the agent from the given directory.
    fn load_params(&mut self, path: &Path) -> Result<()>;
}
