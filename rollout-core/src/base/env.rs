//! Environment.
use super::{Act, Info, Obs, Step};
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// Environments are expected to be wrapped by their own time-limiting
/// logic: [`Env::max_episode_steps`] reports the limit and the
/// [`Info`](super::Info) object of the step hitting the limit carries the
/// truncation flag.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performes an environment step.
    fn step(&mut self, a: &Self::Act) -> Step<Self>
    where
        Self: Sized;

    /// Samples an action uniformly from the action space.
    ///
    /// Used during the exploration phase, before the agent's policy
    /// takes over action selection.
    fn sample_act(&mut self) -> Self::Act;

    /// The episode length at which the environment cuts episodes off.
    fn max_episode_steps(&self) -> usize;
}
