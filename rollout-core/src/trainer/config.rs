//! Configuration of [`Trainer`](super::Trainer).
use crate::error::RolloutError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Transform applied to the raw reward before it is accumulated into the
/// running episode return.
///
/// The transform affects the reported training return only; transitions
/// always store the raw reward. [`ReturnTransform::SuccessIndicator`]
/// counts strictly positive rewards, which turns the episode return of
/// sparse-reward environment families into a success measure.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub enum ReturnTransform {
    /// Accumulate the raw reward.
    Identity,

    /// Accumulate `1.0` for every strictly positive reward.
    SuccessIndicator,
}

impl ReturnTransform {
    /// Applies the transform to a single reward.
    pub fn apply(&self, reward: f32) -> f32 {
        match self {
            ReturnTransform::Identity => reward,
            ReturnTransform::SuccessIndicator => {
                if reward > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl Default for ReturnTransform {
    fn default() -> Self {
        ReturnTransform::Identity
    }
}

fn default_eval_enabled() -> bool {
    true
}

fn default_update_every() -> usize {
    1
}

/// Configuration of [`Trainer`](super::Trainer).
///
/// The numeric loop parameters are required; deserializing a
/// configuration file that lacks one of them fails. Range constraints
/// are enforced by [`TrainerConfig::check`] before the trainer touches
/// the environment.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TrainerConfig {
    /// The number of training epochs.
    pub num_epochs: usize,

    /// The number of environment steps per epoch.
    pub num_steps_per_epoch: usize,

    /// The number of evaluation episodes run at every epoch boundary.
    pub num_test_episodes_per_epoch: usize,

    /// The number of environment steps between update rounds.
    ///
    /// Each round performs this many learning updates, keeping the
    /// update-to-interaction ratio at one.
    #[serde(default = "default_update_every")]
    pub update_every: usize,

    /// Exploration period in environment steps.
    ///
    /// Before this many steps have elapsed, actions are sampled
    /// uniformly from the action space and no update is performed.
    pub update_after: usize,

    /// Where to save the trained model. `None` skips saving.
    #[serde(default)]
    pub model_dir: Option<String>,

    /// Whether evaluation rollouts run at epoch boundaries.
    #[serde(default = "default_eval_enabled")]
    pub eval_enabled: bool,

    /// Transform of rewards accumulated into reported episode returns.
    #[serde(default)]
    pub return_transform: ReturnTransform,

    /// Seed of the training environment.
    #[serde(default)]
    pub seed: i64,
}

impl TrainerConfig {
    /// Constructs a configuration with the required loop parameters.
    pub fn new(
        num_epochs: usize,
        num_steps_per_epoch: usize,
        num_test_episodes_per_epoch: usize,
        update_after: usize,
    ) -> Self {
        Self {
            num_epochs,
            num_steps_per_epoch,
            num_test_episodes_per_epoch,
            update_every: default_update_every(),
            update_after,
            model_dir: None,
            eval_enabled: default_eval_enabled(),
            return_transform: ReturnTransform::default(),
            seed: 0,
        }
    }

    /// Sets the number of environment steps between update rounds.
    pub fn update_every(mut self, v: usize) -> Self {
        self.update_every = v;
        self
    }

    /// Sets the directory where the trained model is saved.
    pub fn model_dir(mut self, model_dir: impl Into<String>) -> Self {
        self.model_dir = Some(model_dir.into());
        self
    }

    /// Enables or disables evaluation rollouts.
    pub fn eval_enabled(mut self, v: bool) -> Self {
        self.eval_enabled = v;
        self
    }

    /// Sets the return transform.
    pub fn return_transform(mut self, v: ReturnTransform) -> Self {
        self.return_transform = v;
        self
    }

    /// Sets the seed of the training environment.
    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    /// The total number of environment steps of a full run.
    pub fn total_steps(&self) -> usize {
        self.num_epochs * self.num_steps_per_epoch
    }

    /// Validates the range constraints of the loop parameters.
    ///
    /// Called by the trainer before any environment interaction; a
    /// violation is a fatal startup error.
    pub fn check(&self) -> Result<(), RolloutError> {
        if self.num_epochs == 0 {
            return Err(RolloutError::InvalidConfig(
                "num_epochs must be positive".into(),
            ));
        }
        if self.num_steps_per_epoch == 0 {
            return Err(RolloutError::InvalidConfig(
                "num_steps_per_epoch must be positive".into(),
            ));
        }
        if self.eval_enabled && self.num_test_episodes_per_epoch == 0 {
            return Err(RolloutError::InvalidConfig(
                "num_test_episodes_per_epoch must be positive when evaluation is enabled".into(),
            ));
        }
        if self.update_every == 0 {
            return Err(RolloutError::InvalidConfig(
                "update_every must be positive".into(),
            ));
        }
        if self.update_after >= self.total_steps() {
            return Err(RolloutError::InvalidConfig(format!(
                "update_after ({}) must be less than the total number of steps ({})",
                self.update_after,
                self.total_steps(),
            )));
        }
        Ok(())
    }

    /// Constructs [`TrainerConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TrainerConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
