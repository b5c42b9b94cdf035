//! Train [`Agent`].
mod config;
mod driver;
mod stats;
use std::{path::Path, time::Instant};

use crate::{
    error::RolloutError, record::Recorder, Agent, Env, Evaluator, ExperienceBufferBase, Info,
    RecurrentAgent, ReplayBufferBase, Step, Transition,
};
use anyhow::{Context, Result};
pub use config::{ReturnTransform, TrainerConfig};
pub use driver::{FeedforwardDriver, PolicyDriver, RecurrentDriver};
use log::info;
pub use stats::EpochStats;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Manages the training loop and related objects.
///
/// # Training loop
///
/// The loop runs for `num_epochs * num_steps_per_epoch` environment
/// steps, driven by a single global step counter `t`:
///
/// 1. While `t < update_after` (the exploration phase), actions are
///    sampled uniformly from the action space; afterwards they come from
///    the acting instance of the agent.
/// 2. The environment steps, the running episode length and return are
///    advanced, and the step's end-of-episode flags are resolved: at the
///    environment's `max_episode_steps` the time-limit flag in the step
///    info decides between truncation and termination (exactly one of
///    the two; anything else is a broken environment contract and aborts
///    the run). Below the limit the environment's termination flag is
///    taken as is.
/// 3. The transition, with both resolved flags, goes to the replay
///    buffer, implementing [`ReplayBufferBase`].
/// 4. When the episode ended, its length and return are recorded for the
///    epoch and the environment is reset. Recurrent agents reconcile
///    their live instance here.
/// 5. When `t >= update_after`, every `update_every` steps, and provided
///    the buffer reports readiness, `update_every` learning updates run
///    back to back, each on one freshly sampled batch.
/// 6. At every `num_steps_per_epoch`-th step the epoch closes:
///    evaluation episodes run against copies of the learning instance,
///    the epoch record is assembled once by [`EpochStats`] and written
///    to the recorder, and the epoch accumulators are cleared.
///
/// After the loop, the learning instance's parameters are saved to the
/// configured model directory.
///
/// # Interaction of objects
///
/// ```mermaid
/// graph LR
///     A[PolicyDriver]-->|Env::Act|B[Env]
///     B -->|Env::Obs|A
///     B -->|"Transition"|D[ReplayBufferBase]
///     D -->|Batch|A
///     A -->|Record|E[EpochStats]
///     E -->|epoch Record|F[Recorder]
/// ```
#[derive(Debug)]
pub struct Trainer<E, R>
where
    E: Env,
    R: ExperienceBufferBase<Item = Transition<E::Obs, E::Act>> + ReplayBufferBase,
{
    /// Configuration of the environment for training.
    env_config: E::Config,

    /// Configuration of the replay buffer.
    replay_buffer_config: R::Config,

    /// Where to save the trained model.
    model_dir: Option<String>,

    /// The number of epochs.
    num_epochs: usize,

    /// The number of environment steps per epoch.
    num_steps_per_epoch: usize,

    /// Interval between update rounds, in environment steps.
    update_every: usize,

    /// Exploration period, in environment steps.
    update_after: usize,

    /// Whether evaluation runs at epoch boundaries.
    eval_enabled: bool,

    /// Transform of rewards accumulated into reported returns.
    return_transform: ReturnTransform,

    /// Seed of the training environment.
    seed: i64,
}

impl<E, R> Trainer<E, R>
where
    E: Env,
    R: ExperienceBufferBase<Item = Transition<E::Obs, E::Act>> + ReplayBufferBase,
{
    /// Constructs a trainer.
    ///
    /// Fails when the configuration violates its range constraints; this
    /// happens before any environment is built.
    pub fn build(
        config: TrainerConfig,
        env_config: E::Config,
        replay_buffer_config: R::Config,
    ) -> Result<Self, RolloutError> {
        config.check()?;
        Ok(Self {
            env_config,
            replay_buffer_config,
            model_dir: config.model_dir,
            num_epochs: config.num_epochs,
            num_steps_per_epoch: config.num_steps_per_epoch,
            update_every: config.update_every,
            update_after: config.update_after,
            eval_enabled: config.eval_enabled,
            return_transform: config.return_transform,
            seed: config.seed,
        })
    }

    /// The total number of environment steps of a full run.
    pub fn total_steps(&self) -> usize {
        self.num_epochs * self.num_steps_per_epoch
    }

    /// Resolves the end-of-episode flags of a step.
    ///
    /// At the limit, the time-limit flag decides; termination is its
    /// complement. A missing flag, or a truncation flag raised together
    /// with environment-side termination, breaks the environment
    /// contract.
    fn resolve_episode_end(
        step: &Step<E>,
        episode_len: usize,
        max_episode_steps: usize,
    ) -> Result<(bool, bool), RolloutError> {
        if episode_len == max_episode_steps {
            let is_truncated = step.info.truncated_at_limit().ok_or_else(|| {
                RolloutError::EnvContract(format!(
                    "no time-limit flag in the step info at max_episode_steps ({})",
                    max_episode_steps
                ))
            })?;
            if is_truncated && step.is_terminated {
                return Err(RolloutError::EnvContract(
                    "terminated and truncated at max_episode_steps".to_string(),
                ));
            }
            Ok((!is_truncated, is_truncated))
        } else {
            Ok((step.is_terminated, false))
        }
    }

    /// Train a feedforward (stateless) agent.
    ///
    /// One instance both acts and learns.
    pub fn train<A, V>(
        &mut self,
        agent: &mut A,
        recorder: &mut dyn Recorder,
        evaluator: &mut V,
    ) -> Result<()>
    where
        A: Agent<E, R> + Clone,
        V: Evaluator<E, A>,
    {
        agent.train();
        let mut driver = FeedforwardDriver::new(agent);
        self.run(&mut driver, recorder, evaluator)
    }

    /// Train a recurrent (stateful) agent.
    ///
    /// `agent` is the learning instance: it receives every update and its
    /// parameters are the ones saved after the loop. A live copy, cloned
    /// here, selects the actions and is brought up to date at episode
    /// boundaries through [`RecurrentAgent::sync_params`].
    pub fn train_recurrent<A, V>(
        &mut self,
        agent: &mut A,
        recorder: &mut dyn Recorder,
        evaluator: &mut V,
    ) -> Result<()>
    where
        A: Agent<E, R> + RecurrentAgent + Clone,
        V: Evaluator<E, A>,
    {
        agent.train();
        let mut driver = RecurrentDriver::new(agent);
        self.run(&mut driver, recorder, evaluator)
    }

    /// The training loop shared by both kinds of agents.
    fn run<D, V>(
        &mut self,
        driver: &mut D,
        recorder: &mut dyn Recorder,
        evaluator: &mut V,
    ) -> Result<()>
    where
        D: PolicyDriver<E, R>,
        V: Evaluator<E, D::Agent>,
    {
        let total_steps = self.total_steps();
        let mut env = E::build(&self.env_config, self.seed)?;
        let mut buffer = R::build(&self.replay_buffer_config);
        let mut stats = EpochStats::new();
        let mut prev_obs = env.reset()?;
        let mut episode_len: usize = 0;
        let mut episode_ret: f32 = 0.0;
        let start_time = Instant::now();

        info!(
            "Starts training for {} steps ({} epochs)",
            total_steps, self.num_epochs
        );

        for t in 0..total_steps {
            // Uniform actions until the exploration phase is over.
            let act = if t >= self.update_after {
                driver.sample(&prev_obs)
            } else {
                env.sample_act()
            };
            let step = env.step(&act);

            episode_len += 1;
            episode_ret += self.return_transform.apply(step.reward);

            let (is_terminated, is_truncated) =
                Self::resolve_episode_end(&step, episode_len, env.max_episode_steps())?;

            let Step {
                act, obs, reward, ..
            } = step;
            buffer.push(Transition {
                obs: prev_obs,
                act,
                reward,
                next_obs: obs.clone(),
                is_terminated,
                is_truncated,
            })?;
            prev_obs = obs;

            // End of trajectory handling.
            if is_terminated || is_truncated {
                stats.push_episode(episode_len, episode_ret);
                episode_len = 0;
                episode_ret = 0.0;
                prev_obs = env.reset()?;
                driver.finish_episode();
            }

            // Update handling.
            if t >= self.update_after
                && (t + 1) % self.update_every == 0
                && buffer.ready_to_sample()
            {
                for _ in 0..self.update_every {
                    let batch = buffer.sample()?;
                    stats.push_update(driver.update(batch));
                }
            }

            // End of epoch handling.
            if (t + 1) % self.num_steps_per_epoch == 0 {
                let epoch = (t + 1) / self.num_steps_per_epoch;

                let eval = if self.eval_enabled {
                    let eval_agent = driver.eval_agent();
                    Some(evaluator.evaluate(&eval_agent)?)
                } else {
                    None
                };

                let hour = start_time.elapsed().as_secs_f32() / 3600.0;
                let record = stats.summarize(epoch, t + 1, eval.as_ref(), hour);
                recorder.write(record);
                recorder.flush();
                stats.clear();
            }
        }

        if let Some(model_dir) = self.model_dir.as_ref() {
            let path = Path::new(model_dir);
            driver
                .agent()
                .save_params(path)
                .with_context(|| format!("Failed to save the model in {:?}", path))?;
            info!("Saved the model in {:?}", path);
        }

        Ok(())
    }
}
