//! Default implementation of the [`Evaluator`] trait.
use super::{run_episode, EvalReport, Evaluator};
use crate::{Env, Policy};
use anyhow::Result;

/// A default implementation of the [`Evaluator`] trait.
///
/// Owns its own environment instance, separate from the training
/// environment, and runs a fixed number of episodes per round. Each
/// episode runs against a fresh clone of the given policy, so repeated
/// rounds are independent and the caller's instance stays untouched.
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run per evaluation round.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E, P> Evaluator<E, P> for DefaultEvaluator<E>
where
    E: Env,
    P: Policy<E> + Clone,
{
    fn evaluate(&mut self, policy: &P) -> Result<EvalReport> {
        let mut lens = Vec::with_capacity(self.n_episodes);
        let mut rets = Vec::with_capacity(self.n_episodes);

        for _ in 0..self.n_episodes {
            let mut policy = policy.clone();
            let (ep_len, ep_ret) = run_episode(&mut self.env, &mut policy)?;
            lens.push(ep_len as f32);
            rets.push(ep_ret);
        }

        let n = self.n_episodes as f32;
        Ok(EvalReport {
            mean_len: lens.iter().sum::<f32>() / n,
            mean_ret: rets.iter().sum::<f32>() / n,
        })
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a [`DefaultEvaluator`].
    ///
    /// `n_episodes` is the number of evaluation episodes per round,
    /// typically the configured `num_test_episodes_per_epoch`.
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }
}
