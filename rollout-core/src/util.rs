//! Utilities for evaluation runs outside the training loop.
use crate::{
    evaluator::{run_episode, EvalReport, Evaluator},
    record::{Record, RecordValue::Scalar, Recorder},
    Agent, Env, Policy, ReplayBufferBase,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Run episodes with a policy and a recorder.
///
/// Writes one record per episode with the keys `episode`, `ep_len` and
/// `ep_ret`, and returns the episode returns.
pub fn eval_with_recorder<E, P, R>(
    env: &mut E,
    policy: &mut P,
    n_episodes: usize,
    recorder: &mut R,
) -> Result<Vec<f32>>
where
    E: Env,
    P: Policy<E>,
    R: Recorder,
{
    let mut rs = Vec::new();

    for episode in 0..n_episodes {
        let (ep_len, ep_ret) = run_episode(env, policy)?;

        let mut record = Record::empty();
        record.insert("episode", Scalar(episode as f32));
        record.insert("ep_len", Scalar(ep_len as f32));
        record.insert("ep_ret", Scalar(ep_ret));
        recorder.write(record);

        rs.push(ep_ret);
    }
    recorder.flush();

    Ok(rs)
}

/// Load saved parameters into the agent and evaluate it.
///
/// The evaluation-only entry point: no training loop executes. Loading
/// the parameters is the sole precondition; a missing or corrupt
/// location is a fatal error carrying the underlying I/O cause.
pub fn load_and_eval<E, A, R, V>(
    agent: &mut A,
    model_dir: impl AsRef<Path>,
    evaluator: &mut V,
) -> Result<EvalReport>
where
    E: Env,
    A: Agent<E, R> + Clone,
    R: ReplayBufferBase,
    V: Evaluator<E, A>,
{
    let model_dir = model_dir.as_ref();
    agent
        .load_params(model_dir)
        .with_context(|| format!("Failed to load the model from {:?}", model_dir))?;
    agent.eval();
    evaluator.evaluate(agent)
}
