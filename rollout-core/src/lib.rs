#![warn(missing_docs)]
//! An off-policy reinforcement learning training harness.
//!
//! The crate drives the interaction of an agent with an environment:
//! it owns the step/episode/epoch state machine, pushes transitions to a
//! replay buffer, triggers learning updates, evaluates the agent at
//! epoch boundaries and reports per-epoch statistics through pluggable
//! sinks. The learning algorithms themselves, the replay buffer
//! internals and the environments are collaborators behind the traits
//! [`Agent`], [`ReplayBufferBase`] and [`Env`].
//!
//! Recurrent agents, which carry hidden state across the steps of an
//! episode, are trained with a live/learning instance pair; see
//! [`RecurrentAgent`] and [`Trainer::train_recurrent`].
pub mod error;
pub mod record;
pub mod replay_buffer;
pub mod util;

mod base;
pub use base::{
    Act, Agent, Configurable, Env, ExperienceBufferBase, Info, Obs, Policy, RecurrentAgent,
    ReplayBufferBase, Step, Transition,
};

mod evaluator;
pub use evaluator::{run_episode, DefaultEvaluator, EvalReport, Evaluator};

mod trainer;
pub use trainer::{
    EpochStats, FeedforwardDriver, PolicyDriver, RecurrentDriver, ReturnTransform, Trainer,
    TrainerConfig,
};
