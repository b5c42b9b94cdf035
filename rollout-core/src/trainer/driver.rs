//! Coupling of action selection and learning updates.
//!
//! The trainer does not branch on concrete policy types. It drives a
//! [`PolicyDriver`], of which there are exactly two implementations: one
//! for feedforward (stateless) agents, where acting and learning share a
//! single instance, and one for recurrent agents, where a live instance
//! acts while a learning instance receives updates, reconciled at
//! episode boundaries.
use super::super::{Agent, Env, RecurrentAgent, ReplayBufferBase};
use crate::record::Record;

/// Couples the acting and the learning side of one agent during training.
pub trait PolicyDriver<E: Env, R: ReplayBufferBase> {
    /// The concrete agent type driven.
    type Agent: Agent<E, R> + Clone;

    /// Samples an action from the acting (live) instance.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;

    /// Performs one learning update on the learning instance.
    fn update(&mut self, batch: R::Batch) -> Record;

    /// Reconciles the acting instance at an episode boundary.
    fn finish_episode(&mut self);

    /// A copy of the learning instance prepared for evaluation:
    /// evaluation mode, and a cleared hidden state where applicable.
    fn eval_agent(&self) -> Self::Agent;

    /// The learning instance, e.g. for persisting its parameters.
    fn agent(&self) -> &Self::Agent;
}

/// Driver of feedforward agents: one instance acts and learns.
pub struct FeedforwardDriver<'a, A> {
    agent: &'a mut A,
}

impl<'a, A> FeedforwardDriver<'a, A> {
    /// Wraps the agent. The caller switches it to training mode.
    pub fn new(agent: &'a mut A) -> Self {
        Self { agent }
    }
}

impl<'a, E, R, A> PolicyDriver<E, R> for FeedforwardDriver<'a, A>
where
    E: Env,
    R: ReplayBufferBase,
    A: Agent<E, R> + Clone,
{
    type Agent = A;

    fn sample(&mut self, obs: &E::Obs) -> E::Act {
        self.agent.sample(obs)
    }

    fn update(&mut self, batch: R::Batch) -> Record {
        self.agent.update(batch)
    }

    fn finish_episode(&mut self) {}

    fn eval_agent(&self) -> Self::Agent {
        let mut agent = self.agent.clone();
        agent.eval();
        agent
    }

    fn agent(&self) -> &Self::Agent {
        &*self.agent
    }
}

/// Driver of recurrent agents: a live instance acts, a learning instance
/// learns.
///
/// The live instance is cloned from the learning instance up front and
/// stays frozen within an episode, so that its hidden state remains
/// coherent with the parameters that produced it. At every episode
/// boundary [`RecurrentAgent::sync_params`] carries the accumulated
/// updates over to the live instance and its hidden state is reset. The
/// parameter copy leaves non-parameter state of the live instance, such
/// as exploration-noise schedules, untouched.
pub struct RecurrentDriver<'a, A> {
    live: A,
    learner: &'a mut A,
}

impl<'a, A: RecurrentAgent + Clone> RecurrentDriver<'a, A> {
    /// Wraps the learning agent and clones the live instance from it.
    ///
    /// The caller switches the learning agent to training mode before
    /// wrapping it; the live instance inherits the mode through the
    /// clone and starts its first episode with a cleared hidden state.
    pub fn new(learner: &'a mut A) -> Self {
        let mut live = learner.clone();
        live.reset_hidden_state();
        Self { live, learner }
    }

    /// The acting instance.
    pub fn live(&self) -> &A {
        &self.live
    }
}

impl<'a, E, R, A> PolicyDriver<E, R> for RecurrentDriver<'a, A>
where
    E: Env,
    R: ReplayBufferBase,
    A: Agent<E, R> + RecurrentAgent + Clone,
{
    type Agent = A;

    fn sample(&mut self, obs: &E::Obs) -> E::Act {
        self.live.sample(obs)
    }

    fn update(&mut self, batch: R::Batch) -> Record {
        self.learner.update(batch)
    }

    fn finish_episode(&mut self) {
        self.live.sync_params(&*self.learner);
        self.live.reset_hidden_state();
    }

    fn eval_agent(&self) -> Self::Agent {
        let mut agent = self.learner.clone();
        agent.reset_hidden_state();
        agent.eval();
        agent
    }

    fn agent(&self) -> &Self::Agent {
        &*self.learner
    }
}
