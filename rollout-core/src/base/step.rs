//! Environment step.
use super::Env;

/// Additional information attached to a [`Step`].
///
/// The trait exposes the time-limit flag written by the environment's own
/// limiting wrapper: [`Info::truncated_at_limit`] must return `Some(_)`
/// exactly on the step where the running episode length reaches
/// [`Env::max_episode_steps`], and `None` on every other step. A missing
/// flag at the limit breaks the environment contract and aborts training.
pub trait Info {
    /// Time-limit flag of the current step, present only at the limit.
    fn truncated_at_limit(&self) -> Option<bool>;
}

impl Info for () {
    fn truncated_at_limit(&self) -> Option<bool> {
        None
    }
}

/// Represents an action, observation and reward tuple `(a_t, o_t+1, r_t)`
/// with some additional information.
///
/// An environment emits a [`Step`] object at every interaction step.
/// The step carries the environment-intrinsic termination flag only;
/// whether the episode was cut off by the time limit is derived by the
/// trainer from the running episode length and [`Info`].
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation at the next step.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if the episode was terminated by the environment.
    pub is_terminated: bool,

    /// Information defined by the environment.
    pub info: E::Info,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: E::Obs,
        act: E::Act,
        reward: f32,
        is_terminated: bool,
        info: E::Info,
    ) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            info,
        }
    }

    #[inline]
    /// Terminated or cut off by the environment's own time limit.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.info.truncated_at_limit() == Some(true)
    }
}
