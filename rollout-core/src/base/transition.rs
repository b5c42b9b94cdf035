//! Transition.

/// A single environment transition, as pushed to the transition store.
///
/// `is_terminated` marks an environment-intrinsic end of the episode,
/// `is_truncated` an external time-limit cutoff. The trainer guarantees
/// that at most one of the two is set, and that `is_truncated` can only
/// be set on the step where the episode length reached the environment's
/// limit. Stores backing stateless agents are free to ignore
/// `is_truncated`; stores backing recurrent agents need it to delimit
/// stored episodes correctly.
#[derive(Clone, Debug)]
pub struct Transition<O, A> {
    /// Observation before the step, `o_t`.
    pub obs: O,

    /// Action applied, `a_t`.
    pub act: A,

    /// Reward, `r_t`.
    pub reward: f32,

    /// Observation after the step, `o_t+1`.
    pub next_obs: O,

    /// True environment-internal end of the episode.
    pub is_terminated: bool,

    /// External time-limit cutoff.
    pub is_truncated: bool,
}
