//! Capability interface of recurrent (stateful) agents.

/// An agent carrying hidden state across the steps of an episode.
///
/// Recurrent agents should not be updated while they are acting in an
/// episode, since an update would change how past hidden states are
/// interpreted. The trainer therefore keeps two instances: a live one
/// used for action selection and frozen within an episode, and a
/// learning one receiving gradient updates continuously. At every
/// episode boundary the live instance is brought up to date with
/// [`RecurrentAgent::sync_params`] and its hidden state is cleared with
/// [`RecurrentAgent::reset_hidden_state`].
pub trait RecurrentAgent {
    /// Clears the hidden state carried across steps within an episode.
    fn reset_hidden_state(&mut self);

    /// Overwrites the learnable parameters of `self` with those of `other`.
    ///
    /// Only learnable parameters are copied. Mutable state that is not a
    /// parameter, such as the state of an exploration-noise schedule,
    /// must be left untouched on `self`.
    fn sync_params(&mut self, other: &Self);
}
