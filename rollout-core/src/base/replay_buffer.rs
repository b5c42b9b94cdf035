//! Replay buffer interface.
//!
//! The transition store is an opaque sequential collaborator of the
//! trainer: it accepts pushed transitions, decides on its own when it
//! holds enough of them to produce batches, and yields sampled batches.
use anyhow::Result;

/// Interface for buffers that store experiences from environments.
pub trait ExperienceBufferBase {
    /// Items stored in the buffer.
    type Item;

    /// Pushes a new experience into the buffer.
    fn push(&mut self, tr: Self::Item) -> Result<()>;

    /// The number of experiences currently stored.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer stores no experience.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interface for replay buffers that generate batches for training.
///
/// The batch size is the buffer's own concern; [`ReplayBufferBase::sample`]
/// takes no size argument. [`ReplayBufferBase::ready_to_sample`] is a
/// precondition check, not a wait: the trainer skips learning updates
/// until the buffer reports readiness, so sampling an unready buffer is
/// avoided by construction.
pub trait ReplayBufferBase {
    /// Configuration of the buffer.
    type Config: Clone;

    /// Batches yielded for learning updates.
    type Batch;

    /// Builds a replay buffer from the given configuration.
    fn build(config: &Self::Config) -> Self;

    /// Whether the buffer holds enough experiences to yield a batch.
    fn ready_to_sample(&self) -> bool;

    /// Samples a batch of experiences.
    fn sample(&mut self) -> Result<Self::Batch>;
}
