//! Generic uniform replay buffer.
use super::SimpleReplayBufferConfig;
use crate::{ExperienceBufferBase, ReplayBufferBase, Transition};
use anyhow::Result;
use std::fmt::Debug;

/// A bounded ring of transitions with uniform batch sampling.
///
/// Once the buffer is full, the oldest transitions are overwritten.
/// Batches are plain `Vec<Transition<O, A>>`s sampled uniformly with
/// replacement; the index generator is seeded through the configuration,
/// so a run's sampling sequence is reproducible.
pub struct SimpleReplayBuffer<O, A>
where
    O: Clone + Debug,
    A: Clone + Debug,
{
    capacity: usize,
    batch_size: usize,

    /// Write cursor into the ring.
    i: usize,

    transitions: Vec<Transition<O, A>>,
    rng: fastrand::Rng,
}

impl<O, A> ExperienceBufferBase for SimpleReplayBuffer<O, A>
where
    O: Clone + Debug,
    A: Clone + Debug,
{
    type Item = Transition<O, A>;

    fn push(&mut self, tr: Self::Item) -> Result<()> {
        if self.transitions.len() < self.capacity {
            self.transitions.push(tr);
        } else {
            self.transitions[self.i] = tr;
        }
        self.i = (self.i + 1) % self.capacity;
        Ok(())
    }

    fn len(&self) -> usize {
        self.transitions.len()
    }
}

impl<O, A> ReplayBufferBase for SimpleReplayBuffer<O, A>
where
    O: Clone + Debug,
    A: Clone + Debug,
{
    type Config = SimpleReplayBufferConfig;
    type Batch = Vec<Transition<O, A>>;

    fn build(config: &Self::Config) -> Self {
        Self {
            capacity: config.capacity,
            batch_size: config.batch_size,
            i: 0,
            transitions: Vec::with_capacity(config.capacity),
            rng: fastrand::Rng::with_seed(config.seed),
        }
    }

    fn ready_to_sample(&self) -> bool {
        self.transitions.len() >= self.batch_size
    }

    fn sample(&mut self) -> Result<Self::Batch> {
        let n = self.transitions.len();
        let batch = (0..self.batch_size)
            .map(|_| self.transitions[self.rng.usize(0..n)].clone())
            .collect();
        Ok(batch)
    }
}
