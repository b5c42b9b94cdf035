//! A generic implementation of the transition store.
//!
//! [`SimpleReplayBuffer`] keeps transitions of arbitrary observation and
//! action types in a bounded ring and samples batches uniformly. It is a
//! stand-in for algorithm-specific stores; anything implementing
//! [`ReplayBufferBase`](crate::ReplayBufferBase) can be used in its
//! place.
mod base;
mod config;

pub use base::SimpleReplayBuffer;
pub use config::SimpleReplayBufferConfig;
