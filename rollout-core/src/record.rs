//! Types and traits for recording training metrics.
//!
//! * [`Record`] - a container of key-value pairs produced once per
//!   learning update (algorithm statistics) and once per epoch
//!   (aggregated progress).
//! * [`RecordValue`] - the values storable in a record.
//! * [`Recorder`] - the sink contract; one implementor per output
//!   destination.
//! * [`CompositeRecorder`] - fans a record out to several sinks, all of
//!   which receive the identical values.
//! * [`ConsoleRecorder`] - human-readable summaries through the `log`
//!   facade.
//! * [`BufferedRecorder`] - keeps records in memory, for evaluation
//!   traces and tests.
//! * [`NullRecorder`] - discards everything.
//!
//! The epoch reporter computes every aggregate exactly once and hands
//! the finished record to a single [`Recorder`]; sinks must not re-derive
//! any number from other fields.
mod base;
mod buffered_recorder;
mod composite;
mod console;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use composite::CompositeRecorder;
pub use console::ConsoleRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
