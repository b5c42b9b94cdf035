use super::{Record, Recorder};

/// Fans records out to a set of sinks.
///
/// Every sink receives a clone of the same record, so all destinations
/// see identical values for the same epoch. Sinks that only handle a
/// subset of the keys (e.g. a fixed tabular schema) select from the
/// record; none of them recomputes a value.
pub struct CompositeRecorder {
    sinks: Vec<Box<dyn Recorder>>,
}

impl CompositeRecorder {
    /// Constructs a recorder with no sinks attached.
    pub fn new() -> Self {
        Self { sinks: vec![] }
    }

    /// Attaches a sink.
    pub fn push(mut self, sink: Box<dyn Recorder>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl Default for CompositeRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder for CompositeRecorder {
    fn write(&mut self, record: Record) {
        for sink in self.sinks.iter_mut() {
            sink.write(record.clone());
        }
    }

    fn flush(&mut self) {
        for sink in self.sinks.iter_mut() {
            sink.flush();
        }
    }
}
