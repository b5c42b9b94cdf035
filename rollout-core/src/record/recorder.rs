use super::Record;

/// Writes records to an output destination.
pub trait Recorder {
    /// Write a record to the [`Recorder`].
    fn write(&mut self, record: Record);

    /// Flush buffered output, if the destination buffers any.
    fn flush(&mut self) {}
}
