//! Logging test utilities
use super::{LogError, StatsLogger};
use std::io;

/// Logger that records every logged scalar.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingLogger {
    /// `(name, value, step)` in the order logged.
    pub scalars: Vec<(String, f64, u64)>,
    /// Number of calls to `flush`.
    pub flushes: usize,
}

impl RecordingLogger {
    /// Recorded values with the given name.
    pub fn values(&self, name: &str) -> Vec<(f64, u64)> {
        self.scalars
            .iter()
            .filter(|(n, _, _)| n == name)
            .map(|&(_, value, step)| (value, step))
            .collect()
    }
}

impl StatsLogger for RecordingLogger {
    fn log_scalar(&mut self, name: &str, value: f64, step: u64) -> Result<(), LogError> {
        self.scalars.push((name.into(), value, step));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LogError> {
        self.flushes += 1;
        Ok(())
    }
}

/// Recording logger whose first `failures` flushes fail.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlakyLogger {
    pub inner: RecordingLogger,
    pub failures: usize,
}

impl FlakyLogger {
    pub fn new(failures: usize) -> Self {
        Self {
            inner: RecordingLogger::default(),
            failures,
        }
    }
}

impl StatsLogger for FlakyLogger {
    fn log_scalar(&mut self, name: &str, value: f64, step: u64) -> Result<(), LogError> {
        self.inner.log_scalar(name, value, step)
    }

    fn flush(&mut self) -> Result<(), LogError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(io::Error::new(io::ErrorKind::Other, "flush failed").into());
        }
        self.inner.flush()
    }
}
