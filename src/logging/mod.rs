//! Logging statistics from simulation runs
mod display;
mod lap_time;
mod tensorboard;
#[cfg(test)]
pub mod testing;

pub use display::DisplayLogger;
pub use lap_time::{LapCounter, LapTimeLogger};
pub use tensorboard::TensorBoardLogger;

use std::io;
use thiserror::Error;

/// Log statistics from a simulation run.
pub trait StatsLogger {
    /// Log a scalar value.
    ///
    /// # Args
    /// * `name` - The name that identifies this value.
    /// * `value` - The value to log.
    /// * `step` - Global step count associated with the value.
    fn log_scalar(&mut self, name: &str, value: f64, step: u64) -> Result<(), LogError>;

    /// Write out any buffered values.
    fn flush(&mut self) -> Result<(), LogError>;
}

/// Logger that does nothing
impl StatsLogger for () {
    fn log_scalar(&mut self, _: &str, _: f64, _: u64) -> Result<(), LogError> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LogError> {
        Ok(())
    }
}

impl<L: StatsLogger + ?Sized> StatsLogger for Box<L> {
    fn log_scalar(&mut self, name: &str, value: f64, step: u64) -> Result<(), LogError> {
        L::log_scalar(self, name, value, step)
    }

    fn flush(&mut self) -> Result<(), LogError> {
        L::flush(self)
    }
}

impl<L: StatsLogger + ?Sized> StatsLogger for &mut L {
    fn log_scalar(&mut self, name: &str, value: f64, step: u64) -> Result<(), LogError> {
        L::log_scalar(self, name, value, step)
    }

    fn flush(&mut self) -> Result<(), LogError> {
        L::flush(self)
    }
}

/// Error logging a value.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("\"{name}\": non-finite value {value}")]
    NonFinite { name: String, value: f64 },
    #[error("error writing log output")]
    Io(#[from] io::Error),
}
