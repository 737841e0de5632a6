//! Command-line logger
use super::{LogError, StatsLogger};
use std::io::{self, Write};
use yansi::Paint;

/// Logger that displays scalars as they are logged.
///
/// Lines are buffered and written to the output on [`flush`](StatsLogger::flush).
#[derive(Debug)]
pub struct DisplayLogger<W: Write = io::Stdout> {
    out: W,
    buffer: Vec<String>,
}

impl Default for DisplayLogger {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DisplayLogger<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            buffer: Vec::new(),
        }
    }

    #[allow(clippy::missing_const_for_fn)] // false positive; destructor of buffer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StatsLogger for DisplayLogger<W> {
    fn log_scalar(&mut self, name: &str, value: f64, step: u64) -> Result<(), LogError> {
        self.buffer.push(format!(
            "{:<24} {:>8} {}",
            Paint::fixed(35, name),
            Paint::fixed(111, step),
            Paint::fixed(253, value)
        ));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LogError> {
        for line in self.buffer.drain(..) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
