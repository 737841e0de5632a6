//! Tensorboard logger
use super::{LogError, StatsLogger};
use std::fmt;
use std::path::{Path, PathBuf};
use tensorboard_rs::summary_writer::SummaryWriter;

/// Logger that saves scalars to a tensorboard event file.
pub struct TensorBoardLogger {
    writer: SummaryWriter,
    log_dir: PathBuf,
}

impl fmt::Debug for TensorBoardLogger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TensorBoardLogger")
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl TensorBoardLogger {
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Self {
        let log_dir = log_dir.as_ref().to_path_buf();
        Self {
            writer: SummaryWriter::new(&log_dir),
            log_dir,
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

impl StatsLogger for TensorBoardLogger {
    fn log_scalar(&mut self, name: &str, value: f64, step: u64) -> Result<(), LogError> {
        if !value.is_finite() {
            return Err(LogError::NonFinite {
                name: name.into(),
                value,
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        self.writer.add_scalar(name, value as f32, step as usize);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LogError> {
        self.writer.flush();
        Ok(())
    }
}
