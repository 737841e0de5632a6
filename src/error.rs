//! Error type
use crate::envs::{HistoryEnvError, HistoryError, LapTrackError};
use crate::logging::LogError;
use std::error::Error as StdError;
use thiserror::Error;

/// Error from the history-stack crate.
#[derive(Error, Debug)]
pub enum RLError {
    #[error("error in history wrapper")]
    History(#[from] HistoryError),
    #[error("error in lap track environment")]
    LapTrack(#[from] LapTrackError),
    #[error("error logging statistics")]
    Log(#[from] LogError),
}

impl<E> From<HistoryEnvError<E>> for RLError
where
    E: StdError + Into<Self> + 'static,
{
    fn from(error: HistoryEnvError<E>) -> Self {
        match error {
            HistoryEnvError::History(e) => e.into(),
            HistoryEnvError::Inner(e) => e.into(),
        }
    }
}
