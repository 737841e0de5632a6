//! Rolling observation and action history
use super::{HistoryError, Stream};
use ndarray::{Array1, ArrayView1};

/// Fixed-capacity rolling history of observations and actions.
///
/// Each stream is stored as `horizon` consecutive slots of the stream width,
/// oldest first and newest last.
/// The two streams advance together on [`push`](Self::push) but are stored and shifted
/// independently.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBuffer {
    horizon: usize,
    observation_width: usize,
    action_width: usize,
    observations: Box<[f64]>,
    actions: Box<[f64]>,
}

impl HistoryBuffer {
    /// Create a zeroed buffer.
    ///
    /// # Args
    /// * `horizon` - Number of steps retained, including the current one. Must be positive.
    /// * `observation_width` - Number of components in each observation.
    /// * `action_width` - Number of components in each action.
    pub fn new(
        horizon: usize,
        observation_width: usize,
        action_width: usize,
    ) -> Result<Self, HistoryError> {
        if horizon == 0 {
            return Err(HistoryError::InvalidHorizon);
        }
        Ok(Self {
            horizon,
            observation_width,
            action_width,
            observations: vec![0.0; horizon * observation_width].into_boxed_slice(),
            actions: vec![0.0; horizon * action_width].into_boxed_slice(),
        })
    }

    pub const fn horizon(&self) -> usize {
        self.horizon
    }

    pub const fn observation_width(&self) -> usize {
        self.observation_width
    }

    pub const fn action_width(&self) -> usize {
        self.action_width
    }

    /// Stored observations; `horizon * observation_width` values.
    pub fn observation_history(&self) -> &[f64] {
        &self.observations
    }

    /// Stored actions; `horizon * action_width` values.
    pub fn action_history(&self) -> &[f64] {
        &self.actions
    }

    /// Clear the history and record the first observation of an episode.
    ///
    /// Everything is zero afterwards except the last observation slot.
    pub fn reset(&mut self, initial_observation: ArrayView1<f64>) -> Result<(), HistoryError> {
        self.check_observation(initial_observation)?;
        self.observations.fill(0.0);
        self.actions.fill(0.0);
        write_last(&mut self.observations, initial_observation);
        Ok(())
    }

    /// Append an observation and the action that led to it, discarding the oldest entries.
    ///
    /// On error the buffer is left unchanged.
    pub fn push(
        &mut self,
        observation: ArrayView1<f64>,
        action: ArrayView1<f64>,
    ) -> Result<(), HistoryError> {
        self.check_observation(observation)?;
        self.check_action(action)?;
        shift_in(&mut self.observations, observation);
        shift_in(&mut self.actions, action);
        Ok(())
    }

    /// The observation history followed by the action history.
    pub fn snapshot(&self) -> Array1<f64> {
        self.observations
            .iter()
            .chain(self.actions.iter())
            .copied()
            .collect()
    }

    /// Check that an observation has the configured width.
    pub fn check_observation(&self, observation: ArrayView1<f64>) -> Result<(), HistoryError> {
        check_width(Stream::Observation, self.observation_width, observation.len())
    }

    /// Check that an action has the configured width.
    pub fn check_action(&self, action: ArrayView1<f64>) -> Result<(), HistoryError> {
        check_width(Stream::Action, self.action_width, action.len())
    }
}

fn check_width(stream: Stream, expected: usize, actual: usize) -> Result<(), HistoryError> {
    if expected == actual {
        Ok(())
    } else {
        Err(HistoryError::ShapeMismatch {
            stream,
            expected,
            actual,
        })
    }
}

/// Shift `history` toward index 0 by one block and write `block` into the freed tail.
fn shift_in(history: &mut [f64], block: ArrayView1<f64>) {
    history.copy_within(block.len().., 0);
    write_last(history, block);
}

fn write_last(history: &mut [f64], block: ArrayView1<f64>) {
    let start = history.len() - block.len();
    for (dst, src) in history[start..].iter_mut().zip(block) {
        *dst = *src;
    }
}
