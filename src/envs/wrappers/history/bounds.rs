//! Bounds of the stacked observation space
use super::HistoryError;
use crate::spaces::BoxSpace;
use ndarray::{Array1, ArrayView1};

/// Repeat a pair of bound vectors `horizon` times.
///
/// The output has length `horizon * low.len()` and consists of `horizon` consecutive copies of
/// the input, one per history slot, so that it lines up with the
/// [`HistoryBuffer`](super::HistoryBuffer) layout.
pub fn expand(
    low: ArrayView1<f64>,
    high: ArrayView1<f64>,
    horizon: usize,
) -> (Array1<f64>, Array1<f64>) {
    (tile(low, horizon), tile(high, horizon))
}

fn tile(block: ArrayView1<f64>, horizon: usize) -> Array1<f64> {
    (0..horizon).flat_map(|_| block.iter().copied()).collect()
}

/// Bounds of a history-stacked observation space.
///
/// Holds the expanded bounds of each stream as well as their concatenation,
/// which is the observation space exposed by [`WithHistory`](super::WithHistory).
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBounds {
    observation: BoxSpace,
    action: BoxSpace,
    stacked: BoxSpace,
}

impl StackedBounds {
    pub fn new(
        observation_space: &BoxSpace,
        action_space: &BoxSpace,
        horizon: usize,
    ) -> Result<Self, HistoryError> {
        let (low_obs, high_obs) =
            expand(observation_space.low(), observation_space.high(), horizon);
        let (low_action, high_action) = expand(action_space.low(), action_space.high(), horizon);

        let low = low_obs.iter().chain(&low_action).copied().collect();
        let high = high_obs.iter().chain(&high_action).copied().collect();

        Ok(Self {
            observation: BoxSpace::new(low_obs, high_obs)?,
            action: BoxSpace::new(low_action, high_action)?,
            stacked: BoxSpace::new(low, high)?,
        })
    }

    /// Expanded bounds of the observation history.
    pub const fn observation(&self) -> &BoxSpace {
        &self.observation
    }

    /// Expanded bounds of the action history.
    ///
    /// Only describes the stored history; the action space of the wrapped environment is
    /// left as-is.
    pub const fn action(&self) -> &BoxSpace {
        &self.action
    }

    /// Observation history bounds followed by action history bounds.
    pub const fn stacked(&self) -> &BoxSpace {
        &self.stacked
    }
}
