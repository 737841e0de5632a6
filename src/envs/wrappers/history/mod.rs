//! History-stacking environment wrapper
mod bounds;
mod buffer;

pub use bounds::{expand, StackedBounds};
pub use buffer::HistoryBuffer;

use super::{EnvWrapper, Wrapped};
use crate::envs::{Action, EnvStructure, Environment, Observation, Step};
use crate::spaces::{BaseSpace, BoxSpace, BoxSpaceError, Space, SpaceKind};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Configures a wrapper that stacks recent observations and actions into the observation.
///
/// The wrapped environment observes the concatenation of the last `horizon` observations
/// followed by the last `horizon` actions, each oldest first.
/// Slots not yet filled in the current episode are zero.
///
/// The inner environment must have box observation and action spaces.
/// The action space of the wrapped environment is the inner action space, unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Number of steps retained, including the current one.
    pub horizon: usize,
}

impl HistoryConfig {
    pub const fn new(horizon: usize) -> Self {
        Self { horizon }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { horizon: 2 }
    }
}

impl<E: EnvStructure> EnvWrapper<E> for HistoryConfig {
    type Wrapped = WithHistory<E>;
    type Error = HistoryError;

    fn wrap(&self, env: E) -> Result<Self::Wrapped, Self::Error> {
        let history = History::new(*self, &env.observation_space(), &env.action_space())?;
        Ok(Wrapped::new(env, history))
    }
}

/// Wrap an environment with a rolling observation-action history.
pub type WithHistory<E> = Wrapped<E, History>;

/// Which half of the history a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Observation,
    Action,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Observation => write!(f, "observation"),
            Self::Action => write!(f, "action"),
        }
    }
}

/// Error from the history wrapper.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("unsupported {kind} space: history requires a box space")]
    UnsupportedSpaceKind { kind: SpaceKind },
    #[error("{stream} width mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        stream: Stream,
        expected: usize,
        actual: usize,
    },
    #[error("step called before reset")]
    NotInitialized,
    #[error("history horizon must be at least 1")]
    InvalidHorizon,
    #[error("invalid stacked bounds")]
    InvalidBounds(#[from] BoxSpaceError),
}

/// Error from a [`WithHistory`] environment.
#[derive(Error, Debug)]
pub enum HistoryEnvError<E: StdError + 'static> {
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("inner environment error")]
    Inner(#[source] E),
}

/// Wrapper state: expanded bounds and the rolling history.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    bounds: StackedBounds,
    buffer: HistoryBuffer,
    initialized: bool,
}

impl History {
    /// Initialize history state for an environment with the given spaces.
    ///
    /// Fails with [`HistoryError::UnsupportedSpaceKind`] if either space is not a box.
    pub fn new(
        config: HistoryConfig,
        observation_space: &dyn BaseSpace,
        action_space: &dyn BaseSpace,
    ) -> Result<Self, HistoryError> {
        let observation_bounds = box_bounds(observation_space)?;
        let action_bounds = box_bounds(action_space)?;
        let buffer = HistoryBuffer::new(
            config.horizon,
            observation_bounds.width(),
            action_bounds.width(),
        )?;
        let bounds = StackedBounds::new(observation_bounds, action_bounds, config.horizon)?;
        Ok(Self {
            bounds,
            buffer,
            initialized: false,
        })
    }

    pub const fn horizon(&self) -> usize {
        self.buffer.horizon()
    }

    /// Expanded per-stream bounds and the stacked observation bounds.
    pub const fn bounds(&self) -> &StackedBounds {
        &self.bounds
    }

    pub const fn buffer(&self) -> &HistoryBuffer {
        &self.buffer
    }

    /// Whether `reset` has been called at least once.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }
}

fn box_bounds(space: &dyn BaseSpace) -> Result<&BoxSpace, HistoryError> {
    space
        .box_bounds()
        .ok_or_else(|| HistoryError::UnsupportedSpaceKind { kind: space.kind() })
}

impl<E: EnvStructure> EnvStructure for Wrapped<E, History> {
    type ObservationSpace = BoxSpace;
    type ActionSpace = E::ActionSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        self.wrapper.bounds.stacked().clone()
    }
    fn action_space(&self) -> Self::ActionSpace {
        self.inner.action_space()
    }
    fn reward_range(&self) -> (f64, f64) {
        self.inner.reward_range()
    }
    fn discount_factor(&self) -> f64 {
        self.inner.discount_factor()
    }
}

impl<E> Environment for Wrapped<E, History>
where
    E: Environment,
    E::ObservationSpace: Space<Element = Array1<f64>>,
    E::ActionSpace: Space<Element = Array1<f64>>,
{
    type Info = E::Info;
    type Error = HistoryEnvError<E::Error>;

    fn reset(&mut self) -> Result<Observation<Self>, Self::Error> {
        let observation = self.inner.reset().map_err(HistoryEnvError::Inner)?;
        self.wrapper.buffer.reset(observation.view())?;
        self.wrapper.initialized = true;
        Ok(self.wrapper.buffer.snapshot())
    }

    fn step(
        &mut self,
        action: &Action<Self>,
    ) -> Result<Step<Observation<Self>, Self::Info>, Self::Error> {
        if !self.wrapper.initialized {
            return Err(HistoryError::NotInitialized.into());
        }
        // Reject before stepping so that the inner environment and history stay in sync
        self.wrapper.buffer.check_action(action.view())?;

        let step = self.inner.step(action).map_err(HistoryEnvError::Inner)?;
        self.wrapper
            .buffer
            .push(step.observation.view(), action.view())?;
        let buffer = &self.wrapper.buffer;
        Ok(step.map_observation(|_| buffer.snapshot()))
    }
}
