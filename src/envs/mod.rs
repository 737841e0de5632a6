//! Reinforcement learning environments
mod lap_track;
#[cfg(test)]
pub mod testing;
pub mod wrappers;

pub use lap_track::{LapInfo, LapTrack, LapTrackConfig, LapTrackError};
pub use wrappers::{
    expand_bounds, EnvWrapper, History, HistoryBuffer, HistoryConfig, HistoryEnvError,
    HistoryError, StackedBounds, Stream, WithHistory, Wrapped,
};

use crate::spaces::Space;
use serde::{Deserialize, Serialize};

/// The external structure of a reinforcement learning environment.
pub trait EnvStructure {
    type ObservationSpace: Space;
    type ActionSpace: Space;

    /// Space containing all possible observations.
    ///
    /// This is not required to be tight:
    /// the space may contain elements that can never be produced as a state observation.
    fn observation_space(&self) -> Self::ObservationSpace;

    /// The space of all possible actions.
    ///
    /// Every element in this space must be a valid action.
    fn action_space(&self) -> Self::ActionSpace;

    /// A lower and upper bound on possible reward values.
    ///
    /// These bounds are not required to be tight but ideally will be as tight as possible.
    fn reward_range(&self) -> (f64, f64);

    /// A discount factor applied to future rewards.
    ///
    /// A value between `0` and `1`, inclusive.
    fn discount_factor(&self) -> f64;
}

impl<E: EnvStructure + ?Sized> EnvStructure for Box<E> {
    type ObservationSpace = E::ObservationSpace;
    type ActionSpace = E::ActionSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        E::observation_space(self)
    }
    fn action_space(&self) -> Self::ActionSpace {
        E::action_space(self)
    }
    fn reward_range(&self) -> (f64, f64) {
        E::reward_range(self)
    }
    fn discount_factor(&self) -> f64 {
        E::discount_factor(self)
    }
}

impl<E: EnvStructure + ?Sized> EnvStructure for &mut E {
    type ObservationSpace = E::ObservationSpace;
    type ActionSpace = E::ActionSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        E::observation_space(self)
    }
    fn action_space(&self) -> Self::ActionSpace {
        E::action_space(self)
    }
    fn reward_range(&self) -> (f64, f64) {
        E::reward_range(self)
    }
    fn discount_factor(&self) -> f64 {
        E::discount_factor(self)
    }
}

/// Observation type of an environment.
pub type Observation<E> = <<E as EnvStructure>::ObservationSpace as Space>::Element;
/// Action type of an environment.
pub type Action<E> = <<E as EnvStructure>::ActionSpace as Space>::Element;

/// The outcome of a single environment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<O, I = ()> {
    /// Observation of the resulting state.
    pub observation: O,
    /// The reward value for this transition.
    pub reward: f64,
    /// Whether this step ends the episode.
    pub episode_done: bool,
    /// Auxiliary per-step information; not part of the observation.
    pub info: I,
}

impl<O, I> Step<O, I> {
    pub const fn new(observation: O, reward: f64, episode_done: bool, info: I) -> Self {
        Self {
            observation,
            reward,
            episode_done,
            info,
        }
    }

    /// Replace the observation, keeping the reward, episode flag and info unchanged.
    pub fn map_observation<U, F: FnOnce(O) -> U>(self, f: F) -> Step<U, I> {
        Step {
            observation: f(self.observation),
            reward: self.reward,
            episode_done: self.episode_done,
            info: self.info,
        }
    }
}

/// A reinforcement learning environment with internal state.
///
/// Calls must be sequential: `reset` starts an episode and `step` advances it.
pub trait Environment: EnvStructure {
    /// Auxiliary information returned with every step.
    type Info;
    /// Error produced by a failed `reset` or `step`.
    type Error: std::error::Error + 'static;

    /// Reset the environment to an initial state.
    ///
    /// Must be called before each new episode.
    ///
    /// # Returns
    /// An observation of the initial state.
    fn reset(&mut self) -> Result<Observation<Self>, Self::Error>;

    /// Take a step in the environment.
    ///
    /// Fails if the environment has not been initialized with `reset()`.
    fn step(
        &mut self,
        action: &Action<Self>,
    ) -> Result<Step<Observation<Self>, Self::Info>, Self::Error>;
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    type Info = E::Info;
    type Error = E::Error;

    fn reset(&mut self) -> Result<Observation<Self>, Self::Error> {
        E::reset(self)
    }

    fn step(
        &mut self,
        action: &Action<Self>,
    ) -> Result<Step<Observation<Self>, Self::Info>, Self::Error> {
        E::step(self, action)
    }
}

impl<E: Environment + ?Sized> Environment for &mut E {
    type Info = E::Info;
    type Error = E::Error;

    fn reset(&mut self) -> Result<Observation<Self>, Self::Error> {
        E::reset(self)
    }

    fn step(
        &mut self,
        action: &Action<Self>,
    ) -> Result<Step<Observation<Self>, Self::Info>, Self::Error> {
        E::step(self, action)
    }
}
