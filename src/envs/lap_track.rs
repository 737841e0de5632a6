use super::{Action, EnvStructure, Environment, Observation, Step};
use crate::logging::LapCounter;
use crate::spaces::{BoxSpace, BoxSpaceError};
use ndarray::array;
use rand::distributions::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use thiserror::Error;

/// Configuration for the [`LapTrack`] environment.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapTrackConfig {
    /// Length of one lap.
    pub track_length: f64,
    /// Maximum forward speed.
    pub max_speed: f64,
    /// Change in speed per unit time at full throttle.
    pub acceleration: f64,
    /// Simulated time per step.
    pub time_step: f64,
    /// Maximum number of steps per episode.
    pub max_steps_per_episode: u64,
    pub discount_factor: f64,
}

impl Default for LapTrackConfig {
    fn default() -> Self {
        Self {
            track_length: 100.0,
            max_speed: 10.0,
            acceleration: 2.0,
            time_step: 0.1,
            max_steps_per_episode: 1000,
            discount_factor: 0.99,
        }
    }
}

impl LapTrackConfig {
    /// Build a [`LapTrack`] environment with the given random seed.
    pub fn build_env(&self, seed: u64) -> Result<LapTrack, LapTrackError> {
        LapTrack::new(*self, seed)
    }

    fn is_valid(&self) -> bool {
        self.track_length > 0.0
            && self.max_speed > 0.0
            && self.acceleration >= 0.0
            && self.time_step > 0.0
            // At most one finish line crossing per step
            && self.max_speed * self.time_step < self.track_length
            && (0.0..=1.0).contains(&self.discount_factor)
    }
}

/// Lap Track environment
///
/// A car drives forward around a circular track.
/// * The observation is `[cos θ, sin θ, speed]` where `θ` is the angular position on the track.
/// * The action is `[throttle]` in `[-1, 1]`; out-of-range values are clamped.
/// * The reward is the fraction of a lap covered on that step.
/// * Episodes start on the finish line at a small random speed and end after
///     `max_steps_per_episode` steps.
///
/// Lap times are reported in the step info whenever the car crosses the finish line.
#[derive(Debug, Clone)]
pub struct LapTrack {
    config: LapTrackConfig,
    observation_space: BoxSpace,
    action_space: BoxSpace,
    rng: StdRng,
    state: Option<TrackState>,
}

impl LapTrack {
    pub fn new(config: LapTrackConfig, seed: u64) -> Result<Self, LapTrackError> {
        if !config.is_valid() {
            return Err(LapTrackError::InvalidConfig);
        }
        Ok(Self {
            config,
            observation_space: BoxSpace::new(
                array![-1.0, -1.0, 0.0],
                array![1.0, 1.0, config.max_speed],
            )?,
            action_space: BoxSpace::uniform(1, -1.0, 1.0)?,
            rng: StdRng::seed_from_u64(seed),
            state: None,
        })
    }

    fn observe(&self, state: &TrackState) -> Observation<Self> {
        let angle = TAU * state.position / self.config.track_length;
        array![angle.cos(), angle.sin(), state.speed]
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
struct TrackState {
    /// Distance past the finish line, in `[0, track_length)`.
    position: f64,
    speed: f64,
    steps: u64,
    elapsed: f64,
    /// Time at which the current lap started.
    lap_start: f64,
    info: LapInfo,
}

/// Lap timing info reported on every [`LapTrack`] step.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapInfo {
    /// Number of laps completed this episode.
    pub lap_count: u64,
    /// Duration of the most recently completed lap; `0` before the first lap.
    pub last_lap_time: f64,
}

impl LapCounter for LapInfo {
    fn lap_count(&self) -> u64 {
        self.lap_count
    }
    fn last_lap_time(&self) -> f64 {
        self.last_lap_time
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapTrackError {
    #[error("invalid lap track configuration")]
    InvalidConfig,
    #[error("invalid space bounds")]
    Space(#[from] BoxSpaceError),
    #[error("action must be a single finite throttle value")]
    InvalidAction,
    #[error("step called before reset")]
    NotReset,
}

impl EnvStructure for LapTrack {
    type ObservationSpace = BoxSpace;
    type ActionSpace = BoxSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        self.observation_space.clone()
    }

    fn action_space(&self) -> Self::ActionSpace {
        self.action_space.clone()
    }

    fn reward_range(&self) -> (f64, f64) {
        let max_distance = self.config.max_speed * self.config.time_step;
        (0.0, max_distance / self.config.track_length)
    }

    fn discount_factor(&self) -> f64 {
        self.config.discount_factor
    }
}

impl Environment for LapTrack {
    type Info = LapInfo;
    type Error = LapTrackError;

    fn reset(&mut self) -> Result<Observation<Self>, Self::Error> {
        let speed =
            Uniform::new_inclusive(0.0, 0.1 * self.config.max_speed).sample(&mut self.rng);
        let state = TrackState {
            speed,
            ..TrackState::default()
        };
        let observation = self.observe(&state);
        self.state = Some(state);
        Ok(observation)
    }

    fn step(
        &mut self,
        action: &Action<Self>,
    ) -> Result<Step<Observation<Self>, Self::Info>, Self::Error> {
        let throttle = match action.as_slice() {
            Some(&[throttle]) if throttle.is_finite() => throttle.clamp(-1.0, 1.0),
            _ => return Err(LapTrackError::InvalidAction),
        };
        let mut state = self.state.ok_or(LapTrackError::NotReset)?;
        let config = &self.config;

        state.speed = (state.speed + throttle * config.acceleration * config.time_step)
            .clamp(0.0, config.max_speed);
        let distance = state.speed * config.time_step;
        state.position += distance;
        state.elapsed += config.time_step;
        state.steps += 1;

        if state.position >= config.track_length {
            state.position -= config.track_length;
            // Interpolate the time at which the finish line was crossed
            let crossed_at = state.elapsed - state.position / state.speed;
            state.info.lap_count += 1;
            state.info.last_lap_time = crossed_at - state.lap_start;
            state.lap_start = crossed_at;
        }

        let reward = distance / config.track_length;
        let episode_done = state.steps >= config.max_steps_per_episode;
        let observation = self.observe(&state);
        self.state = Some(state);
        Ok(Step::new(observation, reward, episode_done, state.info))
    }
}
