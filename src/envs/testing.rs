//! Environment testing utilities
use super::{Action, EnvStructure, Environment, Observation, Step};
use crate::spaces::{BoxSpace, DynSpace, IndexSpace, Space};
use ndarray::{array, Array1};
use rand::prelude::*;
use thiserror::Error;

/// Run an environment with random actions and check that invariants are satisfied.
pub fn run_stateful<E: Environment>(env: &mut E, num_steps: u64, seed: u64) {
    let observation_space = env.observation_space();
    let action_space = env.action_space();
    let (min_reward, max_reward) = env.reward_range();
    let discount_factor = env.discount_factor();
    assert!(discount_factor >= 0.0);
    assert!(discount_factor <= 1.0);

    let mut rng = StdRng::seed_from_u64(seed);
    let observation = env.reset().unwrap();
    assert!(observation_space.contains(&observation));
    for _ in 0..num_steps {
        let action = action_space.sample(&mut rng);
        let step = env.step(&action).unwrap();
        assert!(step.reward >= min_reward);
        assert!(step.reward <= max_reward);
        assert!(observation_space.contains(&step.observation));
        if step.episode_done {
            let observation = env.reset().unwrap();
            assert!(observation_space.contains(&observation));
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestEnvError {
    #[error("step before reset")]
    NotReset,
}

/// Deterministic environment whose observations count the steps since reset.
///
/// The observation at step `t` is `[10t + 1, 10t + 2, ...]`, the reward is `t`
/// and the info is `t`. Episodes end after `episode_len` steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingEnv {
    pub observation_width: usize,
    pub action_width: usize,
    pub episode_len: u32,
    /// Total number of steps taken across episodes.
    pub steps_taken: u64,
    t: Option<u32>,
}

impl CountingEnv {
    pub const fn new(observation_width: usize, action_width: usize, episode_len: u32) -> Self {
        Self {
            observation_width,
            action_width,
            episode_len,
            steps_taken: 0,
            t: None,
        }
    }

    pub fn observation_at(width: usize, t: u32) -> Array1<f64> {
        (1..=width)
            .map(|i| f64::from(t) * 10.0 + i as f64)
            .collect()
    }

    /// Forget the current episode; the next step fails until `reset`.
    pub fn clear(&mut self) {
        self.t = None;
    }
}

impl EnvStructure for CountingEnv {
    type ObservationSpace = BoxSpace;
    type ActionSpace = BoxSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        BoxSpace::uniform(self.observation_width, 0.0, f64::INFINITY).unwrap()
    }
    fn action_space(&self) -> Self::ActionSpace {
        BoxSpace::uniform(self.action_width, -1.0, 1.0).unwrap()
    }
    fn reward_range(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }
    fn discount_factor(&self) -> f64 {
        1.0
    }
}

impl Environment for CountingEnv {
    type Info = u32;
    type Error = TestEnvError;

    fn reset(&mut self) -> Result<Observation<Self>, Self::Error> {
        self.t = Some(0);
        Ok(Self::observation_at(self.observation_width, 0))
    }

    fn step(
        &mut self,
        _action: &Action<Self>,
    ) -> Result<Step<Observation<Self>, Self::Info>, Self::Error> {
        let t = self.t.ok_or(TestEnvError::NotReset)? + 1;
        self.t = Some(t);
        self.steps_taken += 1;
        Ok(Step::new(
            Self::observation_at(self.observation_width, t),
            f64::from(t),
            t >= self.episode_len,
            t,
        ))
    }
}

/// Environment with a discrete (index) observation space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexObservationEnv;

impl EnvStructure for IndexObservationEnv {
    type ObservationSpace = DynSpace;
    type ActionSpace = BoxSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        IndexSpace::new(3).into()
    }
    fn action_space(&self) -> Self::ActionSpace {
        BoxSpace::uniform(1, -1.0, 1.0).unwrap()
    }
    fn reward_range(&self) -> (f64, f64) {
        (0.0, 0.0)
    }
    fn discount_factor(&self) -> f64 {
        1.0
    }
}

impl Environment for IndexObservationEnv {
    type Info = ();
    type Error = TestEnvError;

    fn reset(&mut self) -> Result<Observation<Self>, Self::Error> {
        Ok(array![0.0])
    }

    fn step(
        &mut self,
        _action: &Action<Self>,
    ) -> Result<Step<Observation<Self>, Self::Info>, Self::Error> {
        Ok(Step::new(array![1.0], 0.0, false, ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_counting() {
        run_stateful(&mut CountingEnv::new(3, 2, 7), 50, 0);
    }

    #[test]
    fn run_index_observation() {
        run_stateful(&mut IndexObservationEnv, 10, 1);
    }

    #[test]
    fn counting_step_before_reset() {
        let mut env = CountingEnv::new(1, 1, 5);
        assert_eq!(env.step(&array![0.0]), Err(TestEnvError::NotReset));
    }
}
