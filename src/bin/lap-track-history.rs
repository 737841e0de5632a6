//! Drive the lap track at a fixed throttle through a history wrapper and log lap times.
//!
//! Usage: `lap-track-history [TENSORBOARD_LOG_DIR]`
//!
//! Lap times are displayed on stdout unless a tensorboard log directory is given.
use history_stack::envs::{EnvWrapper, HistoryConfig, LapTrackConfig};
use history_stack::logging::{DisplayLogger, LapTimeLogger, StatsLogger, TensorBoardLogger};
use history_stack::{EnvStructure, Environment, RLError};
use ndarray::array;
use std::env;

fn main() -> Result<(), RLError> {
    let env_config = LapTrackConfig::default();
    let history_config = HistoryConfig::default();
    let num_episodes = 3;
    let throttle = array![0.8];

    let logger: Box<dyn StatsLogger> = match env::args_os().nth(1) {
        Some(log_dir) => Box::new(TensorBoardLogger::new(log_dir)),
        None => Box::new(DisplayLogger::default()),
    };
    let mut lap_logger = LapTimeLogger::new(logger);

    let mut env = history_config.wrap(env_config.build_env(0)?)?;
    println!("Environment:\n{:#?}", env_config);
    println!("Observation space: {}", env.observation_space());

    let mut global_step = 0;
    for _ in 0..num_episodes {
        env.reset()?;
        loop {
            let step = env.step(&throttle)?;
            global_step += 1;
            lap_logger.observe(&step.info, global_step)?;
            if step.episode_done {
                break;
            }
        }
    }
    println!("Completed {} laps in the last episode", lap_logger.last_lap_count());
    Ok(())
}
