//! Rolling observation-action history for reinforcement learning environments.
//!
//! [`HistoryConfig`](envs::HistoryConfig) wraps an environment so that each observation is the
//! concatenation of the most recent observations and actions.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::for_kv_map)] // part of warn(clippy::all), specifically style?
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)] // also triggered by macro expansions
pub mod envs;
mod error;
pub mod logging;
pub mod spaces;

pub use envs::{EnvStructure, Environment, Step};
pub use error::RLError;
