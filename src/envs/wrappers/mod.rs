//! Environment wrappers
mod history;

pub use history::{
    expand as expand_bounds, History, HistoryBuffer, HistoryConfig, HistoryEnvError, HistoryError,
    StackedBounds, Stream, WithHistory,
};

use serde::{Deserialize, Serialize};

/// Wraps an environment, producing a new environment.
///
/// Implemented by wrapper configurations.
pub trait EnvWrapper<E> {
    type Wrapped;
    type Error;

    /// Wrap an environment.
    ///
    /// Fails if the environment structure is incompatible with the wrapper.
    fn wrap(&self, env: E) -> Result<Self::Wrapped, Self::Error>;
}

/// A basic wrapped object.
///
/// Consists of the inner object and the wrapper state.
///
/// # Implementation
/// To implement a wrapper type, define `struct MyWrapper` and implement
/// `impl<T: Environment> Environment for Wrapped<T, MyWrapper>` and
/// `impl<T: EnvStructure> EnvStructure for Wrapped<T, MyWrapper>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wrapped<T, W> {
    /// Wrapped object
    pub inner: T,
    /// The wrapper
    pub wrapper: W,
}

impl<T, W> Wrapped<T, W> {
    pub const fn new(inner: T, wrapper: W) -> Self {
        Self { inner, wrapper }
    }

    /// Unwrap, returning the inner object.
    #[allow(clippy::missing_const_for_fn)] // false positive; destructor of W
    pub fn into_inner(self) -> T {
        self.inner
    }
}
