//! Spaces: sets of elements with structure
mod box_space;
mod dynamic;
mod index;
#[cfg(test)]
pub mod testing;

pub use box_space::{BoxSpace, BoxSpaceError};
pub use dynamic::DynSpace;
pub use index::IndexSpace;

use rand::distributions::Distribution;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// A mathematical space
pub trait Space: BaseSpace + Distribution<<Self as Space>::Element> {
    type Element;

    /// Check if the space contains a particular value
    fn contains(&self, value: &Self::Element) -> bool;
}

/// The kind of a space, as reported at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    /// Continuous box in `R^n`.
    Box,
    /// Finite set of indices.
    Index,
}

impl Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Box => write!(f, "box"),
            Self::Index => write!(f, "index"),
        }
    }
}

/// An object-safe base description of a mathematical space.
pub trait BaseSpace: Display + Debug {
    /// The runtime kind of this space.
    fn kind(&self) -> SpaceKind;

    /// Per-component bounds, if this is a continuous box space.
    fn box_bounds(&self) -> Option<&BoxSpace> {
        None
    }
}
