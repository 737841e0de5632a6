//! `DynSpace` definition
use super::{BaseSpace, BoxSpace, IndexSpace, Space, SpaceKind};
use ndarray::{array, Array1};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A space whose kind is only known at runtime.
///
/// Elements of every kind are flat `f64` arrays.
/// An index is represented as an array with a single component holding the index value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DynSpace {
    Box(BoxSpace),
    Index(IndexSpace),
}

impl From<BoxSpace> for DynSpace {
    fn from(space: BoxSpace) -> Self {
        Self::Box(space)
    }
}

impl From<IndexSpace> for DynSpace {
    fn from(space: IndexSpace) -> Self {
        Self::Index(space)
    }
}

impl fmt::Display for DynSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Box(space) => fmt::Display::fmt(space, f),
            Self::Index(space) => fmt::Display::fmt(space, f),
        }
    }
}

impl BaseSpace for DynSpace {
    fn kind(&self) -> SpaceKind {
        match self {
            Self::Box(space) => space.kind(),
            Self::Index(space) => space.kind(),
        }
    }

    fn box_bounds(&self) -> Option<&BoxSpace> {
        match self {
            Self::Box(space) => Some(space),
            Self::Index(_) => None,
        }
    }
}

impl Space for DynSpace {
    type Element = Array1<f64>;

    fn contains(&self, value: &Self::Element) -> bool {
        match self {
            Self::Box(space) => space.contains(value),
            Self::Index(space) => match value.as_slice() {
                Some(&[x]) => x >= 0.0 && x.fract() == 0.0 && x < space.size as f64,
                _ => false,
            },
        }
    }
}

impl Distribution<Array1<f64>> for DynSpace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        match self {
            Self::Box(space) => space.sample(rng),
            Self::Index(space) => array![space.sample(rng) as f64],
        }
    }
}
