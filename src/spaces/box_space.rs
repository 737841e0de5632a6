//! `BoxSpace` definition
use super::{BaseSpace, Space, SpaceKind};
use ndarray::{Array1, ArrayView1};
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::{Exp1, StandardNormal};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A box in `R^n`: the Cartesian product of `n` closed intervals.
///
/// Elements are one-dimensional arrays of length `n` where component `i` lies within
/// `[low[i], high[i]]`. Bounds may be infinite but elements must be finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpace {
    low: Array1<f64>,
    high: Array1<f64>,
}

/// Invalid bounds for a [`BoxSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoxSpaceError {
    #[error("bound lengths differ: low has {low_len} components, high has {high_len}")]
    LengthMismatch { low_len: usize, high_len: usize },
    #[error("empty interval at component {index}: require low <= high")]
    EmptyInterval { index: usize },
}

impl BoxSpace {
    /// Create a box from per-component lower and upper bounds.
    pub fn new(low: Array1<f64>, high: Array1<f64>) -> Result<Self, BoxSpaceError> {
        if low.len() != high.len() {
            return Err(BoxSpaceError::LengthMismatch {
                low_len: low.len(),
                high_len: high.len(),
            });
        }
        // NaN bounds are treated as empty
        if let Some(index) = low
            .iter()
            .zip(&high)
            .position(|(l, h)| l.is_nan() || h.is_nan() || l > h)
        {
            return Err(BoxSpaceError::EmptyInterval { index });
        }
        Ok(Self { low, high })
    }

    /// A box of the given width with the same bounds on every component.
    pub fn uniform(width: usize, low: f64, high: f64) -> Result<Self, BoxSpaceError> {
        Self::new(Array1::from_elem(width, low), Array1::from_elem(width, high))
    }

    /// Lower bounds.
    pub fn low(&self) -> ArrayView1<f64> {
        self.low.view()
    }

    /// Upper bounds.
    pub fn high(&self) -> ArrayView1<f64> {
        self.high.view()
    }

    /// Number of components in each element.
    pub fn width(&self) -> usize {
        self.low.len()
    }
}

impl fmt::Display for BoxSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoxSpace({}, {})", self.low, self.high)
    }
}

impl BaseSpace for BoxSpace {
    fn kind(&self) -> SpaceKind {
        SpaceKind::Box
    }

    fn box_bounds(&self) -> Option<&Self> {
        Some(self)
    }
}

impl Space for BoxSpace {
    type Element = Array1<f64>;

    fn contains(&self, value: &Self::Element) -> bool {
        value.len() == self.width()
            && value
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(x, (l, h))| x.is_finite() && l <= x && x <= h)
    }
}

impl Distribution<Array1<f64>> for BoxSpace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(&low, &high)| sample_interval(low, high, &mut *rng))
            .collect()
    }
}

fn sample_interval<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    match (low.is_finite(), high.is_finite()) {
        (true, true) if (high - low).is_finite() => rng.gen_range(low..=high),
        (true, true) => {
            // Width overflows; step from low in two halves of the half-width
            let step = (high * 0.5 - low * 0.5) * rng.gen::<f64>();
            (low + step + step).min(high)
        }
        (true, false) => low + rng.sample::<f64, _>(Exp1),
        (false, true) => high - rng.sample::<f64, _>(Exp1),
        (false, false) => rng.sample(StandardNormal),
    }
}
