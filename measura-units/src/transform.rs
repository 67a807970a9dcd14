//! Affine transforms between a primary unit and one of its minors

use measura_core::{ConfigError, EPSILON};

/// `forward(x) = factor * x + offset`, `backward(y) = (y - offset) / factor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    factor: f64,
    /// Cached `1 / factor` so `backward` multiplies instead of dividing
    reciprocal: f64,
    offset: f64,
}

impl Affine {
    /// Create an affine map, rejecting factors too close to zero
    pub fn new(factor: f64, offset: f64) -> Result<Self, ConfigError> {
        if factor.is_nan() || factor.abs() < EPSILON {
            return Err(ConfigError::FactorTooSmall { factor, epsilon: EPSILON });
        }

        Ok(Affine {
            factor,
            reciprocal: 1.0 / factor,
            offset,
        })
    }

    /// Create a proportional map (no offset)
    pub fn scale(factor: f64) -> Result<Self, ConfigError> {
        Self::new(factor, 0.0)
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn forward(&self, value: f64) -> f64 {
        self.factor * value + self.offset
    }

    pub fn backward(&self, value: f64) -> f64 {
        (value - self.offset) * self.reciprocal
    }
}

/// Which way a declared affine map points relative to the primary unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `factor` is the number of primary units in one minor unit (1 lb = 453.592 g)
    MinorToPrimary,
    /// The affine map yields the minor value from the primary one (F = 1.8 C + 32)
    PrimaryToMinor,
}

/// Conversion between a primary unit's scale and a minor unit's scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    affine: Affine,
    orientation: Orientation,
}

impl Transform {
    pub fn new(factor: f64, offset: f64, orientation: Orientation) -> Result<Self, ConfigError> {
        Ok(Transform {
            affine: Affine::new(factor, offset)?,
            orientation,
        })
    }

    /// Primary value to minor value
    pub fn forward(&self, value: f64) -> f64 {
        match self.orientation {
            Orientation::PrimaryToMinor => self.affine.forward(value),
            Orientation::MinorToPrimary => self.affine.backward(value),
        }
    }

    /// Minor value to primary value
    pub fn backward(&self, value: f64) -> f64 {
        match self.orientation {
            Orientation::PrimaryToMinor => self.affine.backward(value),
            Orientation::MinorToPrimary => self.affine.forward(value),
        }
    }
}
