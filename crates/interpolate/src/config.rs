//! Configuration for IDW interpolation queries.

use crate::error::InterpolateError;

/// Fixed search radius in grid length units.
const DEFAULT_RADIUS: f64 = 20_000.0;

/// Minimum number of neighbors per output cell.
const DEFAULT_MIN_NEIGHBORS: usize = 5;

/// Configuration for an IDW interpolation query.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use swm_interpolate::IdwConfig;
///
/// let config = IdwConfig::new(2.0).with_radius(10_000.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct IdwConfig {
    /// Distance weighting exponent.
    power: f64,
    /// Fixed search radius in grid length units.
    radius: f64,
    /// Minimum neighbor count; the nearest stations fill the set when
    /// fewer report in-radius.
    min_neighbors: usize,
}

impl IdwConfig {
    /// Creates a new configuration with the given exponent.
    ///
    /// Defaults: `radius = 20_000.0`, `min_neighbors = 5`.
    pub fn new(power: f64) -> Self {
        Self {
            power,
            radius: DEFAULT_RADIUS,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
        }
    }

    /// Sets the fixed search radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the minimum neighbor count.
    pub fn with_min_neighbors(mut self, min_neighbors: usize) -> Self {
        self.min_neighbors = min_neighbors;
        self
    }

    /// Returns the distance weighting exponent.
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Returns the fixed search radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the minimum neighbor count.
    pub fn min_neighbors(&self) -> usize {
        self.min_neighbors
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the power is negative or non-finite, the
    /// radius is non-positive, or the minimum neighbor count is zero.
    pub fn validate(&self) -> Result<(), InterpolateError> {
        if !self.power.is_finite() || self.power < 0.0 {
            return Err(InterpolateError::InvalidPower { power: self.power });
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(InterpolateError::InvalidRadius {
                radius: self.radius,
            });
        }
        if self.min_neighbors == 0 {
            return Err(InterpolateError::InvalidMinNeighbors);
        }
        Ok(())
    }
}

impl Default for IdwConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}
