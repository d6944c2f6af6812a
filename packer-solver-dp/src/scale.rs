//! Conversion of real weights and costs into integer table units.
//!
//! Scaled values are rounded to the nearest integer. Weights finer than
//! `1 / weight_factor` lose precision; that trade-off bounds the table size
//! and is accepted behaviour.

use thiserror::Error;

/// Integer multipliers applied to weights and costs.
///
/// # Examples
///
/// ```
/// use packer_solver_dp::ScaleFactors;
///
/// let scale = ScaleFactors::default();
/// assert_eq!(scale.scale_weight(72.30), 7230);
/// assert_eq!(scale.scale_capacity(81), 8100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFactors {
    weight: u32,
    cost: u32,
}

/// Errors returned by [`ScaleFactors::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScaleFactorError {
    /// The weight factor was zero.
    #[error("weight scale factor must be positive")]
    ZeroWeightFactor,
    /// The cost factor was zero.
    #[error("cost scale factor must be positive")]
    ZeroCostFactor,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self {
            weight: 100,
            cost: 100,
        }
    }
}

impl ScaleFactors {
    /// Validates and constructs a pair of scale factors.
    pub const fn new(weight: u32, cost: u32) -> Result<Self, ScaleFactorError> {
        if weight == 0 {
            return Err(ScaleFactorError::ZeroWeightFactor);
        }
        if cost == 0 {
            return Err(ScaleFactorError::ZeroCostFactor);
        }
        Ok(Self { weight, cost })
    }

    /// Multiplier applied to weights and the capacity.
    #[must_use]
    pub const fn weight_factor(&self) -> u32 {
        self.weight
    }

    /// Multiplier applied to costs.
    #[must_use]
    pub const fn cost_factor(&self) -> u32 {
        self.cost
    }

    /// Capacity expressed in weight units.
    #[must_use]
    pub fn scale_capacity(&self, capacity: u32) -> u64 {
        u64::from(capacity) * u64::from(self.weight)
    }

    /// Weight expressed in weight units, rounded to nearest.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "scaling multiplies a real weight by an integer factor"
    )]
    pub fn scale_weight(&self, weight: f64) -> u64 {
        round_to_units(weight * f64::from(self.weight))
    }

    /// Cost expressed in cost units, rounded to nearest.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "scaling multiplies a real cost by an integer factor"
    )]
    pub fn scale_cost(&self, cost: f64) -> u64 {
        round_to_units(cost * f64::from(self.cost))
    }
}

// Negative and NaN inputs saturate to zero; item construction rules both out.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "rounded non-negative values saturate at the u64 bounds"
)]
fn round_to_units(value: f64) -> u64 {
    value.round() as u64
}
