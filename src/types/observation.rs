use derive_more::Display;
use getset::CopyGetters;

use super::{
    Scalar,
    UncertainValue,
    ValueError,
};
use crate::utils::scalar;

/// A single input point of the regression.
/// The independent `x` is exact, the dependent `y` may carry a variance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Display, CopyGetters)]
#[display("({x}, {y})")]
pub struct Observation<T>
where
    T: Scalar,
{
    /// The independent value.
    #[getset(get_copy = "pub")]
    x: T,

    /// The dependent value and its uncertainty.
    #[getset(get_copy = "pub")]
    y: UncertainValue<T>,
}

impl<T> Observation<T>
where
    T: Scalar,
{
    /// Create an observation with an exact `y`.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self {
            x,
            y: UncertainValue::exact(y),
        }
    }

    /// Create an observation from integer coordinates with an exact `y`.
    pub fn from_integers(x: i64, y: i64) -> Self {
        Self::new(scalar(x), scalar(y))
    }

    /// Create an observation from an already constructed `UncertainValue`.
    #[inline]
    pub fn from_uncertain(x: T, y: UncertainValue<T>) -> Self {
        Self { x, y }
    }

    /// Create an observation where `y` has the given `variance`.
    pub fn with_variance(x: T, y: T, variance: T) -> Result<Self, ValueError> {
        Ok(Self {
            x,
            y: UncertainValue::from_variance(y, variance)?,
        })
    }

    /// Create an observation where `y` has the given `standard_deviation`.
    pub fn with_standard_deviation(x: T, y: T, standard_deviation: T) -> Result<Self, ValueError> {
        Ok(Self {
            x,
            y: UncertainValue::from_standard_deviation(y, standard_deviation)?,
        })
    }

    /// A copy of `self` with the variance of `y` replaced.
    pub fn with_replaced_variance(&self, variance: T) -> Result<Self, ValueError> {
        Self::with_variance(self.x, self.y.value(), variance)
    }

    /// A copy of `self` with the standard deviation of `y` replaced.
    pub fn with_replaced_standard_deviation(
        &self,
        standard_deviation: T,
    ) -> Result<Self, ValueError> {
        Self::with_standard_deviation(self.x, self.y.value(), standard_deviation)
    }

    /// `true` if `y` has a non-zero variance.
    #[inline(always)]
    pub fn y_has_variance(&self) -> bool {
        self.y.has_variance()
    }
}
