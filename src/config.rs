use getset::CopyGetters;
use typed_builder::TypedBuilder;

use crate::{
    types::{
        ConfigError,
        Observation,
        Scalar,
    },
    utils::scalar,
};

/// The variance substituted for observations whose `y` is exact,
/// unless configured otherwise.
pub const DEFAULT_MINIMUM_VARIANCE_IN_Y: f64 = 1e-6;

/// Define the `LinearRegression` configuration.
///
/// ```
/// use online_linreg::prelude::*;
///
/// let config = Config::<f64>::builder()
///     .minimum_variance_in_y(0.1)
///     .keeping_history(true)
///     .build();
/// assert!(!config.ignoring_variance_in_y());
/// ```
#[derive(Debug, Clone, PartialEq, TypedBuilder, CopyGetters)]
pub struct Config<T>
where
    T: Scalar,
{
    /// If `true`, every observation has weight 1, regardless of its variance in `y`.
    #[builder(default)]
    #[getset(get_copy = "pub")]
    ignoring_variance_in_y: bool,

    /// Substituted for the variance of observations whose `y` is exact.
    /// Must be > 0.
    #[builder(default = scalar(DEFAULT_MINIMUM_VARIANCE_IN_Y))]
    #[getset(get_copy = "pub")]
    minimum_variance_in_y: T,

    /// Whether every snapshot is retained, starting from construction.
    #[builder(default)]
    #[getset(get_copy = "pub")]
    keeping_history: bool,
}

impl<T> Default for Config<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<T> Config<T>
where
    T: Scalar,
{
    /// Check the configured values.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_variance_in_y.is_nan() || self.minimum_variance_in_y <= T::zero() {
            return Err(ConfigError::InvalidMinimumVariance);
        }
        Ok(())
    }

    /// The weight an `observation` contributes to the regression.
    ///
    /// It is the reciprocal of the variance in `y`, where an exact `y` uses `minimum_variance_in_y`,
    /// or 1 when ignoring the variance in `y`.
    pub fn weight_of(&self, observation: &Observation<T>) -> T {
        if self.ignoring_variance_in_y {
            return T::one();
        }
        let variance = observation.y().variance();
        if variance == T::zero() {
            self.minimum_variance_in_y.recip()
        } else {
            variance.recip()
        }
    }
}
