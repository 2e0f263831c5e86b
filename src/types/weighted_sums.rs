use derive_more::{
    Add,
    Sub,
};
use getset::CopyGetters;

use super::{
    Observation,
    Scalar,
};
use crate::utils::non_negative;

/// The six weighted sufficient statistics of a linear regression.
/// Each observation contributes its weight `w` times `(1, x, y, x*y, x², y²)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Add, Sub, CopyGetters)]
pub struct WeightedSums<T>
where
    T: Scalar,
{
    /// Σw
    #[getset(get_copy = "pub")]
    sum_one_over_variance_y: T,

    /// Σw·x
    #[getset(get_copy = "pub")]
    sum_x_over_variance_y: T,

    /// Σw·y
    #[getset(get_copy = "pub")]
    sum_y_over_variance_y: T,

    /// Σw·x·y
    #[getset(get_copy = "pub")]
    sum_xy_over_variance_y: T,

    /// Σw·x²
    #[getset(get_copy = "pub")]
    sum_x_squared_over_variance_y: T,

    /// Σw·y²
    #[getset(get_copy = "pub")]
    sum_y_squared_over_variance_y: T,
}

/// The weighted means derived from `WeightedSums`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(
    clippy::field_scoped_visibility_modifiers,
    reason = "Plain intermediate values of a fit"
)]
pub(crate) struct WeightedMeans<T> {
    pub(crate) x: T,
    pub(crate) y: T,
    pub(crate) xy: T,
    pub(crate) xx: T,
    pub(crate) yy: T,
}

impl<T> WeightedSums<T>
where
    T: Scalar,
{
    /// The contribution of a single `observation` with the given `weight`.
    pub fn contribution(observation: &Observation<T>, weight: T) -> Self {
        let x = observation.x();
        let y = observation.y().value();
        Self {
            sum_one_over_variance_y: weight,
            sum_x_over_variance_y: weight * x,
            sum_y_over_variance_y: weight * y,
            sum_xy_over_variance_y: weight * x * y,
            sum_x_squared_over_variance_y: weight * x * x,
            sum_y_squared_over_variance_y: weight * y * y,
        }
    }

    /// Clamp the sums which are non-negative in exact arithmetic,
    /// as removing contributions can leave them slightly below zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            sum_one_over_variance_y: non_negative(self.sum_one_over_variance_y),
            sum_x_squared_over_variance_y: non_negative(self.sum_x_squared_over_variance_y),
            sum_y_squared_over_variance_y: non_negative(self.sum_y_squared_over_variance_y),
            ..self
        }
    }

    /// The weighted means, if the total weight is positive.
    pub(crate) fn means(&self) -> Option<WeightedMeans<T>> {
        let s1 = self.sum_one_over_variance_y;
        if s1.is_nan() || s1 <= T::zero() {
            return None;
        }
        Some(WeightedMeans {
            x: self.sum_x_over_variance_y / s1,
            y: self.sum_y_over_variance_y / s1,
            xy: self.sum_xy_over_variance_y / s1,
            xx: self.sum_x_squared_over_variance_y / s1,
            yy: self.sum_y_squared_over_variance_y / s1,
        })
    }

    /// The sums that are required to be non-negative, with their names.
    pub(crate) fn non_negative_sums(&self) -> [(&'static str, T); 3] {
        [
            ("sum_one_over_variance_y", self.sum_one_over_variance_y),
            (
                "sum_x_squared_over_variance_y",
                self.sum_x_squared_over_variance_y,
            ),
            (
                "sum_y_squared_over_variance_y",
                self.sum_y_squared_over_variance_y,
            ),
        ]
    }
}
