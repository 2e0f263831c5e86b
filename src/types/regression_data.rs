use getset::{
    CopyGetters,
    Getters,
};

use super::{
    Observation,
    RegressionEquation,
    Scalar,
    ValueError,
    WeightedSums,
};
use crate::regression_fit::Fit;

/// An immutable snapshot of the regression after one processed observation.
///
/// The sums and all derived measures can be reconstructed from `observations` alone.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct RegressionData<T>
where
    T: Scalar,
{
    /// Increases by one with every processed observation.
    #[getset(get_copy = "pub")]
    index: u64,

    /// The observations currently contributing, in insertion order.
    #[getset(get = "pub")]
    observations: Vec<Observation<T>>,

    /// The weighted sufficient statistics of `observations`.
    #[getset(get_copy = "pub")]
    weighted_sums: WeightedSums<T>,

    /// The weighted variance of `y`.
    #[getset(get_copy = "pub")]
    mean_total_squared_error: T,

    /// The weighted mean squared distance of the observations from the fitted line.
    #[getset(get_copy = "pub")]
    mean_squared_residual_error: Option<T>,

    /// The part of the weighted variance of `y` explained by the fitted line.
    #[getset(get_copy = "pub")]
    mean_squared_regression_error: Option<T>,

    /// The coefficient of determination in `[0, 1]`.
    #[getset(get_copy = "pub")]
    r_squared: Option<T>,

    /// The fitted line, absent for less than two observations.
    #[getset(get_copy = "pub")]
    equation: Option<RegressionEquation<T>>,
}

impl<T> Default for RegressionData<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RegressionData<T>
where
    T: Scalar,
{
    /// The snapshot of a regression without any observations.
    pub fn empty() -> Self {
        Self {
            index: 0,
            observations: Vec::new(),
            weighted_sums: WeightedSums::default(),
            mean_total_squared_error: T::zero(),
            mean_squared_residual_error: None,
            mean_squared_regression_error: None,
            r_squared: None,
            equation: None,
        }
    }

    /// Assemble a snapshot, rejecting any negative sum or error measure.
    pub(crate) fn new(
        index: u64,
        observations: Vec<Observation<T>>,
        weighted_sums: WeightedSums<T>,
        fit: Fit<T>,
    ) -> Result<Self, ValueError> {
        for (name, val) in weighted_sums.non_negative_sums() {
            if val < T::zero() {
                return Err(ValueError::NegativeValue(name));
            }
        }
        let Fit {
            mean_total_squared_error,
            mean_squared_residual_error,
            mean_squared_regression_error,
            r_squared,
            equation,
        } = fit;
        let optional = [
            ("mean_squared_residual_error", mean_squared_residual_error),
            ("mean_squared_regression_error", mean_squared_regression_error),
            ("r_squared", r_squared),
        ];
        if mean_total_squared_error < T::zero() {
            return Err(ValueError::NegativeValue("mean_total_squared_error"));
        }
        for (name, val) in optional {
            if val.is_some_and(|val| val < T::zero()) {
                return Err(ValueError::NegativeValue(name));
            }
        }
        if let Some(r_squared) = r_squared {
            assert2::debug_assert!(r_squared <= T::one());
        }

        Ok(Self {
            index,
            observations,
            weighted_sums,
            mean_total_squared_error,
            mean_squared_residual_error,
            mean_squared_regression_error,
            r_squared,
            equation,
        })
    }

    /// The number of observations currently contributing.
    #[inline(always)]
    pub fn number_of_observations(&self) -> usize {
        self.observations.len()
    }

    /// `true` if no observation contributes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// `true` if an equal observation is part of this snapshot.
    pub fn contains(&self, observation: &Observation<T>) -> bool {
        self.observations.contains(observation)
    }

    /// The weighted mean of `x`, if any observation carries weight.
    pub fn mean_x(&self) -> Option<T> {
        self.weighted_sums.means().map(|means| means.x)
    }

    /// The weighted mean of `y`, if any observation carries weight.
    pub fn mean_y(&self) -> Option<T> {
        self.weighted_sums.means().map(|means| means.y)
    }

    /// Move the observations out, leaving an empty list behind.
    /// Only used on a snapshot that is about to be replaced.
    pub(crate) fn take_observations(&mut self) -> Vec<Observation<T>> {
        std::mem::take(&mut self.observations)
    }
}
