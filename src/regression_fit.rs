//! Derives the fitted line and the error measures from the weighted sufficient statistics.

use tracing::trace;

use crate::{
    config::Config,
    expect_messages::EXPECT_NON_NEGATIVE,
    types::{
        Observation,
        RegressionEquation,
        Scalar,
        UncertainValue,
        WeightedSums,
    },
    utils::{
        non_negative,
        scalar,
        unit_interval,
    },
};

/// Everything derived from the sufficient statistics of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(
    clippy::field_scoped_visibility_modifiers,
    reason = "Destructured into `RegressionData`"
)]
pub(crate) struct Fit<T>
where
    T: Scalar,
{
    pub(crate) mean_total_squared_error: T,
    pub(crate) mean_squared_residual_error: Option<T>,
    pub(crate) mean_squared_regression_error: Option<T>,
    pub(crate) r_squared: Option<T>,
    pub(crate) equation: Option<RegressionEquation<T>>,
}

impl<T> Fit<T>
where
    T: Scalar,
{
    /// Nothing can be fitted.
    pub(crate) fn none(mean_total_squared_error: T) -> Self {
        Self {
            mean_total_squared_error,
            mean_squared_residual_error: None,
            mean_squared_regression_error: None,
            r_squared: None,
            equation: None,
        }
    }
}

/// The values shared by all weighted observations, compared exactly
/// rather than derived from the running sums which carry round-off.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spread<T> {
    /// Set if all weighted observations have this `x`.
    shared_x: Option<T>,
    /// Set if all weighted observations have this `y` value.
    shared_y: Option<T>,
}

impl<T> Spread<T>
where
    T: Scalar,
{
    /// `None` if no observation carries weight.
    /// Stops scanning once both `x` and `y` are known to vary.
    fn of(observations: &[Observation<T>], config: &Config<T>) -> Option<Self> {
        let mut weighted = observations
            .iter()
            .filter(|o| config.weight_of(o) > T::zero());
        let first = weighted.next()?;
        let mut spread = Self {
            shared_x: Some(first.x()),
            shared_y: Some(first.y().value()),
        };
        for o in weighted {
            if spread.shared_x.is_some_and(|x| x != o.x()) {
                spread.shared_x = None;
            }
            if spread.shared_y.is_some_and(|y| y != o.y().value()) {
                spread.shared_y = None;
            }
            if spread.shared_x.is_none() && spread.shared_y.is_none() {
                break;
            }
        }
        Some(spread)
    }
}

/// Fit a line to `observations`, summarized by `sums`.
///
/// Whether all `x` or all `y` coincide is decided on the observations themselves,
/// everything else is derived from `sums`.
/// All intermediate values are local to this call.
pub(crate) fn fit<T>(
    sums: &WeightedSums<T>,
    observations: &[Observation<T>],
    config: &Config<T>,
) -> Fit<T>
where
    T: Scalar,
{
    let (Some(means), Some(spread)) = (sums.means(), Spread::of(observations, config)) else {
        return Fit::none(T::zero());
    };
    let mean_total_squared_error = match spread.shared_y {
        Some(_) => T::zero(),
        None => non_negative(means.yy - means.y * means.y),
    };
    let number_of_observations = observations.len();
    if number_of_observations < 2 {
        return Fit::none(mean_total_squared_error);
    }

    let delta = non_negative(means.xx - means.x * means.x);
    // Distinct `x` the sums cannot resolve are treated as shared.
    let shared_x = spread
        .shared_x
        .or_else(|| (delta == T::zero()).then_some(means.x));
    if let Some(x) = shared_x {
        if let Some(y) = spread.shared_y {
            trace!("all observations coincide in ({x}, {y})");
            return Fit {
                equation: Some(RegressionEquation::Degenerate { x, y }),
                ..Fit::none(mean_total_squared_error)
            };
        }
        trace!("all observations share x = {x}");
        return Fit {
            r_squared: Some(T::one()),
            equation: Some(RegressionEquation::InfiniteSlope { intercept_x: x }),
            ..Fit::none(mean_total_squared_error)
        };
    }

    let two: T = scalar(2);
    let (slope, intercept_y) = match spread.shared_y {
        Some(y) => (T::zero(), y),
        None => (
            (means.xy - means.x * means.y) / delta,
            (means.xx * means.y - means.x * means.xy) / delta,
        ),
    };

    let (mean_squared_residual_error, mean_squared_regression_error) = match spread.shared_y {
        Some(_) => (T::zero(), T::zero()),
        None => (
            non_negative(means.yy - (means.xy * slope + means.y * intercept_y)),
            non_negative(
                (means.xy - two * means.x * means.y) * slope + (means.y - intercept_y) * means.y,
            ),
        ),
    };
    let r_squared = if mean_total_squared_error == T::zero() {
        T::one()
    } else {
        unit_interval(T::one() - mean_squared_residual_error / mean_total_squared_error)
    };

    // Two points determine a line exactly, so `n - 1` replaces the usual `n - 2` there.
    let degrees_of_freedom_offset: T = if number_of_observations == 2 {
        T::one()
    } else {
        two
    };
    let n: T = scalar(number_of_observations);
    let u = mean_squared_residual_error / delta;
    let slope_variance = non_negative(scalar::<T, _>(4) * u / (n - degrees_of_freedom_offset));
    let intercept_y_variance = non_negative(slope_variance * means.xx);

    Fit {
        mean_total_squared_error,
        mean_squared_residual_error: Some(mean_squared_residual_error),
        mean_squared_regression_error: Some(mean_squared_regression_error),
        r_squared: Some(r_squared),
        equation: Some(RegressionEquation::FiniteSlope {
            slope: UncertainValue::from_variance(slope, slope_variance)
                .expect(EXPECT_NON_NEGATIVE),
            intercept_y: UncertainValue::from_variance(intercept_y, intercept_y_variance)
                .expect(EXPECT_NON_NEGATIVE),
        }),
    }
}
