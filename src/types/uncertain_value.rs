use derive_more::Display;
use getset::CopyGetters;

use super::{
    Scalar,
    ValueError,
};

/// A scalar paired with the variance of its uncertainty.
/// The standard deviation is stored alongside, so it never has to be recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Display, CopyGetters)]
#[display("{value} ± {standard_deviation}")]
pub struct UncertainValue<T>
where
    T: Scalar,
{
    /// The central value.
    #[getset(get_copy = "pub")]
    value: T,

    /// The variance of `value`, always >= 0.
    #[getset(get_copy = "pub")]
    variance: T,

    /// The square root of `variance`.
    #[getset(get_copy = "pub")]
    standard_deviation: T,
}

impl<T> UncertainValue<T>
where
    T: Scalar,
{
    /// A value without any uncertainty.
    #[inline]
    pub fn exact(value: T) -> Self {
        Self {
            value,
            variance: T::zero(),
            standard_deviation: T::zero(),
        }
    }

    /// Create a new instance from a `variance`, which must not be negative.
    pub fn from_variance(value: T, variance: T) -> Result<Self, ValueError> {
        if variance < T::zero() {
            return Err(ValueError::NegativeVariance);
        }
        Ok(Self {
            value,
            variance,
            standard_deviation: variance.sqrt(),
        })
    }

    /// Create a new instance from a `standard_deviation`, which must not be negative.
    pub fn from_standard_deviation(value: T, standard_deviation: T) -> Result<Self, ValueError> {
        if standard_deviation < T::zero() {
            return Err(ValueError::NegativeStandardDeviation);
        }
        Ok(Self {
            value,
            variance: standard_deviation * standard_deviation,
            standard_deviation,
        })
    }

    /// `true` if the value carries some uncertainty.
    #[inline(always)]
    pub fn has_variance(&self) -> bool {
        self.variance != T::zero()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn uncertain_value_exact() {
        let v = UncertainValue::exact(2.5_f64);
        assert_eq!(v.value(), 2.5);
        assert_eq!(v.variance(), 0.0);
        assert_eq!(v.standard_deviation(), 0.0);
        assert!(!v.has_variance());
        assert_eq!(v, UncertainValue::from_variance(2.5, 0.0).unwrap());
    }

    #[test_case(1.0, 4.0, 2.0)]
    #[test_case(-3.0, 0.25, 0.5)]
    #[test_case(0.0, 9.0, 3.0)]
    fn uncertain_value_from_variance(value: f64, variance: f64, std_dev: f64) {
        let v = UncertainValue::from_variance(value, variance).unwrap();
        assert_eq!(v.value(), value);
        assert_eq!(v.variance(), variance);
        assert_eq!(v.standard_deviation(), std_dev);
        assert_eq!(v, UncertainValue::from_standard_deviation(value, std_dev).unwrap());
    }

    #[test]
    fn uncertain_value_negative_magnitudes() {
        assert_eq!(
            UncertainValue::from_variance(1.0_f64, -0.1),
            Err(ValueError::NegativeVariance)
        );
        assert_eq!(
            UncertainValue::from_standard_deviation(1.0_f64, -0.1),
            Err(ValueError::NegativeStandardDeviation)
        );
    }

    #[test]
    fn uncertain_value_display() {
        let v = UncertainValue::from_standard_deviation(1.5_f64, 0.5).unwrap();
        assert_eq!(&v.to_string(), "1.5 ± 0.5");
    }

    #[test]
    fn size_of_uncertain_value() {
        assert_eq!(std::mem::size_of::<UncertainValue<f64>>(), 24);
    }
}
