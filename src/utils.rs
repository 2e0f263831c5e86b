use num_traits::NumCast;

use crate::{
    expect_messages::EXPECT_CONVERSION,
    types::Scalar,
};

/// Convert a primitive into the scalar type.
#[inline(always)]
pub(crate) fn scalar<T, N>(val: N) -> T
where
    T: Scalar,
    N: num_traits::ToPrimitive,
{
    <T as NumCast>::from(val).expect(EXPECT_CONVERSION)
}

/// Clamp a value that is non-negative in exact arithmetic, but may have drifted below zero due to round-off.
#[inline(always)]
pub(crate) fn non_negative<T: Scalar>(val: T) -> T {
    val.max(T::zero())
}

/// Clamp a value into the unit interval.
#[inline(always)]
pub(crate) fn unit_interval<T: Scalar>(val: T) -> T {
    val.max(T::zero()).min(T::one())
}
