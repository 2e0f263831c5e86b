use std::fmt::{
    Debug,
    Display,
};

use num_traits::Float;

/// The floating point type a regression is computed in.
/// Implemented for every type that satisfies the bounds, e.g. `f32` and `f64`.
pub trait Scalar: Float + Default + Debug + Display + Send + Sync + 'static {}

impl<T> Scalar for T where T: Float + Default + Debug + Display + Send + Sync + 'static {}
