mod errors;
mod observation;
mod regression_data;
mod regression_equation;
mod scalar;
mod uncertain_value;
mod weighted_sums;

pub use errors::*;
pub use observation::Observation;
pub use regression_data::RegressionData;
pub use regression_equation::RegressionEquation;
pub use scalar::Scalar;
pub use uncertain_value::UncertainValue;
pub use weighted_sums::WeightedSums;
