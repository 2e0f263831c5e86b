/// An error with the configuration of a `LinearRegression`.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
pub enum ConfigError {
    #[error("The `minimum_variance_in_y` must be > 0")]
    InvalidMinimumVariance,
}
