/// A value type was constructed from a negative magnitude.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
pub enum ValueError {
    #[error("The variance must be >= 0")]
    NegativeVariance,

    #[error("The standard deviation must be >= 0")]
    NegativeStandardDeviation,

    #[error("The value of `{0}` must be >= 0")]
    NegativeValue(&'static str),
}
