use super::{
    ConfigError,
    OperationError,
    ValueError,
};

/// Describes possible Errors that may occur when calling methods in this crate
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    ValueError(#[from] ValueError),

    #[error(transparent)]
    OperationError(#[from] OperationError),
}

/// This is defined as a convenience.
pub type Result<T> = std::result::Result<T, Error>;
