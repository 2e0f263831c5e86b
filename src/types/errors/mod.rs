mod config;
mod error;
mod operation;
mod value;

pub use config::ConfigError;
pub use error::{
    Error,
    Result,
};
pub use operation::OperationError;
pub use value::ValueError;
