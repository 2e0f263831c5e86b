#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![doc = include_str!("../README.md")]

//! online_linreg - incremental variance-weighted linear regression

mod config;
mod expect_messages;
mod linear_regression;
mod regression_fit;
mod types;
mod utils;

// Only used by the benchmarks.
#[cfg(test)]
use criterion as _;

/// Exports common types
pub mod prelude {
    pub use crate::{
        config::{
            Config,
            DEFAULT_MINIMUM_VARIANCE_IN_Y,
        },
        linear_regression::LinearRegression,
        types::*,
    };
}

