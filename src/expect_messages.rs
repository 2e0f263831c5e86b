/// Expect message when conversion from a primitive is gonna work.
pub(crate) const EXPECT_CONVERSION: &str = "Can convert from a primitive";

/// Expect message when the `Config` is correct.
pub(crate) const EXPECT_CONFIG: &str = "Is a valid `Config`";

/// Expect message when a variance was already clamped to be non-negative.
pub(crate) const EXPECT_NON_NEGATIVE: &str = "The variance is non negative";

/// Expect message when constructing a `RegressionData` from clamped statistics.
pub(crate) const EXPECT_VALID_SNAPSHOT: &str = "Clamped statistics form a valid `RegressionData`";
