use std::sync::Arc;

use getset::{
    CopyGetters,
    Getters,
};
use tracing::{
    debug,
    trace,
};

use crate::{
    config::Config,
    expect_messages::{
        EXPECT_CONFIG,
        EXPECT_VALID_SNAPSHOT,
    },
    regression_fit::fit,
    types::{
        ConfigError,
        Observation,
        OperationError,
        RegressionData,
        Scalar,
        WeightedSums,
    },
};

/// An online weighted linear regression.
///
/// Adding an observation updates the sufficient statistics in constant time,
/// removing one requires a linear search for it.
/// Checking whether all observations share `x` or `y` scans them only as long as they do.
/// Every processed observation installs a new immutable `RegressionData` snapshot.
///
/// Mutating calls must be serialized by the caller.
/// Snapshots obtained from `current_data` or `history` stay valid and unchanged
/// while the regression moves on.
///
/// Keeping the history retains every snapshot including its observation list,
/// so memory grows without bound over a long session.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct LinearRegression<T>
where
    T: Scalar,
{
    /// The configuration this regression was created with.
    #[getset(get = "pub")]
    config: Config<T>,

    /// Whether new snapshots are appended to the `history`.
    #[getset(get_copy = "pub")]
    keeping_history: bool,

    /// The latest snapshot.
    #[getset(get = "pub")]
    current_data: Arc<RegressionData<T>>,

    history: Vec<Arc<RegressionData<T>>>,
}

impl<T> Default for LinearRegression<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self::new(Config::default()).expect(EXPECT_CONFIG)
    }
}

impl<T> LinearRegression<T>
where
    T: Scalar,
{
    /// Create a new regression without any observations.
    ///
    /// # Returns:
    /// Either a regression or a `ConfigError` if `minimum_variance_in_y` is not > 0.
    pub fn new(config: Config<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            keeping_history: config.keeping_history(),
            config,
            current_data: Arc::new(RegressionData::empty()),
            history: Vec::new(),
        })
    }

    /// If `true`, all observations have the same weight.
    #[inline(always)]
    pub fn ignoring_variance_in_y(&self) -> bool {
        self.config.ignoring_variance_in_y()
    }

    /// The variance used for observations without uncertainty.
    #[inline(always)]
    pub fn minimum_variance_in_y(&self) -> T {
        self.config.minimum_variance_in_y()
    }

    /// Start or stop appending snapshots to the `history`.
    /// Stopping does not clear the existing history.
    pub fn set_keeping_history(&mut self, keeping_history: bool) {
        debug!("set_keeping_history: {keeping_history}");
        self.keeping_history = keeping_history;
    }

    /// All snapshots installed while the history was kept, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[Arc<RegressionData<T>>] {
        &self.history
    }

    /// Add an `observation` to the regression.
    pub fn add(&mut self, observation: Observation<T>) {
        trace!("add: {observation}");
        let weight = self.config.weight_of(&observation);
        let contribution = WeightedSums::contribution(&observation, weight);
        let sums = (self.current_data.weighted_sums() + contribution).clamped();

        let mut observations = self.take_observations();
        observations.push(observation);
        self.install(observations, sums);
    }

    /// Remove the first observation equal to `observation`.
    ///
    /// # Returns:
    /// An error if there are no observations or none of them equals `observation`.
    /// The regression is unchanged in that case.
    pub fn remove(&mut self, observation: &Observation<T>) -> Result<(), OperationError> {
        trace!("remove: {observation}");
        let position = self.position_of(observation)?;
        let removed = self.current_data.observations()[position];
        let weight = self.config.weight_of(&removed);
        let contribution = WeightedSums::contribution(&removed, weight);
        let sums = (self.current_data.weighted_sums() - contribution).clamped();

        let mut observations = self.take_observations();
        observations.remove(position);
        self.install(observations, sums);
        Ok(())
    }

    /// Remove `old` and add `new` in its place, e.g. when a point is moved
    /// or its uncertainty is adjusted.
    /// Installs one snapshot for the removal and one for the addition.
    ///
    /// # Returns:
    /// The same errors as `remove`, in which case `new` is not added either.
    pub fn replace(
        &mut self,
        old: &Observation<T>,
        new: Observation<T>,
    ) -> Result<(), OperationError> {
        self.remove(old)?;
        self.add(new);
        Ok(())
    }

    /// Drop all observations and the history, keeping the configuration
    /// and whether the history is kept.
    pub fn reset(&mut self) {
        debug!(
            "reset: dropping {} observations and {} snapshots",
            self.current_data.number_of_observations(),
            self.history.len()
        );
        self.current_data = Arc::new(RegressionData::empty());
        self.history.clear();
    }

    fn position_of(&self, observation: &Observation<T>) -> Result<usize, OperationError> {
        if self.current_data.is_empty() {
            debug!("remove: no observations");
            return Err(OperationError::RemoveFromEmptyCollection);
        }
        self.current_data
            .observations()
            .iter()
            .position(|o| o == observation)
            .ok_or_else(|| {
                debug!("remove: {observation} not found");
                OperationError::RemoveNonExistingObservation
            })
    }

    /// The observations of the current snapshot, which is about to be replaced.
    /// They are moved out if no one else holds the snapshot, cloned otherwise.
    fn take_observations(&mut self) -> Vec<Observation<T>> {
        match Arc::get_mut(&mut self.current_data) {
            Some(data) => data.take_observations(),
            None => self.current_data.observations().clone(),
        }
    }

    fn install(&mut self, observations: Vec<Observation<T>>, sums: WeightedSums<T>) {
        let sums = if observations.is_empty() {
            WeightedSums::default()
        } else {
            sums
        };
        let fit = fit(&sums, &observations, &self.config);
        let index = self.current_data.index() + 1;
        let data = Arc::new(
            RegressionData::new(index, observations, sums, fit).expect(EXPECT_VALID_SNAPSHOT),
        );
        trace!(
            "install snapshot {index} with {} observations, equation: {:?}",
            data.number_of_observations(),
            data.equation()
        );
        if self.keeping_history {
            self.history.push(Arc::clone(&data));
        }
        self.current_data = data;
    }
}

impl<T> Extend<Observation<T>> for LinearRegression<T>
where
    T: Scalar,
{
    fn extend<I: IntoIterator<Item = Observation<T>>>(&mut self, iter: I) {
        for observation in iter {
            self.add(observation);
        }
    }
}
