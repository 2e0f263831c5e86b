/// The reasons why removing an `Observation` can be rejected.
/// The engine state is left untouched when one of these is returned.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
pub enum OperationError {
    #[error("Cannot remove an observation from an empty collection")]
    RemoveFromEmptyCollection,

    #[error("The observation to remove is not part of the regression")]
    RemoveNonExistingObservation,
}
