use thiserror::Error;

/// Recoverable error kinds for the bill split core. Every rejected operation
/// leaves the stores in their last valid state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Split has no assigned people")]
    EmptySelection,

    #[error("Reference not found: {0}")]
    ReferenceNotFound(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
