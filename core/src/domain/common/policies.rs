use crate::domain::common::entities::app_errors::CoreError;

/// Precondition check helper: returns the given error when the condition
/// does not hold, leaving the caller's state untouched.
pub fn ensure(condition: bool, error: CoreError) -> Result<(), CoreError> {
    if condition { Ok(()) } else { Err(error) }
}
