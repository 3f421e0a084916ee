use std::fmt;

use crate::haptics::backend::BackendError;

/// Programmer-error conditions from the catalog layer.
///
/// These are reported (logged, surfaced on the status line) and the
/// offending call is a no-op; none of them is recoverable in the sense of a
/// retry, and none of them is user-facing.
#[derive(Debug, Clone, PartialEq)]
pub enum HapticError {
    /// `prepare`/`trigger` called off the UI-owning thread.
    WrongThread,
    /// A row index outside the catalog.
    RowOutOfBounds(usize),
    /// The capability provider rejected a bind or an operation.
    Backend(BackendError),
}

impl fmt::Display for HapticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HapticError::WrongThread => {
                write!(f, "haptic call off the UI-owning thread")
            }
            HapticError::RowOutOfBounds(row) => {
                write!(f, "row {} out of bounds", row)
            }
            HapticError::Backend(e) => write!(f, "backend: {}", e),
        }
    }
}

impl std::error::Error for HapticError {}

impl From<BackendError> for HapticError {
    fn from(e: BackendError) -> Self {
        HapticError::Backend(e)
    }
}
