//! Operation Errors

use crate::api::ApiError;
use crate::models::ErrorKind;

/// Failure of a state-container operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("{}", ErrorKind::EmptyTitle)]
    EmptyTitle,

    #[error("{}", ErrorKind::LoadFailed)]
    Load(#[source] ApiError),

    #[error("{}", ErrorKind::AddFailed)]
    Add(#[source] ApiError),

    #[error("{}", ErrorKind::DeleteFailed)]
    Delete(#[source] ApiError),
}

impl TodoError {
    /// Banner message this failure maps to
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::EmptyTitle => ErrorKind::EmptyTitle,
            TodoError::Load(_) => ErrorKind::LoadFailed,
            TodoError::Add(_) => ErrorKind::AddFailed,
            TodoError::Delete(_) => ErrorKind::DeleteFailed,
        }
    }
}
