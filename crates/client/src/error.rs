//! Client-side error taxonomy.
//!
//! Three conditions, all surfaced to the initiating view as a readable
//! string and none retried automatically:
//!
//! - `FetchFailed`: a listing call failed; the view keeps its last-known
//!   data and shows the message.
//! - `ActionFailed`: a lifecycle mutation failed; local state is left
//!   untouched.
//! - `Validation`: a client-side precondition was violated before any
//!   call was issued.

use thiserror::Error;

use wareflow_core::DomainError;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A listing or lookup call failed.
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// A create/cancel/approve/reject call failed.
    #[error("action failed: {0}")]
    ActionFailed(String),

    /// A client-side precondition was violated; no call was made.
    #[error(transparent)]
    Validation(#[from] DomainError),
}

impl ClientError {
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::FetchFailed(msg.into())
    }

    pub fn action(msg: impl Into<String>) -> Self {
        Self::ActionFailed(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
