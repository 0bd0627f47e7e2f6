//! Error types for the Desk actor.

use thiserror::Error;

/// Errors a [`DeskClient`](crate::clients::DeskClient) caller can see.
///
/// The desk normalizes every bad input itself, so the only failures left are
/// on the way to and from the actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeskError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for DeskError {
    fn from(msg: String) -> Self {
        DeskError::ActorCommunicationError(msg)
    }
}
