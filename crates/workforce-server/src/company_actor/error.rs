//! Error types for the Company actor.

use thiserror::Error;

/// Errors that can occur during company operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompanyError {
    /// No company has the requested id.
    #[error("Company not found with id: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
