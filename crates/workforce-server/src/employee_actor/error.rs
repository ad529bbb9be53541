//! Error types for the Employee actor.

use thiserror::Error;

/// Errors that can occur during employee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    /// No employee has the requested id.
    #[error("Employee not found with id: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
