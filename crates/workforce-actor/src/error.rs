//! # Framework Errors
//!
//! This module defines the common error types used throughout the resource actor.
//! Resource crates map these into their own error enums (see
//! [`ActorClient::map_error`](crate::ActorClient::map_error)).

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No record with the given id. Carries the id rendered with its `Display` impl.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The ID counter reached `u32::MAX`; the store accepts no more records until cleared.
    #[error("No IDs left to assign")]
    IdsExhausted,
}
