//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::query::ListQuery;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to the lifecycle of a stored record:
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] and replies with the stored record.
/// - **Get (Read)**: Fetches one record by ID.
/// - **List**: Reads many records according to a [`ListQuery`].
/// - **Update**: Whole-record replacement using [`ActorEntity::Update`]. The ID is preserved.
/// - **Delete**: Lifecycle end. Removes the record.
/// - **Clear**: Administrative reset. Empties the store and restarts ID assignment at 0.
///
/// This type is generic over `T: ActorEntity`, so an `Employee` payload can never be sent
/// to a `Company` actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    List {
        query: ListQuery<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Clear {
        respond_to: Response<()>,
    },
}
