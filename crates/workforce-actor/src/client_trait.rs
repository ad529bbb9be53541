//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default read, update,
//! delete and clear methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ListQuery, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// A domain client only supplies access to its inner `ResourceClient` and a mapping from
/// [`FrameworkError`] to its own error type; every operation that needs no payload
/// conversion comes for free.
///
/// # Example
///
/// ```rust
/// use workforce_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
///
/// impl ActorEntity for Tag {
///     type Id = u32; type Create = (); type Update = ();
///     type Filter = std::convert::Infallible;
///     fn from_create_params(id: u32, _: ()) -> Self { Self { id } }
///     fn id(&self) -> &u32 { &self.id }
///     fn on_update(&mut self, _: ()) {}
///     fn matches(&self, filter: &Self::Filter) -> bool { match *filter {} }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag error: {0}")]
/// struct TagError(String);
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), list(), delete() ... are provided automatically!
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: std::error::Error + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the entities selected by `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: ListQuery<T::Filter>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Replace an entity's fields, keeping its ID.
    #[tracing::instrument(skip(self))]
    async fn update(&self, id: T::Id, update: T::Update) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().update(id, update).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Administrative reset: drop every entity and restart IDs at 0.
    #[tracing::instrument(skip(self))]
    async fn clear(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().clear().await.map_err(Self::map_error)
    }
}
