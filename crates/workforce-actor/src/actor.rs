//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a resource collection.
//! It implements the "Server" side of the Actor Model, processing messages sequentially
//! and ensuring exclusive access to the records and the ID counter.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The `ResourceActor<T>` struct is the *server* side of the framework. It owns the
/// in‑memory store for a given entity type `T: ActorEntity` and processes all incoming
/// `ResourceRequest<T>` messages sequentially. Each actor runs in its own Tokio task,
/// so the records and the counter are never touched by two requests at once and no
/// lock is needed.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client wherever requests are issued.
///
/// ```rust
/// use workforce_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
///
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Filter = std::convert::Infallible;
///
///     fn from_create_params(id: u32, label: String) -> Self { Self { id, label } }
///     fn id(&self) -> &u32 { &self.id }
///     fn on_update(&mut self, label: String) { self.label = label; }
///     fn matches(&self, filter: &Self::Filter) -> bool { match *filter {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run());
///
///     let tag = client.create("urgent".to_string()).await.unwrap();
///     assert_eq!(tag.id, 0);
/// }
/// ```
///
/// # Implementation Details
///
/// Records live in an insertion-ordered `Vec`, with a `HashMap` from ID to position for
/// lookups. IDs come from a `u32` counter (`next_id`) that starts at 0 and only moves
/// forward, so deleted IDs are never handed out again until the store is cleared. The last
/// assignable ID is `u32::MAX - 1`; after it, creates fail with `IdsExhausted`.
///
/// * **Create**: takes the next ID, builds the entity with `T::from_create_params`, appends it.
/// * **Get**: clones the record at the indexed position, or fails with `NotFound`.
/// * **List**: applies the [`ListQuery`](crate::ListQuery) to the ordered records.
/// * **Update**: calls `on_update` on the record in place; its position and ID are kept.
/// * **Delete**: removes the record and shifts the positions of every later record.
/// * **Clear**: drops all records and resets the counter to 0.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    records: Vec<T>,
    index: HashMap<T::Id, usize>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
            index: HashMap::new(),
            next_id: 0,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Employee" instead of "workforce_server::model::employee::Employee")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.insert(params);
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.records.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|pos| self.records[pos].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(item.ok_or_else(|| not_found(&id)));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items = query.apply(&self.records);
                    debug!(entity_type, ?query, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(pos) = self.position(&id) {
                        let item = &mut self.records[pos];
                        item.on_update(update);
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(not_found(&id)));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if self.remove(&id) {
                        info!(entity_type, %id, size = self.records.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(not_found(&id)));
                    }
                }
                ResourceRequest::Clear { respond_to } => {
                    let dropped = self.records.len();
                    self.records.clear();
                    self.index.clear();
                    self.next_id = 0;
                    info!(entity_type, dropped, "Cleared");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }

    fn insert(&mut self, params: T::Create) -> Result<T, FrameworkError> {
        let next = self
            .next_id
            .checked_add(1)
            .ok_or(FrameworkError::IdsExhausted)?;
        let id = T::Id::from(std::mem::replace(&mut self.next_id, next));

        let item = T::from_create_params(id.clone(), params);
        self.index.insert(id, self.records.len());
        self.records.push(item.clone());
        Ok(item)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn remove(&mut self, id: &T::Id) -> bool {
        let Some(pos) = self.index.remove(id) else {
            return false;
        };
        self.records.remove(pos);
        for item in &self.records[pos..] {
            if let Some(slot) = self.index.get_mut(item.id()) {
                *slot -= 1;
            }
        }
        true
    }
}

fn not_found<I: std::fmt::Display>(id: &I) -> FrameworkError {
    FrameworkError::NotFound(id.to_string())
}
