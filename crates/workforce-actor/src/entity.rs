//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Employee, Company, …)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated types
//! for IDs, payloads and list filters, and the three operations the actor needs to build,
//! replace and filter records.
//!
//! # Architecture Note
//! By defining a contract that all resource types must satisfy, we write the `ResourceActor`
//! store logic *once* and reuse it for every collection.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! An `Employee` requires an `EmployeeCreate` payload, and you can't accidentally send it
//! a `CompanyCreate` payload.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Identifiers
/// The actor owns a `u32` counter that starts at 0 and advances on every create.
/// `Id` is built from that counter, so resources usually wrap it in a newtype
/// (e.g. `EmployeeId(u32)`).
///
/// # Filters
/// `Filter` is the resource-specific list predicate (e.g. a gender match). Resources
/// that cannot be filtered use [`std::convert::Infallible`], which makes a filtered
/// query impossible to construct.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data that replaces every non-id field of an existing instance.
    type Update: Send + Sync + Debug;

    /// Predicate applied by unpaged list queries.
    type Filter: Send + Sync + Debug;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// The store-assigned identifier of this instance.
    fn id(&self) -> &Self::Id;

    /// Replace all fields except the identifier.
    fn on_update(&mut self, update: Self::Update);

    /// Whether this instance passes the list filter.
    fn matches(&self, filter: &Self::Filter) -> bool;
}
