//! # Workforce Actor
//!
//! Generic, in-memory resource stores for the workforce server. Each resource collection
//! (Employees, Companies, …) is owned by one [`ResourceActor`] running in its own Tokio task,
//! and every other part of the program talks to it through a cloneable [`ResourceClient`].
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - How a record is built from a payload, replaced,
//!    and matched against a list filter.
//! 2. **Runtime Layer** ([`ResourceActor`]) - The ordered store, the ID counter and the
//!    sequential message loop.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe async calls.
//!
//! ## Store Semantics
//!
//! - IDs are assigned from a counter that starts at 0 and never goes back, except on
//!   [`clear`](ResourceClient::clear).
//! - Records are kept in creation order; updates replace a record in place.
//! - Get, update and delete of an unknown ID fail with [`FrameworkError::NotFound`].
//! - Lists follow [`ListQuery`]: a page is cut from the full collection and takes priority
//!   over the filter.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Independent actors run in **parallel**
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, a `ResourceClient` answered from queued
//! expectations, for unit tests of the code built around a client.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use query::{ListQuery, Page};
