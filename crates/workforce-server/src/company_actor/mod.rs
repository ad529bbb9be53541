//! # Company Actor
//!
//! Company resource actor: an ordered store of company records with CRUD operations and
//! paging. Structurally identical to the [`employee_actor`](crate::employee_actor), without a
//! filter dimension.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CompanyClient;
use crate::model::Company;
use workforce_actor::ResourceActor;

/// Creates a new Company actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Company>, CompanyClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CompanyClient::new(generic_client))
}
