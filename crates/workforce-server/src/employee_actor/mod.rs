//! # Employee Actor
//!
//! This module implements the Employee resource actor: an ordered store of employee
//! records with CRUD operations, gender filtering and paging.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](workforce_actor::ActorEntity) implementation for [`Employee`]
//! - [`error`] - [`EmployeeError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use workforce_server::employee_actor;
//! use workforce_server::model::EmployeeCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = employee_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let params = EmployeeCreate {
//!         name: "Mike".to_string(),
//!         age: 23,
//!         gender: "Male".to_string(),
//!         salary: 6000.0,
//!     };
//!     let employee = client.create_employee(params).await?;
//!     assert_eq!(employee.id.0, 0);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::EmployeeClient;
use crate::model::Employee;
use workforce_actor::ResourceActor;

/// Creates a new Employee actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Employee>, EmployeeClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, EmployeeClient::new(generic_client))
}
