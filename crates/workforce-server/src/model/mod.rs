//! Pure data structures (DTOs) implementing the [`ActorEntity`](workforce_actor::ActorEntity) trait.

pub mod company;
pub mod employee;

pub use company::*;
pub use employee::*;
