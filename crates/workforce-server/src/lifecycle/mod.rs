//! # System Lifecycle & Orchestration
//!
//! This module starts the resource actors, hands their clients to the rest of the program,
//! and shuts them down again.
//!
//! ## The WorkforceSystem Pattern
//!
//! ```rust,ignore
//! let system = WorkforceSystem::new(32);
//!
//! // Share the clients (e.g. as HTTP state)
//! let employee = system.employee_client.create_employee(params).await?;
//!
//! // Drop the clients and wait for the actors to finish
//! system.shutdown().await?;
//! ```
//!
//! The Employee and Company actors have no dependencies on each other, so both are started
//! directly in their own Tokio tasks.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once queued messages are drained
//! 3. **Actors log their final state** - `Shutdown` with the remaining store size
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! Every clone of a client keeps its actor alive, so clones handed to the HTTP router must
//! be dropped (the server stopped) before `shutdown` can complete.

pub mod workforce_system;

pub use workforce_system::*;
