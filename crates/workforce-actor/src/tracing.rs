//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter for the whole process.
//!
//! The filter comes from `RUST_LOG` and falls back to `info`. The format is compact and hides
//! the module path (`with_target(false)`), since every actor event already carries an
//! `entity_type` field.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Store Operations**: `Created`, `Updated`, `Deleted`, `Cleared`, `Not found`
//! - **Client Calls**: one span per domain client method (`#[instrument]`)
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Request payloads and list queries
//! ```
//!
//! With `RUST_LOG=debug` a create followed by a paged list looks like:
//!
//! ```text
//! DEBUG create_employee: Sending request
//! DEBUG Create entity_type="Employee" params=EmployeeCreate { name: "Mike", age: 23, gender: "Male", salary: 6000.0 }
//!  INFO Created entity_type="Employee" id=0 size=1
//! DEBUG List entity_type="Employee" query=ListQuery { filter: None, page: Some(Page { page: 1, size: 5 }) } count=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the actor instead
        .compact()
        .init();
}
