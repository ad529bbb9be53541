//! # Workforce Server Library
//!
//! In-memory Employee and Company resource server. Each collection is a
//! [`ResourceActor`](workforce_actor::ResourceActor) started by the [`lifecycle`] module and
//! reached through a domain client from [`clients`]; the [`http`] module exposes both over
//! JSON/HTTP.
//!
//! - **[model]**: Plain records ([`Employee`](model::Employee), [`Company`](model::Company)) and payloads.
//! - **[employee_actor]**, **[company_actor]**: `ActorEntity` implementations and error types.
//! - **[clients]**: Type-safe wrappers that hide the message passing.
//! - **[lifecycle]**: Starts and stops the actors.
//! - **[http]**: axum router and handlers.
//! - **[config]**: Command-line/environment configuration.

pub mod clients;
pub mod company_actor;
pub mod config;
pub mod employee_actor;
pub mod http;
pub mod lifecycle;
pub mod model;
