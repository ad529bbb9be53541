//! # HTTP Adaptation Layer
//!
//! Maps verbs and paths onto the resource clients and renders results as JSON.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /employees`, `GET /employees?gender=&page=&pageSize=` | [`employees::create`], [`employees::list`] |
//! | `GET`/`PUT`/`DELETE /employees/:id` | [`employees::get`], [`employees::update`], [`employees::delete`] |
//! | `POST /companies`, `GET /companies?page=&pageSize=` | [`companies::create`], [`companies::list`] |
//! | `GET`/`PUT`/`DELETE /companies/:id` | [`companies::get`], [`companies::update`], [`companies::delete`] |
//!
//! Clearing a store is deliberately not routed.

pub mod companies;
pub mod employees;
pub mod error;

pub use error::ApiError;

use crate::clients::{CompanyClient, EmployeeClient};
use crate::lifecycle::WorkforceSystem;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;
use workforce_actor::Page;

/// Handler state: one client per store. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeClient,
    pub companies: CompanyClient,
}

impl AppState {
    pub fn from_system(system: &WorkforceSystem) -> Self {
        Self {
            employees: system.employee_client.clone(),
            companies: system.company_client.clone(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/:id",
            get(employees::get)
                .put(employees::update)
                .delete(employees::delete),
        )
        .route("/companies", get(companies::list).post(companies::create))
        .route(
            "/companies/:id",
            get(companies::get)
                .put(companies::update)
                .delete(companies::delete),
        )
        .with_state(state)
}

/// Paging applies only when both query parameters are present.
fn page_from(page: Option<u32>, page_size: Option<u32>) -> Option<Page> {
    match (page, page_size) {
        (Some(page), Some(size)) => Some(Page::new(page, size)),
        _ => None,
    }
}

/// Query values such as `?page=` carry no value and read as absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Ids are unsigned 32-bit; any other path segment names no record.
fn parse_id(raw: &str) -> Option<u32> {
    raw.parse().ok()
}
