//! `/employees` handlers.

use super::{empty_as_none, page_from, parse_id, ApiError, AppState};
use crate::employee_actor::EmployeeError;
use crate::model::{Employee, EmployeeCreate, EmployeeId};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use workforce_actor::ActorClient;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<u32>,
}

fn employee_id(raw: String) -> Result<EmployeeId, EmployeeError> {
    parse_id(&raw).map(EmployeeId).ok_or(EmployeeError::NotFound(raw))
}

pub async fn create(
    State(state): State<AppState>,
    Json(params): Json<EmployeeCreate>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = state.employees.create_employee(params).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.employees.get(employee_id(id)?).await?))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let page = page_from(params.page, params.page_size);
    Ok(Json(state.employees.list_employees(params.gender, page).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(replacement): Json<EmployeeCreate>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.employees.update(employee_id(id)?, replacement).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.employees.delete(employee_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
