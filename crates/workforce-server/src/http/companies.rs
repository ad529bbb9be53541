//! `/companies` handlers.

use super::{empty_as_none, page_from, parse_id, ApiError, AppState};
use crate::company_actor::CompanyError;
use crate::model::{Company, CompanyCreate, CompanyId};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use workforce_actor::ActorClient;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<u32>,
}

fn company_id(raw: String) -> Result<CompanyId, CompanyError> {
    parse_id(&raw).map(CompanyId).ok_or(CompanyError::NotFound(raw))
}

pub async fn create(
    State(state): State<AppState>,
    Json(params): Json<CompanyCreate>,
) -> Result<(StatusCode, Json<Company>), ApiError> {
    let company = state.companies.create_company(params).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Company>, ApiError> {
    Ok(Json(state.companies.get(company_id(id)?).await?))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let page = page_from(params.page, params.page_size);
    Ok(Json(state.companies.list_companies(page).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(replacement): Json<CompanyCreate>,
) -> Result<Json<Company>, ApiError> {
    Ok(Json(state.companies.update(company_id(id)?, replacement).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.companies.delete(company_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
