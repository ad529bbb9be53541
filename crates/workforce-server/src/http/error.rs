use crate::company_actor::CompanyError;
use crate::employee_actor::EmployeeError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// Error rendered as `{"message": ...}` with a matching status code.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => {
                error!(%message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<EmployeeError> for ApiError {
    fn from(e: EmployeeError) -> Self {
        match e {
            EmployeeError::NotFound(_) => ApiError::NotFound(e.to_string()),
            EmployeeError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CompanyError> for ApiError {
    fn from(e: CompanyError) -> Self {
        match e {
            CompanyError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CompanyError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}
