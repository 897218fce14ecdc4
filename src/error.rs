use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("update for {entity} '{id}' matched {matched} and modified {modified} documents")]
    WriteConflict {
        entity: &'static str,
        id: String,
        matched: u64,
        modified: u64,
    },
    #[error("database operation failed")]
    DataAccess(#[from] mongodb::error::Error),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::WriteConflict { .. } => StatusCode::CONFLICT,
            ServiceError::DataAccess(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// The one place an error kind becomes a transport status
impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        if let ServiceError::DataAccess(ref e) = self {
            tracing::error!("database error: {:?}", e);
        }
        let status = self.status_code();
        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
