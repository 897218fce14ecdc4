use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::ServiceError;
use crate::services::users::{self, UserUpdate};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/users", post(create_user).patch(update_user))
}

/* ---------- USERS ---------- */

// POST /api/users
#[derive(Debug, Deserialize)]
struct CreateUserRequest {
    #[serde(rename = "fullName")]
    full_name: Option<String>,
    email: Option<String>,
    #[serde(rename = "seatID")]
    seat_id: Option<String>,
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let full_name = req.full_name.unwrap_or_default();
    let email = req.email.unwrap_or_default();

    let user_id =
        users::create_user(&state.db, &full_name, &email, req.seat_id.as_deref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": 201, "userID": user_id.to_hex() })),
    ))
}

// PATCH /api/users
#[derive(Debug, Deserialize)]
struct UpdateUserRequest {
    #[serde(rename = "fullName")]
    full_name: Option<String>,
    email: Option<String>,
    #[serde(rename = "newFullName")]
    new_full_name: Option<String>,
    #[serde(rename = "newEmail")]
    new_email: Option<String>,
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let update = UserUpdate::from_parts(
        req.full_name,
        req.email,
        req.new_full_name,
        req.new_email,
    )?;

    users::update_user(&state.db, &update).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "status": 200, "updated": update.changes() })),
    ))
}
