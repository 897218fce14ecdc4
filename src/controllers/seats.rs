use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::ServiceError;
use crate::services::bookings;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(list_seats))
        .route("/seats/book", patch(book_seat))
        .route("/seats/release", patch(release_seat))
}

/* ---------- SEATS ---------- */

// Body for both booking and release; seatID is validated by the service
#[derive(Debug, Deserialize)]
struct SeatRequest {
    #[serde(rename = "seatID")]
    seat_id: Option<String>,
}

// GET /api/seats
async fn list_seats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServiceError> {
    let seats = bookings::list_seats(&state.db).await?;

    Ok((StatusCode::OK, Json(json!({ "status": 200, "seats": seats }))))
}

// PATCH /api/seats/book
async fn book_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeatRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let seat_id = req.seat_id.unwrap_or_default();
    bookings::book_seat(&state.db, &seat_id).await?;

    Ok((StatusCode::OK, Json(json!({ "status": 200, "seatID": seat_id }))))
}

// PATCH /api/seats/release
async fn release_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeatRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let seat_id = req.seat_id.unwrap_or_default();
    bookings::release_seat(&state.db, &seat_id).await?;

    Ok((StatusCode::OK, Json(json!({ "status": 200, "seatID": seat_id }))))
}
