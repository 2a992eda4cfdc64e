use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use super::bearer_token;
use crate::errors::AppError;
use crate::models::{Booking, BookingId, DisplayEvent};
use crate::state::AppState;

// GET /api/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    let controller = state.controller.lock().await;
    let bookings = controller.list_bookings(bearer_token(&headers))?;
    Ok(Json(bookings.to_vec()))
}

// GET /api/events
pub async fn visible_events(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<DisplayEvent>>, AppError> {
    let controller = state.controller.lock().await;
    Ok(Json(controller.visible_events(bearer_token(&headers))?))
}

// POST /api/events/:id/toggle
pub async fn toggle_fulfilled(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<BookingId>,
) -> Result<Json<DisplayEvent>, AppError> {
    let mut controller = state.controller.lock().await;
    Ok(Json(controller.toggle_fulfilled(bearer_token(&headers), id)?))
}
