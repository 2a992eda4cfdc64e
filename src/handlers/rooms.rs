use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::bearer_token;
use crate::errors::AppError;
use crate::models::Room;
use crate::state::AppState;

// GET /api/rooms
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Room>>, AppError> {
    let controller = state.controller.lock().await;
    let rooms = controller.list_rooms(bearer_token(&headers))?;
    Ok(Json(rooms.to_vec()))
}

#[derive(Serialize)]
pub struct SelectedRoomResponse {
    room: Option<Room>,
}

// GET /api/rooms/selected
pub async fn get_selected(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SelectedRoomResponse>, AppError> {
    let controller = state.controller.lock().await;
    let room = controller.selected_room(bearer_token(&headers))?;
    Ok(Json(SelectedRoomResponse { room }))
}

// PUT /api/rooms/selected
#[derive(Deserialize)]
pub struct SelectRoomRequest {
    pub room: Option<String>,
}

pub async fn select_room(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SelectRoomRequest>,
) -> Result<Json<SelectedRoomResponse>, AppError> {
    let mut controller = state.controller.lock().await;
    // the page's "-- Select a Room --" option posts an empty string
    let requested = body.room.as_deref().filter(|r| !r.is_empty());
    let room = controller.select_room(bearer_token(&headers), requested)?;
    Ok(Json(SelectedRoomResponse { room }))
}
