use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::bearer_token;
use crate::errors::AppError;
use crate::models::SessionStatus;
use crate::state::AppState;

// GET /api/session
pub async fn get_session(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<SessionStatus> {
    let controller = state.controller.lock().await;
    Json(controller.session_status(bearer_token(&headers)))
}

// POST /api/session/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    token: String,
    username: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let mut controller = state.controller.lock().await;
    let token = controller.attempt_login(&body.username, &body.password).await?;

    Ok(Json(LoginResponse {
        token: token.as_str().to_string(),
        username: body.username,
    }))
}

// POST /api/session/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    state.controller.lock().await.logout(bearer_token(&headers))?;
    Ok(Json(serde_json::json!({"ok": true})))
}
