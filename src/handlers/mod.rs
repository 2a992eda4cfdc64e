pub mod app;
pub mod bookings;
pub mod calendar;
pub mod draft;
pub mod health;
pub mod rooms;
pub mod session;

use std::sync::Arc;

use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Token from `Authorization: Bearer <token>`, or empty when absent.
pub(crate) fn bearer_token(headers: &HeaderMap) -> &str {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or("")
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(app::redirect_to_app))
        .route("/health", get(health::health))
        .route("/app", get(app::app_page))
        .route("/api/session", get(session::get_session))
        .route("/api/session/login", post(session::login))
        .route("/api/session/logout", post(session::logout))
        .route("/api/rooms", get(rooms::list_rooms))
        .route(
            "/api/rooms/selected",
            get(rooms::get_selected).put(rooms::select_room),
        )
        .route("/api/bookings", get(bookings::list_bookings))
        .route("/api/events", get(bookings::visible_events))
        .route("/api/events/:id/toggle", post(bookings::toggle_fulfilled))
        .route("/api/slots", post(draft::pick_slot))
        .route("/api/draft", get(draft::get_draft).put(draft::edit_draft))
        .route("/api/draft/submit", post(draft::submit_draft))
        .route("/calendar/:room", get(calendar::room_feed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
