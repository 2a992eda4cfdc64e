use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};

use super::bearer_token;
use crate::errors::AppError;
use crate::state::AppState;

// GET /calendar/:room  (e.g. /calendar/Room%203.ics)
pub async fn room_feed(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(raw_room): Path<String>,
) -> Result<Response, AppError> {
    let room = raw_room.strip_suffix(".ics").unwrap_or(&raw_room);

    let ics = {
        let controller = state.controller.lock().await;
        controller.room_feed(bearer_token(&headers), room)?
    };
    let filename = format!("{}.ics", room.replace(' ', "-").to_lowercase());

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        ics,
    )
        .into_response())
}
