use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::BookingId;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unauthorized")]
    Unauthorized,

    #[error("Please select a room first.")]
    NoRoomSelected,

    #[error("unknown room: {0}")]
    UnknownRoom(String),

    #[error("guest name and contact are required")]
    IncompleteBooking,

    #[error("no booking draft is open")]
    DraftNotOpen,

    #[error("booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("authentication provider error: {0}")]
    AuthProvider(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NoRoomSelected => StatusCode::BAD_REQUEST,
            AppError::UnknownRoom(_) => StatusCode::BAD_REQUEST,
            AppError::IncompleteBooking => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DraftNotOpen => StatusCode::CONFLICT,
            AppError::BookingNotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthProvider(_) => StatusCode::BAD_GATEWAY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
