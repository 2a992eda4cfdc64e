use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::bearer_token;
use crate::errors::AppError;
use crate::models::{Booking, Draft};
use crate::services::draft_form::{DraftForm, SubmitOutcome};
use crate::state::AppState;

// GET /api/draft
pub async fn get_draft(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DraftForm>, AppError> {
    let controller = state.controller.lock().await;
    Ok(Json(controller.draft_form(bearer_token(&headers))?.clone()))
}

// POST /api/slots
#[derive(Deserialize)]
pub struct SlotRequest {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

pub async fn pick_slot(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SlotRequest>,
) -> Result<Json<Draft>, AppError> {
    let mut controller = state.controller.lock().await;
    let draft = controller.pick_slot(bearer_token(&headers), body.start, body.end)?;
    Ok(Json(draft))
}

// PUT /api/draft
#[derive(Deserialize)]
pub struct EditDraftRequest {
    pub guest_name: Option<String>,
    pub contact: Option<String>,
}

pub async fn edit_draft(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<EditDraftRequest>,
) -> Result<Json<Draft>, AppError> {
    let mut controller = state.controller.lock().await;
    let draft = controller.edit_draft(bearer_token(&headers), body.guest_name, body.contact)?;
    Ok(Json(draft.clone()))
}

// POST /api/draft/submit
#[derive(Serialize)]
pub struct SubmitResponse {
    saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    booking: Option<Booking>,
    form: DraftForm,
}

pub async fn submit_draft(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SubmitResponse>, AppError> {
    let token = bearer_token(&headers);
    let mut controller = state.controller.lock().await;

    let booking = match controller.submit_draft(token)? {
        SubmitOutcome::Saved(booking) => Some(booking),
        SubmitOutcome::Rejected => None,
    };
    let form = controller.draft_form(token)?.clone();

    Ok(Json(SubmitResponse {
        saved: booking.is_some(),
        booking,
        form,
    }))
}
