use chrono::NaiveDateTime;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{Booking, Draft, Room};
use crate::services::booking_store::BookingStore;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "draft", rename_all = "lowercase")]
pub enum DraftForm {
    #[default]
    Hidden,
    Visible(Draft),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(Booking),
    /// A required field was empty. The form stays open and nothing is
    /// reported to the user.
    Rejected,
}

impl DraftForm {
    pub fn is_visible(&self) -> bool {
        matches!(self, DraftForm::Visible(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            DraftForm::Visible(draft) => Some(draft),
            DraftForm::Hidden => None,
        }
    }

    /// Opens the form for a picked slot. An already open draft is replaced
    /// without confirmation.
    pub fn pick_slot(
        &mut self,
        selected_room: Option<Room>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Draft, AppError> {
        let room = selected_room.ok_or(AppError::NoRoomSelected)?;

        if self.is_visible() {
            tracing::debug!(room = %room, "slot re-picked, discarding open draft");
        }
        let draft = Draft::for_slot(start, end);
        *self = DraftForm::Visible(draft.clone());
        Ok(draft)
    }

    pub fn edit(&mut self, guest_name: Option<String>, contact: Option<String>) -> Result<&Draft, AppError> {
        let DraftForm::Visible(draft) = self else {
            return Err(AppError::DraftNotOpen);
        };

        if let Some(name) = guest_name {
            draft.guest_name = name;
        }
        if let Some(contact) = contact {
            draft.contact = contact;
        }
        tracing::debug!(guest = %draft.guest_name, "draft edited");
        Ok(&*draft)
    }

    pub fn submit(&mut self, selected_room: Option<Room>, store: &mut BookingStore) -> Result<SubmitOutcome, AppError> {
        let DraftForm::Visible(draft) = self else {
            return Err(AppError::DraftNotOpen);
        };

        if !draft.is_complete() {
            tracing::debug!("draft submitted with empty fields, ignoring");
            return Ok(SubmitOutcome::Rejected);
        }

        let room = selected_room.ok_or(AppError::NoRoomSelected)?;
        let booking = store.add_booking(draft, room)?;
        *self = DraftForm::Hidden;
        Ok(SubmitOutcome::Saved(booking))
    }
}
