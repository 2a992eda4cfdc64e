use chrono::NaiveDateTime;

use crate::errors::AppError;
use crate::models::{Booking, BookingId, DisplayEvent, Draft, Room, RoomDirectory, SessionStatus, SessionToken};
use crate::services::auth::Authenticator;
use crate::services::booking_store::BookingStore;
use crate::services::calendar;
use crate::services::draft_form::{DraftForm, SubmitOutcome};
use crate::services::selection::SelectionView;
use crate::services::session::SessionGate;

/// Sole owner of the booking UI state. The view layer reads through the
/// accessors and changes state only through the operations below; every
/// operation past login checks the caller's token first.
pub struct BookingController {
    session: SessionGate,
    rooms: RoomDirectory,
    store: BookingStore,
    selection: SelectionView,
    form: DraftForm,
}

impl BookingController {
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            session: SessionGate::new(authenticator),
            rooms: RoomDirectory::new(),
            store: BookingStore::new(),
            selection: SelectionView::new(),
            form: DraftForm::Hidden,
        }
    }

    // ── Session ──

    pub fn session_status(&self, token: &str) -> SessionStatus {
        self.session.status(token)
    }

    pub async fn attempt_login(&mut self, username: &str, password: &str) -> Result<SessionToken, AppError> {
        self.session.attempt_login(username, password).await
    }

    pub fn logout(&mut self, token: &str) -> Result<(), AppError> {
        self.session.logout(token)
    }

    // ── Rooms & selection ──

    pub fn list_rooms(&self, token: &str) -> Result<&[Room], AppError> {
        self.session.authorize(token)?;
        Ok(self.rooms.list_rooms())
    }

    pub fn selected_room(&self, token: &str) -> Result<Option<Room>, AppError> {
        self.session.authorize(token)?;
        Ok(self.selection.selected_room())
    }

    /// `None` clears the selection. Names outside the directory are rejected.
    pub fn select_room(&mut self, token: &str, room: Option<&str>) -> Result<Option<Room>, AppError> {
        self.session.authorize(token)?;
        let room = room.map(RoomDirectory::parse).transpose()?;
        self.selection.select_room(room);

        match room {
            Some(r) => tracing::info!(room = %r, "room selected"),
            None => tracing::info!("room selection cleared"),
        }
        Ok(room)
    }

    // ── Bookings ──

    pub fn list_bookings(&self, token: &str) -> Result<&[Booking], AppError> {
        self.session.authorize(token)?;
        Ok(self.store.list_all())
    }

    pub fn visible_events(&self, token: &str) -> Result<Vec<DisplayEvent>, AppError> {
        self.session.authorize(token)?;
        Ok(self.selection.visible_events(&self.store))
    }

    pub fn toggle_fulfilled(&mut self, token: &str, id: BookingId) -> Result<DisplayEvent, AppError> {
        self.session.authorize(token)?;
        let booking = self.store.toggle_fulfilled(id)?;
        Ok(DisplayEvent::from(&booking))
    }

    pub fn room_feed(&self, token: &str, room: &str) -> Result<String, AppError> {
        self.session.authorize(token)?;
        let room = RoomDirectory::parse(room)?;
        Ok(calendar::generate_room_feed(room, self.store.list_all()))
    }

    // ── Draft form ──

    pub fn draft_form(&self, token: &str) -> Result<&DraftForm, AppError> {
        self.session.authorize(token)?;
        Ok(&self.form)
    }

    pub fn pick_slot(&mut self, token: &str, start: NaiveDateTime, end: NaiveDateTime) -> Result<Draft, AppError> {
        self.session.authorize(token)?;
        self.form.pick_slot(self.selection.selected_room(), start, end)
    }

    pub fn edit_draft(
        &mut self,
        token: &str,
        guest_name: Option<String>,
        contact: Option<String>,
    ) -> Result<&Draft, AppError> {
        self.session.authorize(token)?;
        self.form.edit(guest_name, contact)
    }

    pub fn submit_draft(&mut self, token: &str) -> Result<SubmitOutcome, AppError> {
        self.session.authorize(token)?;
        self.form.submit(self.selection.selected_room(), &mut self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::static_credentials::StaticCredentials;

    fn controller() -> BookingController {
        BookingController::new(Box::new(StaticCredentials::new(
            "admin".to_string(),
            "password".to_string(),
        )))
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    async fn logged_in() -> (BookingController, String) {
        let mut c = controller();
        let token = c.attempt_login("admin", "password").await.unwrap();
        (c, token.as_str().to_string())
    }

    #[tokio::test]
    async fn test_everything_is_gated_before_login() {
        let mut c = controller();

        assert!(matches!(c.list_rooms("x"), Err(AppError::Unauthorized)));
        assert!(matches!(c.select_room("x", Some("Room 1")), Err(AppError::Unauthorized)));
        assert!(matches!(c.visible_events("x"), Err(AppError::Unauthorized)));
        assert!(matches!(c.list_bookings("x"), Err(AppError::Unauthorized)));
        assert!(matches!(c.pick_slot("x", dt("2024-01-01T10:00"), dt("2024-01-01T11:00")), Err(AppError::Unauthorized)));
        assert!(matches!(c.submit_draft("x"), Err(AppError::Unauthorized)));
        assert!(matches!(c.toggle_fulfilled("x", 1), Err(AppError::Unauthorized)));
        assert!(!c.session_status("x").authenticated);
    }

    #[tokio::test]
    async fn test_booking_scenario() {
        let (mut c, token) = logged_in().await;

        c.select_room(&token, Some("Room 1")).unwrap();
        c.pick_slot(&token, dt("2024-01-01T10:00"), dt("2024-01-01T11:00")).unwrap();
        c.edit_draft(&token, Some("Alice".to_string()), Some("555-1234".to_string()))
            .unwrap();
        let outcome = c.submit_draft(&token).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert!(!c.draft_form(&token).unwrap().is_visible());

        let events = c.visible_events(&token).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Alice - Room 1");
        assert!(!events[0].fulfilled);

        let id = events[0].id;
        let toggled = c.toggle_fulfilled(&token, id).unwrap();
        assert_eq!(toggled.title, "✅ Alice - Room 1");
        let toggled = c.toggle_fulfilled(&token, id).unwrap();
        assert_eq!(toggled.title, "Alice - Room 1");

        c.select_room(&token, Some("Room 2")).unwrap();
        assert!(c.visible_events(&token).unwrap().is_empty());
        assert_eq!(c.list_bookings(&token).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_select_unknown_room_keeps_previous_selection() {
        let (mut c, token) = logged_in().await;
        c.select_room(&token, Some("Room 4")).unwrap();

        let err = c.select_room(&token, Some("Penthouse")).unwrap_err();
        assert!(matches!(err, AppError::UnknownRoom(_)));
        assert_eq!(c.selected_room(&token).unwrap().map(|r| r.number()), Some(4));

        assert_eq!(c.select_room(&token, None).unwrap(), None);
        assert_eq!(c.selected_room(&token).unwrap(), None);
    }

    #[tokio::test]
    async fn test_slot_pick_without_room() {
        let (mut c, token) = logged_in().await;
        let err = c.pick_slot(&token, dt("2024-01-01T10:00"), dt("2024-01-01T11:00")).unwrap_err();

        assert!(matches!(err, AppError::NoRoomSelected));
        assert!(!c.draft_form(&token).unwrap().is_visible());
    }

    #[tokio::test]
    async fn test_logout_revokes_access_but_keeps_bookings() {
        let (mut c, token) = logged_in().await;
        c.select_room(&token, Some("Room 1")).unwrap();
        c.pick_slot(&token, dt("2024-01-01T10:00"), dt("2024-01-01T11:00")).unwrap();
        c.edit_draft(&token, Some("Alice".to_string()), Some("555".to_string())).unwrap();
        c.submit_draft(&token).unwrap();

        assert!(matches!(c.logout("stranger"), Err(AppError::Unauthorized)));
        assert_eq!(c.list_bookings(&token).unwrap().len(), 1);

        c.logout(&token).unwrap();
        assert!(matches!(c.list_bookings(&token), Err(AppError::Unauthorized)));

        let token = c.attempt_login("admin", "password").await.unwrap();
        assert_eq!(c.list_bookings(token.as_str()).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_room_feed_validates_room() {
        let (c, token) = logged_in().await;
        assert!(c.room_feed(&token, "Room 2").unwrap().contains("X-WR-CALNAME:Room 2"));
        assert!(matches!(c.room_feed(&token, "Room 99"), Err(AppError::UnknownRoom(_))));
    }
}
