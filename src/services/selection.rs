use crate::models::{DisplayEvent, Room};
use crate::services::booking_store::BookingStore;

/// Which room the calendar is scoped to. Filtering happens on read, so
/// switching rooms never touches the store.
#[derive(Debug, Default)]
pub struct SelectionView {
    selected_room: Option<Room>,
}

impl SelectionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_room(&self) -> Option<Room> {
        self.selected_room
    }

    pub fn select_room(&mut self, room: Option<Room>) {
        self.selected_room = room;
    }

    /// Nothing is visible until a room is selected.
    pub fn visible_events(&self, store: &BookingStore) -> Vec<DisplayEvent> {
        let Some(selected) = self.selected_room else {
            return Vec::new();
        };

        store
            .list_all()
            .iter()
            .filter(|b| b.room == selected)
            .map(DisplayEvent::from)
            .collect()
    }
}
