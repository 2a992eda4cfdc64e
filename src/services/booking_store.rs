use crate::errors::AppError;
use crate::models::{Booking, BookingId, Draft, Room};

/// Append-only list of bookings across all rooms. Records are never
/// removed; only their `fulfilled` flag changes.
#[derive(Debug)]
pub struct BookingStore {
    bookings: Vec<Booking>,
    next_id: BookingId,
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add_booking(&mut self, draft: &Draft, room: Room) -> Result<Booking, AppError> {
        if !draft.is_complete() {
            return Err(AppError::IncompleteBooking);
        }

        let booking = Booking {
            id: self.next_id,
            guest_name: draft.guest_name.clone(),
            contact: draft.contact.clone(),
            room,
            start: draft.start,
            end: draft.end,
            fulfilled: false,
        };
        self.next_id += 1;
        self.bookings.push(booking.clone());

        tracing::info!(id = booking.id, room = %room, guest = %booking.guest_name, "booking created");
        Ok(booking)
    }

    pub fn toggle_fulfilled(&mut self, id: BookingId) -> Result<Booking, AppError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::BookingNotFound(id))?;
        booking.fulfilled = !booking.fulfilled;

        tracing::info!(id, fulfilled = booking.fulfilled, "booking fulfillment toggled");
        Ok(booking.clone())
    }

    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn list_all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}
