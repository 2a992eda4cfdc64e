use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::room::Room;

pub type BookingId = u64;

pub const FULFILLED_MARKER: &str = "✅";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub guest_name: String,
    pub contact: String,
    pub room: Room,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub fulfilled: bool,
}

impl Booking {
    pub fn title(&self) -> String {
        format!("{} - {}", self.guest_name, self.room)
    }

    /// Title as the calendar shows it, marked once the booking is serviced.
    pub fn display_title(&self) -> String {
        if self.fulfilled {
            format!("{FULFILLED_MARKER} {}", self.title())
        } else {
            self.title()
        }
    }
}

/// A booking as handed to the calendar widget.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayEvent {
    pub id: BookingId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub room: Room,
    pub fulfilled: bool,
}

impl From<&Booking> for DisplayEvent {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id,
            title: b.display_title(),
            start: b.start,
            end: b.end,
            room: b.room,
            fulfilled: b.fulfilled,
        }
    }
}
