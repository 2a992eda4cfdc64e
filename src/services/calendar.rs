use chrono::{NaiveDateTime, Utc};

use crate::models::{Booking, Room};

const ICS_DATETIME: &str = "%Y%m%dT%H%M%S";
const ICS_UTC_DATETIME: &str = "%Y%m%dT%H%M%SZ";
const MAX_LINE_OCTETS: usize = 75;

/// Builds an iCalendar feed with one VEVENT per booking in `room`.
pub fn generate_room_feed(room: Room, bookings: &[Booking]) -> String {
    generate_room_feed_at(room, bookings, Utc::now().naive_utc())
}

/// `stamped_at` is the UTC time written to every DTSTAMP.
pub fn generate_room_feed_at(room: Room, bookings: &[Booking], stamped_at: NaiveDateTime) -> String {
    let dtstamp = stamped_at.format(ICS_UTC_DATETIME).to_string();
    let mut ics = String::new();

    push_line(&mut ics, "BEGIN:VCALENDAR");
    push_line(&mut ics, "VERSION:2.0");
    push_line(&mut ics, "PRODID:-//Resort Booking//Room Calendar//EN");
    push_line(&mut ics, &format!("X-WR-CALNAME:{room}"));

    for booking in bookings.iter().filter(|b| b.room == room) {
        push_line(&mut ics, "BEGIN:VEVENT");
        push_line(&mut ics, &format!("UID:{}@resort-booking", booking.id));
        push_line(&mut ics, &format!("DTSTAMP:{dtstamp}"));
        push_line(&mut ics, &format!("DTSTART:{}", booking.start.format(ICS_DATETIME)));
        push_line(&mut ics, &format!("DTEND:{}", booking.end.format(ICS_DATETIME)));
        push_line(&mut ics, &format!("SUMMARY:{}", escape_text(&booking.display_title())));
        push_line(&mut ics, &format!("DESCRIPTION:{}", escape_text(&booking.contact)));
        push_line(&mut ics, "END:VEVENT");
    }

    push_line(&mut ics, "END:VCALENDAR");
    ics
}

// RFC 5545 section 3.1: fold after 75 octets, never inside a UTF-8 sequence
fn push_line(ics: &mut String, line: &str) {
    let mut octets = 0;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if octets + width > MAX_LINE_OCTETS {
            ics.push_str("\r\n ");
            // the leading space counts toward the continuation line
            octets = 1;
        }
        ics.push(ch);
        octets += width;
    }
    ics.push_str("\r\n");
}

// RFC 5545 section 3.3.11
fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
        .replace('\r', "")
}
