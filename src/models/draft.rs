use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unsaved booking details being edited after a slot pick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Draft {
    pub guest_name: String,
    pub contact: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Draft {
    pub fn for_slot(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            guest_name: String::new(),
            contact: String::new(),
            start,
            end,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.guest_name.is_empty() && !self.contact.is_empty()
    }
}
