use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AppError;

pub const ROOM_COUNT: u8 = 10;

/// A room from the fixed directory. Only constructible through
/// [`RoomDirectory`], so every `Room` in the system is a legal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Room(u8);

impl Room {
    pub fn number(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room {}", self.0)
    }
}

impl Serialize for Room {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Room {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        RoomDirectory::parse(&name).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub struct RoomDirectory {
    rooms: Vec<Room>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self {
            rooms: (1..=ROOM_COUNT).map(Room).collect(),
        }
    }

    pub fn list_rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Accepts exactly the names produced by `Room`'s `Display`, e.g. `"Room 3"`.
    pub fn parse(name: &str) -> Result<Room, AppError> {
        name.strip_prefix("Room ")
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=ROOM_COUNT).contains(n))
            .filter(|n| format!("Room {n}") == name)
            .map(Room)
            .ok_or_else(|| AppError::UnknownRoom(name.to_string()))
    }
}

impl Default for RoomDirectory {
    fn default() -> Self {
        Self::new()
    }
}
