pub mod booking;
pub mod draft;
pub mod room;
pub mod session;

pub use booking::{Booking, BookingId, DisplayEvent};
pub use draft::Draft;
pub use room::{Room, RoomDirectory};
pub use session::{SessionStatus, SessionToken};
