use tokio::sync::Mutex;

use crate::services::controller::BookingController;

/// Handlers hold the controller lock for the whole operation, so requests
/// are applied one at a time in arrival order.
pub struct AppState {
    pub controller: Mutex<BookingController>,
}

impl AppState {
    pub fn new(controller: BookingController) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }
}
