pub mod auth;
pub mod booking_store;
pub mod calendar;
pub mod controller;
pub mod draft_form;
pub mod selection;
pub mod session;
