//! TUI screen implementations.

pub mod booking;

pub use booking::{BookingState, draw_booking};
