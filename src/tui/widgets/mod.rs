//! Reusable TUI widgets.

pub mod confetti;
pub mod field_row;
pub mod picker;
pub mod select;

pub use confetti::draw_confetti;
pub use field_row::{ROW_HEIGHT, draw_field_row};
pub use select::{Select, SelectItem};
