mod booking;
mod catalog;
mod validation;

pub use booking::{BookingDraft, BookingField, FieldValue, SubmissionRecord};
pub use catalog::{MeetingRoom, floors, meeting_rooms, towers};
pub use validation::{ValidationError, validate_draft};
