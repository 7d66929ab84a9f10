//! The diagnostic sink for submitted bookings: a local JSONL journal.

mod error;
mod sink;

pub use error::JournalError;
pub use sink::{BookingId, Journal, StoredBooking, SubmissionSink};
