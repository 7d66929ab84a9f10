//! Actions returned by the booking screen's event handler.

use crate::model::SubmissionRecord;

/// An action the booking screen returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state: the confetti flag, the
/// journal, and the quit flag.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No app-level state change needed.
    None,
    /// A validated submission: toggle the celebration and journal the record.
    Submit(SubmissionRecord),
    /// Quit the application.
    Quit,
}
