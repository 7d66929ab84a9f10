use thiserror::Error;

use super::booking::{BookingDraft, BookingField};

/// Validation errors surfaced before a submission record is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingRequiredField(BookingField),
}

impl ValidationError {
    /// The field this violation refers to.
    pub fn field(&self) -> BookingField {
        match self {
            Self::MissingRequiredField(field) => *field,
        }
    }
}

/// Checks the draft for unset required fields, reporting every violation at
/// once so the UI can mark all offending fields in a single pass.
///
/// The comment is optional. Start and end time are not checked against each
/// other.
pub fn validate_draft(draft: &BookingDraft) -> Vec<ValidationError> {
    let mut violations = Vec::new();

    if draft.tower.is_empty() {
        violations.push(ValidationError::MissingRequiredField(BookingField::Tower));
    }
    if draft.tower_floor.is_empty() {
        violations.push(ValidationError::MissingRequiredField(
            BookingField::TowerFloor,
        ));
    }
    if draft.meeting_room.is_empty() {
        violations.push(ValidationError::MissingRequiredField(
            BookingField::MeetingRoom,
        ));
    }
    if draft.date.is_none() {
        violations.push(ValidationError::MissingRequiredField(BookingField::Date));
    }
    if draft.start_time.is_none() {
        violations.push(ValidationError::MissingRequiredField(
            BookingField::StartTime,
        ));
    }
    if draft.end_time.is_none() {
        violations.push(ValidationError::MissingRequiredField(BookingField::EndTime));
    }

    violations
}
