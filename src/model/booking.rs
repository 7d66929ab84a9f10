//! The booking form record and the submission record derived from it.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, validate_draft};

/// Identifier for one booking form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Tower,
    TowerFloor,
    MeetingRoom,
    Comment,
    Date,
    StartTime,
    EndTime,
}

impl BookingField {
    /// Human-readable field name, used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tower => "tower",
            Self::TowerFloor => "floor",
            Self::MeetingRoom => "meeting room",
            Self::Comment => "comment",
            Self::Date => "date",
            Self::StartTime => "start time",
            Self::EndTime => "end time",
        }
    }
}

#[mutants::skip]
impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed update for exactly one form field.
///
/// Pairing each field with its value type makes an unknown field name a
/// compile-time impossibility; there is no runtime field lookup to get wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Tower(String),
    TowerFloor(String),
    MeetingRoom(String),
    Comment(String),
    Date(Option<NaiveDate>),
    StartTime(Option<NaiveTime>),
    EndTime(Option<NaiveTime>),
}

impl FieldValue {
    /// Returns the identifier of the field this update targets.
    pub fn field(&self) -> BookingField {
        match self {
            Self::Tower(_) => BookingField::Tower,
            Self::TowerFloor(_) => BookingField::TowerFloor,
            Self::MeetingRoom(_) => BookingField::MeetingRoom,
            Self::Comment(_) => BookingField::Comment,
            Self::Date(_) => BookingField::Date,
            Self::StartTime(_) => BookingField::StartTime,
            Self::EndTime(_) => BookingField::EndTime,
        }
    }
}

/// The in-progress booking form: every user-entered field in one record.
///
/// Select-backed fields hold the empty string while unset, otherwise a value
/// from the matching catalog. Temporal fields are `None` while unset. The
/// picker widgets adapt their key events into [`FieldValue`] updates at the
/// screen boundary, so this record stays the single source of truth.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingDraft {
    pub tower: String,
    pub tower_floor: String,
    pub meeting_room: String,
    pub comment: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl BookingDraft {
    /// Applies one field update, leaving every other field untouched.
    pub fn set(&mut self, value: FieldValue) {
        match value {
            FieldValue::Tower(v) => self.tower = v,
            FieldValue::TowerFloor(v) => self.tower_floor = v,
            FieldValue::MeetingRoom(v) => self.meeting_room = v,
            FieldValue::Comment(v) => self.comment = v,
            FieldValue::Date(v) => self.date = v,
            FieldValue::StartTime(v) => self.start_time = v,
            FieldValue::EndTime(v) => self.end_time = v,
        }
    }

    /// Restores the all-unset default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A completed booking, derived from a [`BookingDraft`] at submit time.
///
/// Ephemeral: assembled, handed to the submission sink, discarded.
/// It is never kept as form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub tower: String,
    pub tower_floor: String,
    pub meeting_room: String,
    pub comment: String,
    /// Midnight UTC of the booked date.
    pub date: DateTime<Utc>,
    /// `hour:minute` without zero padding, e.g. `9:5` for 09:05.
    pub start_time: String,
    /// Same format as `start_time`.
    pub end_time: String,
}

impl SubmissionRecord {
    /// Validates the draft and, if it is clean, serializes it into a record.
    ///
    /// All violations are reported at once; no record is built while any
    /// required field is unset, so an unset time can never leak into the
    /// serialized output.
    pub fn assemble(draft: &BookingDraft) -> Result<Self, Vec<ValidationError>> {
        let violations = validate_draft(draft);
        if !violations.is_empty() {
            return Err(violations);
        }

        match (draft.date, draft.start_time, draft.end_time) {
            (Some(date), Some(start), Some(end)) => Ok(Self {
                tower: draft.tower.clone(),
                tower_floor: draft.tower_floor.clone(),
                meeting_room: draft.meeting_room.clone(),
                comment: draft.comment.clone(),
                date: date.and_time(NaiveTime::MIN).and_utc(),
                start_time: format_time(start),
                end_time: format_time(end),
            }),
            // Unreachable after a clean validation pass; kept total.
            _ => Err(vec![ValidationError::MissingRequiredField(
                BookingField::Date,
            )]),
        }
    }
}

/// Formats a time of day as unpadded `hour:minute`.
fn format_time(time: NaiveTime) -> String {
    format!("{}:{}", time.hour(), time.minute())
}
