use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::JournalError;
use crate::model::SubmissionRecord;

/// Identifier assigned to a journaled booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingId(String);

impl BookingId {
    /// Derives an id from the booked tower, room, and submission instant,
    /// e.g. `tower-a-r3-20240501T091500`.
    fn derive(record: &SubmissionRecord, submitted_at: DateTime<Utc>) -> Self {
        let tower = record.tower.to_lowercase().replace(' ', "-");
        let stamp = submitted_at.format("%Y%m%dT%H%M%S");
        Self(format!("{tower}-r{}-{stamp}", record.meeting_room))
    }
}

#[mutants::skip]
impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outbound seam for booking submissions.
///
/// The only implementation in scope is the local [`Journal`]; a real booking
/// backend would implement this with an API call instead.
pub trait SubmissionSink {
    /// Emits one submission record, returning the id it was filed under.
    fn submit(&self, record: &SubmissionRecord) -> Result<BookingId, JournalError>;
}

/// One journaled submission: the record plus journal metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBooking {
    pub booking_id: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: SubmissionRecord,
}

/// Append-only JSONL journal of submitted bookings, one record per line.
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Creates a journal in the XDG data directory
    /// (`~/.local/share/huddle/bookings.jsonl`), creating the directory if
    /// it does not already exist.
    pub fn new() -> Result<Self, JournalError> {
        let data_dir = dirs::data_dir().ok_or(JournalError::NoDataDir)?;
        Self::with_path(data_dir.join("huddle"))
    }

    /// Creates a journal rooted at the given directory.
    pub fn with_path(dir: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join("bookings.jsonl"),
        })
    }

    /// Reads back every journaled booking in submission order.
    ///
    /// A journal that has never been written to reads as empty.
    pub fn entries(&self) -> Result<Vec<StoredBooking>, JournalError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = fs::File::open(&self.path)?;
        let reader = BufReader::new(file);
        reader
            .lines()
            .map(|line| {
                let line = line?;
                serde_json::from_str(&line).map_err(JournalError::Json)
            })
            .collect()
    }
}

impl SubmissionSink for Journal {
    fn submit(&self, record: &SubmissionRecord) -> Result<BookingId, JournalError> {
        let submitted_at = Utc::now();
        let booking_id = BookingId::derive(record, submitted_at);

        let entry = StoredBooking {
            booking_id: booking_id.to_string(),
            submitted_at,
            record: record.clone(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        serde_json::to_writer(&mut file, &entry)?;
        writeln!(file)?;

        Ok(booking_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use quickcheck_macros::quickcheck;
    use tempfile::tempdir;

    use super::*;

    fn make_record() -> SubmissionRecord {
        SubmissionRecord {
            tower: "Tower A".to_string(),
            tower_floor: "10".to_string(),
            meeting_room: "3".to_string(),
            comment: "Need projector".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            start_time: "9:0".to_string(),
            end_time: "10:0".to_string(),
        }
    }

    fn make_journal() -> (tempfile::TempDir, Journal) {
        let dir = tempdir().unwrap();
        let journal = Journal::with_path(dir.path()).unwrap();
        (dir, journal)
    }

    #[test]
    fn submit_then_read_back() {
        let (_dir, journal) = make_journal();
        let record = make_record();
        let id = journal.submit(&record).unwrap();

        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].booking_id, id.to_string());
        assert_eq!(entries[0].record, record);
    }

    #[test]
    fn submissions_append_in_order() {
        let (_dir, journal) = make_journal();
        let mut second = make_record();
        second.meeting_room = "7".to_string();

        journal.submit(&make_record()).unwrap();
        journal.submit(&second).unwrap();

        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].record.meeting_room, "3");
        assert_eq!(entries[1].record.meeting_room, "7");
    }

    #[quickcheck]
    fn n_submits_yield_n_entries(n: u8) -> bool {
        let n = n.min(20) as usize;
        let (_dir, journal) = make_journal();
        for _ in 0..n {
            journal.submit(&make_record()).unwrap();
        }
        journal.entries().unwrap().len() == n
    }

    #[test]
    fn empty_journal_reads_as_empty() {
        let (_dir, journal) = make_journal();
        assert_eq!(journal.entries().unwrap().len(), 0);
    }

    #[test]
    fn booking_id_names_tower_and_room() {
        let submitted_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 15, 0).unwrap();
        let id = BookingId::derive(&make_record(), submitted_at);
        assert_eq!(id.to_string(), "tower-a-r3-20240501T091500");
    }

    #[test]
    fn corrupt_line_returns_json_error() {
        let (dir, journal) = make_journal();
        fs::write(dir.path().join("bookings.jsonl"), "{not json}\n").unwrap();
        let result = journal.entries();
        assert!(matches!(result, Err(JournalError::Json(_))));
    }

    #[test]
    fn with_path_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let _journal = Journal::with_path(&nested).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn journal_line_is_flattened_json() {
        let (dir, journal) = make_journal();
        journal.submit(&make_record()).unwrap();

        let raw = fs::read_to_string(dir.path().join("bookings.jsonl")).unwrap();
        let value: serde_json::Value = serde_json::from_str(raw.trim()).unwrap();
        // Record fields sit at the top level next to the journal metadata.
        assert_eq!(value["tower"], "Tower A");
        assert_eq!(value["start_time"], "9:0");
        assert!(value["booking_id"].is_string());
    }
}
