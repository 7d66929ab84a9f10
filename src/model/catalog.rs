//! Static option catalogs for the select-backed form fields.

use std::sync::LazyLock;

/// A bookable meeting room: identifying number plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRoom {
    pub number: String,
    pub name: String,
}

static TOWERS: &[&str] = &["Tower A", "Tower B"];

static FLOORS: LazyLock<Vec<String>> =
    LazyLock::new(|| (3..=27).map(|floor| floor.to_string()).collect());

static MEETING_ROOMS: LazyLock<Vec<MeetingRoom>> = LazyLock::new(|| {
    (1..=10)
        .map(|number| MeetingRoom {
            number: number.to_string(),
            name: format!("Meeting Room №{number}"),
        })
        .collect()
});

/// Returns the two bookable towers.
pub fn towers() -> &'static [&'static str] {
    TOWERS
}

/// Returns the bookable floors, `"3"` through `"27"`, in ascending order.
pub fn floors() -> &'static [String] {
    &FLOORS
}

/// Returns the ten bookable meeting rooms in room-number order.
pub fn meeting_rooms() -> &'static [MeetingRoom] {
    &MEETING_ROOMS
}
