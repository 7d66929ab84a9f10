//! Date and time pickers.
//!
//! A picker value is always either unset or a well-formed chrono value;
//! stepping is the only way to change it, so malformed temporal input is
//! unrepresentable.

use chrono::{Duration, Local, NaiveDate, NaiveTime};

/// Minutes moved per time-picker step.
const TIME_STEP_MINUTES: i64 = 15;

/// Value a time picker starts from when stepped while unset.
fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid hardcoded time")
}

/// Steps a date value one day. An unset picker initializes to today.
pub fn step_date(current: Option<NaiveDate>, forward: bool) -> Option<NaiveDate> {
    let date = match current {
        None => Local::now().date_naive(),
        Some(d) if forward => d.succ_opt().unwrap_or(d),
        Some(d) => d.pred_opt().unwrap_or(d),
    };
    Some(date)
}

/// Steps a time value by fifteen minutes, wrapping around midnight.
/// An unset picker initializes to 09:00.
pub fn step_time(current: Option<NaiveTime>, forward: bool) -> Option<NaiveTime> {
    let time = match current {
        None => default_time(),
        Some(t) if forward => t + Duration::minutes(TIME_STEP_MINUTES),
        Some(t) => t - Duration::minutes(TIME_STEP_MINUTES),
    };
    Some(time)
}

/// Formats a picker date for display, `""` while unset.
pub fn display_date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Formats a picker time for display (zero-padded `HH:MM`), `""` while unset.
pub fn display_time(value: Option<NaiveTime>) -> String {
    value
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}
