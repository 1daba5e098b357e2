use chrono::{DateTime, Timelike, Utc};

/// Formats a sample timestamp as a wall-clock `HH:MM:SS` label.
#[must_use]
pub fn time_label(time: DateTime<Utc>) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Same as [`time_label`] for unix seconds; returns `None` when out of range.
#[must_use]
pub fn unix_seconds_label(seconds: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(seconds, 0).map(time_label)
}
