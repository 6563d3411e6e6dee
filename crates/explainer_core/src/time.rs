//! Timestamp and identifier helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string with millisecond precision.
///
/// # Examples
///
/// ```
/// let ts = explainer_core::timestamp_now();
/// assert!(ts.ends_with('Z'));
/// ```
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}

/// Format a UTC time as an RFC 3339 string with millisecond precision.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fresh random identifier (UUID v4).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Timestamp with `:` and `.` replaced so it can be embedded in a file name.
///
/// # Examples
///
/// ```
/// use explainer_core::file_safe_timestamp;
///
/// assert_eq!(
///     file_safe_timestamp("2026-10-18T09:30:00.123Z"),
///     "2026-10-18T09-30-00-123Z"
/// );
/// ```
pub fn file_safe_timestamp(timestamp: &str) -> String {
    timestamp.replace([':', '.'], "-")
}
