use chrono::{DateTime, Local};

/// Formats an RFC 3339 timestamp in local time, or returns it unchanged.
pub(super) fn format_or_raw(raw: &str, format: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |parsed| parsed.with_timezone(&Local).format(format).to_string(),
    )
}
