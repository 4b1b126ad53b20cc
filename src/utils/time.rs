use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %H:%M";

/// True when every specifier in `format` is one chrono understands.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Formats a message timestamp in the local timezone. An unusable format
/// falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_date(instant: &DateTime<Utc>, format: &str) -> String {
    let local = instant.with_timezone(&Local);
    let mut out = String::new();
    if is_valid_date_format(format) && write!(out, "{}", local.format(format)).is_ok() {
        return out;
    }
    local.format(DEFAULT_DATE_FORMAT).to_string()
}
