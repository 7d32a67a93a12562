//! Title/text pairs for `data-timestamp` elements.

use chrono::TimeZone;

use super::{format_date, format_time_difference};

/// Title attribute placed on the page header date.
pub const HEADER_DATE_TITLE: &str = "In local time";

/// Per-element switches read from `data-timestamp-swap` / `data-timestamp-title`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampFlags {
    /// Show the relative phrase as text and the absolute date (with seconds) as title.
    pub swap: bool,
    /// Only set the title; leave the element text alone.
    pub title_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampDisplay {
    pub title: String,
    /// Replacement element text, `None` when only the title changes.
    pub text: Option<String>,
}

/// Builds the title and text for an element stamped with `timestamp`
/// (seconds since the epoch), rendering the absolute date in `tz`.
///
/// Returns `None` for a zero timestamp or one `tz` cannot represent, in which
/// case the element is left untouched.
pub fn annotate_timestamp<Tz: TimeZone>(
    timestamp: i64,
    now: i64,
    flags: TimestampFlags,
    tz: &Tz,
) -> Option<TimestampDisplay> {
    if timestamp == 0 {
        return None;
    }
    let date = tz.timestamp_opt(timestamp, 0).single()?;
    let absolute = format_date(&date, flags.swap);
    let relative = format_time_difference(now.saturating_sub(timestamp));

    let (title, text) = if flags.swap {
        (absolute, relative)
    } else {
        (relative, absolute)
    };
    Some(TimestampDisplay {
        title,
        text: (!flags.title_only).then_some(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    // 2024-01-05 03:04:05 UTC
    const TS: i64 = 1_704_423_845;

    #[test]
    fn zero_timestamp_is_skipped() {
        assert_eq!(annotate_timestamp(0, TS, TimestampFlags::default(), &Utc), None);
    }

    #[test]
    fn default_shows_date_with_relative_title() {
        let d = annotate_timestamp(TS, TS + 3_661, TimestampFlags::default(), &Utc).unwrap();
        assert_eq!(d.title, "1 hour 1 minute 1 second ago");
        assert_eq!(d.text.as_deref(), Some("2024-01-05 03:04"));
    }

    #[test]
    fn swap_shows_relative_with_seconds_title() {
        let flags = TimestampFlags {
            swap: true,
            title_only: false,
        };
        let d = annotate_timestamp(TS, TS + 120, flags, &Utc).unwrap();
        assert_eq!(d.title, "2024-01-05 03:04:05");
        assert_eq!(d.text.as_deref(), Some("2 minutes ago"));
    }

    #[test]
    fn title_only_leaves_text() {
        let flags = TimestampFlags {
            swap: false,
            title_only: true,
        };
        let d = annotate_timestamp(TS, TS, flags, &Utc).unwrap();
        assert_eq!(d.title, "Just now");
        assert!(d.text.is_none());
    }

    #[test]
    fn renders_in_given_zone() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let d = annotate_timestamp(TS, TS, TimestampFlags::default(), &tz).unwrap();
        assert_eq!(d.text.as_deref(), Some("2024-01-05 12:04"));
    }
}
