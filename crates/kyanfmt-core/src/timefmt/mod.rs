//! Timestamp formatting for display.
//!
//! Relative phrases ("3 days ago", "After 2 hours"), absolute local dates,
//! countdowns for `data-until` elements and the title/text pairing used by
//! `data-timestamp` elements. Everything here is pure; callers own the clock
//! and re-invoke on their own interval.

mod absolute;
mod annotate;
mod countdown;
mod relative;

pub use absolute::format_date;
pub use annotate::{annotate_timestamp, TimestampDisplay, TimestampFlags, HEADER_DATE_TITLE};
pub use countdown::{format_countdown, seconds_remaining};
pub use relative::format_time_difference;
