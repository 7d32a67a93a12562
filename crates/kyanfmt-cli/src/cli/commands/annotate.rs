//! `kyanfmt annotate <timestamp>` – title/text pair for a timestamped element.

use chrono::{Local, Utc};
use kyanfmt_core::timefmt::{self, TimestampDisplay, TimestampFlags};

use super::unix_now;

pub fn run_annotate(timestamp: i64, now: Option<i64>, swap: bool, title_only: bool, utc: bool) {
    let now = now.unwrap_or_else(unix_now);
    let flags = TimestampFlags { swap, title_only };
    let display = if utc {
        timefmt::annotate_timestamp(timestamp, now, flags, &Utc)
    } else {
        timefmt::annotate_timestamp(timestamp, now, flags, &Local)
    };
    match display {
        Some(TimestampDisplay { title, text }) => {
            println!("title: {title}");
            if let Some(text) = text {
                println!("text: {text}");
            }
        }
        None => tracing::info!("timestamp {timestamp} left untouched"),
    }
}
