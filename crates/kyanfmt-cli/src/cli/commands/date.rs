//! `kyanfmt date <timestamp>` – absolute date in the local zone (or UTC).

use anyhow::{anyhow, Result};
use chrono::{Local, TimeZone, Utc};
use kyanfmt_core::timefmt;

pub fn run_date(timestamp: i64, seconds: bool, utc: bool) -> Result<()> {
    let out = if utc {
        Utc.timestamp_opt(timestamp, 0)
            .single()
            .map(|d| timefmt::format_date(&d, seconds))
    } else {
        Local
            .timestamp_opt(timestamp, 0)
            .single()
            .map(|d| timefmt::format_date(&d, seconds))
    };
    let out = out.ok_or_else(|| anyhow!("timestamp out of range: {timestamp}"))?;
    println!("{out}");
    Ok(())
}
