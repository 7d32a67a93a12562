//! Absolute `YYYY-MM-DD HH:MM[:SS]` dates.

use chrono::{Datelike, Timelike};

/// Formats `date` as `YYYY-MM-DD HH:MM`, appending `:SS` when `show_seconds`.
///
/// No zone conversion happens here; pass a value already in the zone the
/// reader expects (see [`super::annotate_timestamp`]).
pub fn format_date<D>(date: &D, show_seconds: bool) -> String
where
    D: Datelike + Timelike,
{
    let mut out = format!(
        "{}-{:02}-{:02} {:02}:{:02}",
        date.year(),
        date.month(),
        date.day(),
        date.hour(),
        date.minute()
    );
    if show_seconds {
        out.push_str(&format!(":{:02}", date.second()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn pads_components() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(format_date(&d, false), "2024-01-05 03:04");
        assert_eq!(format_date(&d, true), "2024-01-05 03:04:05");
    }

    #[test]
    fn zoned_datetime() {
        let d = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(format_date(&d, true), "2023-12-31 23:59:00");
    }
}
