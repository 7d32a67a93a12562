//! Countdowns for elements carrying a `data-until` deadline.

/// Seconds left until `until`, clamped at zero.
pub fn seconds_remaining(until: i64, now: i64) -> u64 {
    until.saturating_sub(now).max(0) as u64
}

/// Renders `"<label> (<m>:<ss>)"` for the time left until `until`.
///
/// Minutes are not padded and are not rolled into hours, so long countdowns
/// read e.g. `"Edit (125:07)"`.
pub fn format_countdown(label: &str, until: i64, now: i64) -> String {
    let diff = seconds_remaining(until, now);
    format!("{label} ({}:{:02})", diff / 60, diff % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_and_padded_seconds() {
        assert_eq!(format_countdown("Edit", 1_000 + 125, 1_000), "Edit (2:05)");
    }

    #[test]
    fn expired_clamps_to_zero() {
        assert_eq!(format_countdown("Edit", 10, 500), "Edit (0:00)");
        assert_eq!(seconds_remaining(i64::MIN, i64::MAX), 0);
    }

    #[test]
    fn minutes_not_rolled_into_hours() {
        assert_eq!(format_countdown("x", 7_527, 0), "x (125:27)");
    }
}
