//! Relative time phrases.

/// Offsets whose magnitude is below this render as "Just now".
const JUST_NOW_SECS: u64 = 15;

/// At most this many unit terms are kept, largest first.
const MAX_TERMS: usize = 3;

const UNITS: [(&str, u64); 7] = [
    ("year", 365 * 24 * 60 * 60),
    ("month", 30 * 24 * 60 * 60),
    ("week", 7 * 24 * 60 * 60),
    ("day", 24 * 60 * 60),
    ("hour", 60 * 60),
    ("minute", 60),
    ("second", 1),
];

/// Formats `seconds` (`now - event`) as a human phrase.
///
/// Past events read "1 hour 1 minute ago", future events (negative offsets)
/// read "After 1 day 1 hour". Offsets under 15 seconds in either direction
/// collapse to "Just now".
pub fn format_time_difference(seconds: i64) -> String {
    let (prefix, suffix) = if seconds < 0 {
        ("After ", "")
    } else {
        ("", " ago")
    };
    let mut remaining = seconds.unsigned_abs();
    if remaining < JUST_NOW_SECS {
        return "Just now".to_string();
    }

    let mut parts: Vec<String> = Vec::with_capacity(MAX_TERMS);
    for (name, scale) in UNITS {
        let count = remaining / scale;
        if count > 0 {
            remaining -= count * scale;
            if parts.len() < MAX_TERMS {
                let plural = if count == 1 { "" } else { "s" };
                parts.push(format!("{count} {name}{plural}"));
            }
        }
    }

    format!("{prefix}{}{suffix}", parts.join(" "))
}
