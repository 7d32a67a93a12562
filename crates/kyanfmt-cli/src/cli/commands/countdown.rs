//! `kyanfmt countdown <label> <until>`

use kyanfmt_core::timefmt;

use super::unix_now;

pub fn run_countdown(label: &str, until: i64, now: Option<i64>) {
    let now = now.unwrap_or_else(unix_now);
    println!("{}", timefmt::format_countdown(label, until, now));
}
