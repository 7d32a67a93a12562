//! `kyanfmt ago <seconds>`

use kyanfmt_core::timefmt;

pub fn run_ago(seconds: i64) {
    println!("{}", timefmt::format_time_difference(seconds));
}
