//! CLI command handlers. Each command is in its own file.

mod ago;
mod annotate;
mod config_path;
mod countdown;
mod date;
mod proxy_image;
mod render;
mod theme;

pub use ago::run_ago;
pub use annotate::run_annotate;
pub use config_path::run_config_path;
pub use countdown::run_countdown;
pub use date::run_date;
pub use proxy_image::run_proxy_image;
pub use render::{run_render, RenderArgs};
pub use theme::run_theme;

/// Current Unix time in seconds.
pub(crate) fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
