pub mod config;
pub mod logging;

pub mod imgproxy;
pub mod markdown;
pub mod page;
pub mod theme;
pub mod timefmt;
pub mod upload;
