//! CLI for kyanfmt.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kyanfmt_core::config;
use std::path::PathBuf;

use commands::{
    run_ago, run_annotate, run_config_path, run_countdown, run_date, run_proxy_image, run_render,
    run_theme, RenderArgs,
};

/// Top-level CLI for kyanfmt.
#[derive(Debug, Parser)]
#[command(name = "kyanfmt")]
#[command(about = "kyanfmt: timestamps, image proxying and Markdown for the tracker front end", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/kyanfmt/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Relative phrase for an offset in seconds (negative = in the future).
    Ago {
        #[arg(allow_hyphen_values = true)]
        seconds: i64,
    },

    /// Absolute date for a Unix timestamp.
    Date {
        timestamp: i64,
        /// Append seconds.
        #[arg(long)]
        seconds: bool,
        /// Render in UTC instead of the local zone.
        #[arg(long)]
        utc: bool,
    },

    /// Title and text for a `data-timestamp` element.
    Annotate {
        timestamp: i64,
        /// Current Unix time (defaults to the system clock).
        #[arg(long, value_name = "TS")]
        now: Option<i64>,
        /// Relative text with absolute title.
        #[arg(long)]
        swap: bool,
        /// Only produce the title.
        #[arg(long)]
        title_only: bool,
        #[arg(long)]
        utc: bool,
    },

    /// Countdown text for a `data-until` element.
    Countdown {
        label: String,
        until: i64,
        #[arg(long, value_name = "TS")]
        now: Option<i64>,
    },

    /// Proxied form of an image URL.
    ProxyImage {
        url: String,
        /// Document URL relative image paths resolve against (defaults to config base_url).
        #[arg(long)]
        base: Option<String>,
    },

    /// Render Markdown to HTML (reads stdin when no path is given).
    Render {
        path: Option<PathBuf>,
        /// No paragraph wrapper.
        #[arg(long)]
        inline: bool,
        /// Render image syntax as links.
        #[arg(long)]
        no_images: bool,
        /// Decode HTML entities in the input first.
        #[arg(long)]
        decode: bool,
    },

    /// Show or toggle the stored theme.
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },

    /// Print the config file location.
    ConfigPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Ago { seconds } => run_ago(seconds),
            CliCommand::Date {
                timestamp,
                seconds,
                utc,
            } => run_date(timestamp, seconds, utc)?,
            CliCommand::Annotate {
                timestamp,
                now,
                swap,
                title_only,
                utc,
            } => run_annotate(timestamp, now, swap, title_only, utc),
            CliCommand::Countdown { label, until, now } => run_countdown(&label, until, now),
            CliCommand::ProxyImage { url, base } => run_proxy_image(&cfg, &url, base.as_deref())?,
            CliCommand::Render {
                path,
                inline,
                no_images,
                decode,
            } => run_render(
                &cfg,
                RenderArgs {
                    path,
                    inline,
                    no_images,
                    decode,
                },
            )?,
            CliCommand::Theme { action } => run_theme(action == ThemeAction::Toggle)?,
            CliCommand::ConfigPath => {
                let path = match cli.config {
                    Some(p) => p,
                    None => config::config_path()?,
                };
                run_config_path(&path);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
