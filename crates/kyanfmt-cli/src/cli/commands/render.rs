//! `kyanfmt render [path]` – Markdown to HTML with the tracker's rules.

use anyhow::{Context, Result};
use kyanfmt_core::config::KyanfmtConfig;
use kyanfmt_core::markdown::{html_decode, RenderTarget, Renderer};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct RenderArgs {
    pub path: Option<PathBuf>,
    pub inline: bool,
    pub no_images: bool,
    pub decode: bool,
}

pub fn run_render(cfg: &KyanfmtConfig, args: RenderArgs) -> Result<()> {
    let source = match &args.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };
    print!("{}", render_source(cfg, &source, &args)?);
    Ok(())
}

fn render_source(cfg: &KyanfmtConfig, source: &str, args: &RenderArgs) -> Result<String> {
    let source = if args.decode {
        html_decode(source)
    } else {
        source.to_string()
    };
    let renderer = Renderer::from_config(cfg)?;
    let target = RenderTarget {
        inline: args.inline,
        images: !args.no_images,
    };
    Ok(renderer.render_with(source.trim(), target))
}
