//! `kyanfmt proxy-image <url>` – show where an embedded image would load from.

use anyhow::{Context, Result};
use kyanfmt_core::config::KyanfmtConfig;
use kyanfmt_core::imgproxy::ImageProxy;
use url::Url;

pub fn run_proxy_image(cfg: &KyanfmtConfig, url: &str, base: Option<&str>) -> Result<()> {
    let base = base.unwrap_or(&cfg.base_url);
    let base = Url::parse(base).with_context(|| format!("invalid base url: {base}"))?;
    let proxy = ImageProxy::from_config(&cfg.image_proxy);
    let out = proxy.resolve(url, &base)?;
    println!("{out}");
    Ok(())
}
