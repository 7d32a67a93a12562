use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::imgproxy::{DEFAULT_ALLOWLIST, DEFAULT_RELAY_URL, DEFAULT_SHARD_COUNT, DEFAULT_SHARD_DOMAIN};

/// Image relay settings (`[image_proxy]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProxyConfig {
    /// Generic relay used for URLs the sharded relay cannot serve.
    pub relay_url: String,
    /// Domain under which the `i<N>` shard hosts live.
    pub shard_domain: String,
    /// Number of shard hosts (`i0` .. `i<N-1>`).
    pub shard_count: u32,
    /// Pass every image URL through untouched, for clients without URL parsing.
    pub legacy_passthrough: bool,
    /// Registrable domains served directly.
    pub allowlist: Vec<String>,
}

impl Default for ImageProxyConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_string(),
            shard_domain: DEFAULT_SHARD_DOMAIN.to_string(),
            shard_count: DEFAULT_SHARD_COUNT,
            legacy_passthrough: false,
            allowlist: DEFAULT_ALLOWLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Markdown renderer switches (`[markdown]` in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Rewrite image sources through the image proxy.
    pub proxy_images: bool,
    /// Turn bare http(s) URLs into links.
    pub linkify: bool,
    /// Smart quotes and dashes.
    pub typographer: bool,
    /// Render single newlines as `<br />`.
    pub breaks: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            proxy_images: true,
            linkify: true,
            typographer: true,
            breaks: true,
        }
    }
}

/// Global configuration loaded from `~/.config/kyanfmt/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KyanfmtConfig {
    /// Document URL relative image and link paths resolve against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub image_proxy: ImageProxyConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Default for KyanfmtConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_proxy: ImageProxyConfig::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://localhost/".to_string()
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("kyanfmt")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default location, creating it if missing.
pub fn load_or_init() -> Result<KyanfmtConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, writing a default file if none exists.
pub fn load_or_init_at(path: &Path) -> Result<KyanfmtConfig> {
    if !path.exists() {
        let default_cfg = KyanfmtConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: KyanfmtConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ImageProxyConfig::default();
        assert_eq!(cfg.relay_url, "https://wsrv.nl/");
        assert_eq!(cfg.shard_domain, "wp.com");
        assert_eq!(cfg.shard_count, 3);
        assert!(!cfg.legacy_passthrough);
        assert!(cfg.allowlist.iter().any(|d| d == "imgur.com"));
        assert!(MarkdownConfig::default().proxy_images);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: KyanfmtConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.base_url, "https://localhost/");
        assert_eq!(cfg.image_proxy.shard_count, 3);
        assert!(cfg.markdown.linkify);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_url = "https://tracker.example.org/"

            [image_proxy]
            shard_count = 5
            allowlist = ["example.net"]

            [markdown]
            proxy_images = false
            typographer = false
        "#;
        let cfg: KyanfmtConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_url, "https://tracker.example.org/");
        assert_eq!(cfg.image_proxy.shard_count, 5);
        assert_eq!(cfg.image_proxy.allowlist, vec!["example.net".to_string()]);
        assert_eq!(cfg.image_proxy.relay_url, "https://wsrv.nl/");
        assert!(!cfg.markdown.proxy_images);
        assert!(!cfg.markdown.typographer);
        assert!(cfg.markdown.breaks);
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.base_url, created.base_url);
        assert_eq!(loaded.image_proxy.allowlist, created.image_proxy.allowlist);
        assert_eq!(loaded.markdown, created.markdown);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "image_proxy = 3").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
