//! Markdown rendering for descriptions and comments.
//!
//! Wraps `pulldown-cmark` with the options the tracker pages use (no raw
//! HTML, hard line breaks, linkified bare URLs, smart punctuation, GFM tables)
//! and a [`Rules`] chain for overriding how tables, links and images open.

mod escape;
mod linkify;
mod render;
mod rules;
mod typography;

pub use escape::{escape_href, escape_html, html_decode};
pub use linkify::{find_urls, Found};
pub use rules::{
    HtmlTag, ImageProxyRule, LinkRelRule, RuleKind, Rules, TableClassRule, TagRule, LINK_REL,
};

use anyhow::{Context, Result};
use url::Url;

use crate::config::{KyanfmtConfig, MarkdownConfig};
use crate::imgproxy::ImageProxy;

/// Per-call rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTarget {
    /// Skip the paragraph wrapper (`markdown-text-inline`).
    pub inline: bool,
    /// Render image syntax as images; when off, `![alt](src)` reads as `!` plus a link.
    pub images: bool,
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self {
            inline: false,
            images: true,
        }
    }
}

pub struct Renderer {
    options: MarkdownConfig,
    rules: Rules,
}

impl Renderer {
    /// Renderer with no rule overrides.
    pub fn bare(options: MarkdownConfig) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Renderer with the tracker's rules: styled tables, `rel` on links and,
    /// when enabled, proxied image sources.
    pub fn from_config(cfg: &KyanfmtConfig) -> Result<Self> {
        let mut renderer = Self::bare(cfg.markdown);
        renderer.rules.push(RuleKind::TableOpen, TableClassRule);
        renderer.rules.push(RuleKind::LinkOpen, LinkRelRule);
        if cfg.markdown.proxy_images {
            let base = Url::parse(&cfg.base_url)
                .with_context(|| format!("invalid base_url: {}", cfg.base_url))?;
            let proxy = ImageProxy::from_config(&cfg.image_proxy);
            renderer
                .rules
                .push(RuleKind::Image, ImageProxyRule::new(proxy, base));
        }
        Ok(renderer)
    }

    pub fn options(&self) -> MarkdownConfig {
        self.options
    }

    pub fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }

    /// Block rendering.
    pub fn render(&self, text: &str) -> String {
        self.render_with(text, RenderTarget::default())
    }

    /// Inline rendering, no surrounding `<p>`.
    pub fn render_inline(&self, text: &str) -> String {
        self.render_with(
            text,
            RenderTarget {
                inline: true,
                images: true,
            },
        )
    }

    pub fn render_with(&self, text: &str, target: RenderTarget) -> String {
        render::to_html(text, self.options, target, &self.rules)
    }
}
