//! Per-node render rules.
//!
//! A rule receives the opening tag about to be written and the next renderer
//! in the chain. Overrides edit the tag and delegate, or replace the output
//! outright. The innermost renderer is [`HtmlTag::to_html`].

use std::collections::HashMap;

use url::Url;

use super::escape::{escape_href, escape_html};
use crate::imgproxy::ImageProxy;

/// Node types whose opening tag can be overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    TableOpen,
    LinkOpen,
    Image,
}

/// An opening (or void) HTML tag with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTag {
    name: &'static str,
    attrs: Vec<(String, String)>,
}

impl HtmlTag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Appends an attribute without checking for an existing one.
    pub fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    /// Replaces the value of `name`, appending it if absent.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = format!("<{}", self.name);
        for (k, v) in &self.attrs {
            let v = if k == "href" || k == "src" {
                escape_href(v)
            } else {
                escape_html(v)
            };
            out.push_str(&format!(" {k}=\"{v}\""));
        }
        out.push('>');
        out
    }
}

/// Renders a tag, delegating to `next` for the rest of the chain.
pub trait TagRule: Send + Sync {
    fn render(&self, tag: &mut HtmlTag, next: &dyn Fn(&mut HtmlTag) -> String) -> String;
}

impl<F> TagRule for F
where
    F: Fn(&mut HtmlTag, &dyn Fn(&mut HtmlTag) -> String) -> String + Send + Sync,
{
    fn render(&self, tag: &mut HtmlTag, next: &dyn Fn(&mut HtmlTag) -> String) -> String {
        self(tag, next)
    }
}

/// Rule chains keyed by node type. Later rules wrap earlier ones.
#[derive(Default)]
pub struct Rules {
    chains: HashMap<RuleKind, Vec<Box<dyn TagRule>>>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the current chain for `kind` with `rule`.
    pub fn push(&mut self, kind: RuleKind, rule: impl TagRule + 'static) {
        self.chains.entry(kind).or_default().push(Box::new(rule));
    }

    /// Drops every rule for `kind`, restoring the plain tag output.
    pub fn clear(&mut self, kind: RuleKind) {
        self.chains.remove(&kind);
    }

    pub fn render(&self, kind: RuleKind, tag: &mut HtmlTag) -> String {
        let chain = self.chains.get(&kind).map(Vec::as_slice).unwrap_or(&[]);
        apply(chain, tag)
    }
}

fn apply(chain: &[Box<dyn TagRule>], tag: &mut HtmlTag) -> String {
    match chain.split_last() {
        None => tag.to_html(),
        Some((outer, inner)) => outer.render(tag, &|t: &mut HtmlTag| apply(inner, t)),
    }
}

/// Bootstrap table classes, forced to auto width.
pub struct TableClassRule;

impl TagRule for TableClassRule {
    fn render(&self, tag: &mut HtmlTag, next: &dyn Fn(&mut HtmlTag) -> String) -> String {
        tag.set_attr("class", "table table-striped table-bordered");
        tag.set_attr("style", "width: auto;");
        next(tag)
    }
}

pub const LINK_REL: &str = "noopener nofollow noreferrer";

/// Marks every rendered link as untrusted.
pub struct LinkRelRule;

impl TagRule for LinkRelRule {
    fn render(&self, tag: &mut HtmlTag, next: &dyn Fn(&mut HtmlTag) -> String) -> String {
        tag.push_attr("rel", LINK_REL);
        next(tag)
    }
}

/// Routes image sources through the image proxy.
pub struct ImageProxyRule {
    proxy: ImageProxy,
    base: Url,
}

impl ImageProxyRule {
    pub fn new(proxy: ImageProxy, base: Url) -> Self {
        Self { proxy, base }
    }
}

impl TagRule for ImageProxyRule {
    fn render(&self, tag: &mut HtmlTag, next: &dyn Fn(&mut HtmlTag) -> String) -> String {
        let src = tag.attr("src").unwrap_or("").to_string();
        if !src.is_empty() {
            match self.proxy.resolve(&src, &self.base) {
                Ok(proxied) => tag.set_attr("src", proxied),
                Err(e) => tracing::warn!("keeping original image src: {e}"),
            }
        }
        next(tag)
    }
}
