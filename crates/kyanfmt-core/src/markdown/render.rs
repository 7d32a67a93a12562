//! Event rewriting between the parser and the HTML writer.

use std::borrow::Cow;

use pulldown_cmark::{
    html, Alignment, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream,
};

use super::linkify::find_urls;
use super::rules::{HtmlTag, RuleKind, Rules};
use super::typography::replace_symbols;
use super::RenderTarget;
use crate::config::MarkdownConfig;

pub(super) fn to_html(
    text: &str,
    options: MarkdownConfig,
    target: RenderTarget,
    rules: &Rules,
) -> String {
    let mut parser_opts = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    if options.typographer {
        parser_opts |= Options::ENABLE_SMART_PUNCTUATION;
    }

    let events = Parser::new_ext(text, parser_opts).flat_map(|event| disarm(event, target.images));
    let mut rewriter = Rewriter::new(options, target, rules);
    for event in TextMergeStream::new(events) {
        rewriter.push(event);
    }

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, rewriter.out.into_iter());
    out
}

/// Raw HTML becomes text (an HTML block reads as a paragraph of it), and with
/// images off the image syntax degrades to a literal `!` followed by a link.
fn disarm(event: Event<'_>, images: bool) -> Vec<Event<'_>> {
    match event {
        Event::Start(Tag::HtmlBlock) => vec![Event::Start(Tag::Paragraph)],
        Event::End(TagEnd::HtmlBlock) => vec![Event::End(TagEnd::Paragraph)],
        Event::Html(raw) | Event::InlineHtml(raw) => raw_lines(&raw),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !images => vec![
            Event::Text("!".into()),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }),
        ],
        Event::End(TagEnd::Image) if !images => vec![Event::End(TagEnd::Link)],
        other => vec![other],
    }
}

/// Raw HTML lines as text separated by soft breaks.
fn raw_lines(raw: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    for (i, line) in raw.split('\n').enumerate() {
        if i > 0 {
            events.push(Event::SoftBreak);
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            events.push(Event::Text(line.to_string().into()));
        }
    }
    events
}

/// Same scheme policy as the browser renderer: no script or file URLs, and
/// `data:` only for common raster images.
fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    if ["javascript:", "vbscript:", "file:"]
        .iter()
        .any(|p| lower.starts_with(p))
    {
        return false;
    }
    if lower.starts_with("data:") {
        return ["gif", "png", "jpeg", "webp"]
            .iter()
            .any(|t| lower.starts_with(&format!("data:image/{t};")));
    }
    true
}

fn href_for(link_type: LinkType, dest: &str) -> String {
    match link_type {
        LinkType::Email => format!("mailto:{dest}"),
        _ => dest.to_string(),
    }
}

struct Image {
    src: String,
    title: String,
    alt: String,
    depth: usize,
}

struct Rewriter<'r, 'a> {
    options: MarkdownConfig,
    target: RenderTarget,
    rules: &'r Rules,
    out: Vec<Event<'a>>,
    /// One entry per open link: whether its `<a>` was written.
    links: Vec<bool>,
    image: Option<Image>,
    in_code_block: bool,
    alignments: Vec<Alignment>,
    in_table_head: bool,
    cell: usize,
    /// Paragraphs closed so far.
    paragraphs: usize,
}

impl<'r, 'a> Rewriter<'r, 'a> {
    fn new(options: MarkdownConfig, target: RenderTarget, rules: &'r Rules) -> Self {
        Self {
            options,
            target,
            rules,
            out: Vec::new(),
            links: Vec::new(),
            image: None,
            in_code_block: false,
            alignments: Vec::new(),
            in_table_head: false,
            cell: 0,
            paragraphs: 0,
        }
    }

    fn emit_html(&mut self, html: String) {
        self.out.push(Event::InlineHtml(CowStr::from(html)));
    }

    fn push(&mut self, event: Event<'a>) {
        if self.image.is_some() {
            self.collect_alt(event);
            return;
        }

        match event {
            Event::Start(Tag::Paragraph) if self.target.inline => {
                if self.paragraphs > 0 {
                    let br = self.line_break();
                    self.out.push(br.clone());
                    self.out.push(br);
                }
            }
            Event::End(TagEnd::Paragraph) => {
                while matches!(self.out.last(), Some(Event::SoftBreak | Event::HardBreak)) {
                    self.out.pop();
                }
                self.paragraphs += 1;
                if !self.target.inline {
                    self.out.push(Event::End(TagEnd::Paragraph));
                }
            }
            Event::SoftBreak => {
                let br = self.line_break();
                self.out.push(br);
            }
            Event::Text(text) if !self.in_code_block => self.text(text),

            Event::Start(Tag::CodeBlock(kind)) => {
                self.in_code_block = true;
                self.out.push(Event::Start(Tag::CodeBlock(kind)));
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.out.push(Event::End(TagEnd::CodeBlock));
            }

            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            }) => self.open_link(&href_for(link_type, &dest_url), &title),
            Event::End(TagEnd::Link) => {
                if self.links.pop().unwrap_or(false) {
                    self.emit_html("</a>".to_string());
                }
            }

            Event::Start(Tag::Image {
                dest_url, title, ..
            }) => {
                self.image = Some(Image {
                    src: dest_url.to_string(),
                    title: title.to_string(),
                    alt: String::new(),
                    depth: 0,
                });
            }

            Event::Start(Tag::Table(alignments)) => {
                self.alignments = alignments;
                let mut tag = HtmlTag::new("table");
                let html = self.rules.render(RuleKind::TableOpen, &mut tag);
                self.emit_html(html);
            }
            Event::Start(Tag::TableHead) => {
                self.in_table_head = true;
                self.cell = 0;
                self.out.push(Event::Start(Tag::TableHead));
            }
            Event::End(TagEnd::TableHead) => {
                self.in_table_head = false;
                self.out.push(Event::End(TagEnd::TableHead));
            }
            Event::Start(Tag::TableRow) => {
                self.cell = 0;
                self.out.push(Event::Start(Tag::TableRow));
            }
            Event::Start(Tag::TableCell) => {
                let name = if self.in_table_head { "th" } else { "td" };
                let mut tag = HtmlTag::new(name);
                match self.alignments.get(self.cell) {
                    Some(Alignment::Left) => tag.push_attr("style", "text-align:left"),
                    Some(Alignment::Center) => tag.push_attr("style", "text-align:center"),
                    Some(Alignment::Right) => tag.push_attr("style", "text-align:right"),
                    Some(Alignment::None) | None => {}
                }
                self.cell += 1;
                self.emit_html(tag.to_html());
            }

            other => self.out.push(other),
        }
    }

    fn line_break(&self) -> Event<'a> {
        if self.options.breaks {
            Event::HardBreak
        } else {
            Event::SoftBreak
        }
    }

    fn should_linkify(&self) -> bool {
        self.options.linkify && !self.in_code_block && !self.links.iter().any(|&open| open)
    }

    fn typeset(&self, text: CowStr<'a>) -> CowStr<'a> {
        if !self.options.typographer {
            return text;
        }
        let replaced = match replace_symbols(&text) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        match replaced {
            Some(s) => s.into(),
            None => text,
        }
    }

    fn text(&mut self, text: CowStr<'a>) {
        if self.should_linkify() {
            self.linkify(text);
        } else {
            let text = self.typeset(text);
            self.out.push(Event::Text(text));
        }
    }

    fn open_link(&mut self, href: &str, title: &str) {
        if !is_safe_url(href) {
            self.links.push(false);
            return;
        }
        let mut tag = HtmlTag::new("a");
        tag.push_attr("href", href);
        if !title.is_empty() {
            tag.push_attr("title", title);
        }
        let html = self.rules.render(RuleKind::LinkOpen, &mut tag);
        self.emit_html(html);
        self.links.push(true);
    }

    /// Link text is never typeset; the text around it is.
    fn linkify(&mut self, text: CowStr<'a>) {
        let found = find_urls(&text);
        if found.is_empty() {
            let text = self.typeset(text);
            self.out.push(Event::Text(text));
            return;
        }
        let mut last = 0;
        for f in found {
            if f.range.start > last {
                let plain = self.typeset(text[last..f.range.start].to_string().into());
                self.out.push(Event::Text(plain));
            }
            self.open_link(&f.href, "");
            self.out
                .push(Event::Text(text[f.range.clone()].to_string().into()));
            if self.links.pop().unwrap_or(false) {
                self.emit_html("</a>".to_string());
            }
            last = f.range.end;
        }
        if last < text.len() {
            let plain = self.typeset(text[last..].to_string().into());
            self.out.push(Event::Text(plain));
        }
    }

    /// Inside an image only the plain text survives, as the `alt` attribute.
    fn collect_alt(&mut self, event: Event<'a>) {
        let Some(image) = self.image.as_mut() else {
            return;
        };
        let closed = match event {
            Event::End(TagEnd::Image) if image.depth == 0 => true,
            Event::Start(Tag::Image { .. }) => {
                image.depth += 1;
                false
            }
            Event::End(TagEnd::Image) => {
                image.depth -= 1;
                false
            }
            Event::Text(t) | Event::Code(t) => {
                image.alt.push_str(&t);
                false
            }
            Event::SoftBreak | Event::HardBreak => {
                image.alt.push(' ');
                false
            }
            _ => false,
        };
        if closed {
            if let Some(image) = self.image.take() {
                self.finish_image(image);
            }
        }
    }

    fn finish_image(&mut self, image: Image) {
        if !is_safe_url(&image.src) {
            self.out.push(Event::Text(image.alt.into()));
            return;
        }
        let mut tag = HtmlTag::new("img");
        tag.push_attr("src", image.src);
        tag.push_attr("alt", image.alt);
        if !image.title.is_empty() {
            tag.push_attr("title", image.title);
        }
        let html = self.rules.render(RuleKind::Image, &mut tag);
        self.emit_html(html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_url_policy() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("/relative"));
        assert!(is_safe_url("data:image/png;base64,AAAA"));
        assert!(!is_safe_url("  JavaScript:alert(1)"));
        assert!(!is_safe_url("file:///etc/passwd"));
        assert!(!is_safe_url("data:text/html;base64,AAAA"));
    }

    #[test]
    fn email_autolink_gets_mailto() {
        let out = to_html(
            "<user@example.com>",
            MarkdownConfig::default(),
            RenderTarget::default(),
            &Rules::new(),
        );
        assert_eq!(out, "<p><a href=\"mailto:user@example.com\">user@example.com</a></p>\n");
    }

    #[test]
    fn code_block_is_not_linkified() {
        let out = to_html(
            "```\nhttps://example.com\n```\n",
            MarkdownConfig::default(),
            RenderTarget::default(),
            &Rules::new(),
        );
        assert_eq!(out, "<pre><code>https://example.com\n</code></pre>\n");
    }

    #[test]
    fn html_block_reads_as_paragraph() {
        let out = to_html(
            "<div>\nx</div>\n\nafter",
            MarkdownConfig::default(),
            RenderTarget::default(),
            &Rules::new(),
        );
        assert_eq!(out, "<p>&lt;div&gt;<br />\nx&lt;/div&gt;</p>\n<p>after</p>\n");
    }

    #[test]
    fn symbols_skip_code() {
        let out = to_html(
            "(c) `(c)`\n\n```\n+-\n```\n",
            MarkdownConfig::default(),
            RenderTarget::default(),
            &Rules::new(),
        );
        assert_eq!(out, "<p>\u{a9} <code>(c)</code></p>\n<pre><code>+-\n</code></pre>\n");
    }

    #[test]
    fn unsafe_image_keeps_alt_text() {
        let out = to_html(
            "![boom](javascript:alert(1))",
            MarkdownConfig::default(),
            RenderTarget::default(),
            &Rules::new(),
        );
        assert_eq!(out, "<p>boom</p>\n");
    }
}
