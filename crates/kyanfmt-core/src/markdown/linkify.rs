//! Bare URL detection in plain text.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?i)\b(?:(?:https?://|www\.)[^\s<>"`]+|(?P<email>[a-z0-9._%+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}))"#,
        )
        .expect("static regex is valid")
    })
}

/// A URL found in text: byte range in the text and the link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub range: Range<usize>,
    pub href: String,
}

/// Finds bare `http(s)://` and `www.` URLs and email addresses in `text`.
///
/// Trailing sentence punctuation is not part of the URL, nor is a closing
/// parenthesis without a matching opening one inside the URL. Email
/// addresses link to `mailto:`.
pub fn find_urls(text: &str) -> Vec<Found> {
    url_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            if let Some(email) = caps.name("email") {
                return Some(Found {
                    range: email.range(),
                    href: format!("mailto:{}", email.as_str()),
                });
            }
            let m = caps.get(0)?;
            let url = trim_trailing(m.as_str());
            if url.ends_with("://") || url.eq_ignore_ascii_case("www.") {
                return None;
            }
            let href = if url.len() >= 4 && url[..4].eq_ignore_ascii_case("www.") {
                format!("http://{url}")
            } else {
                url.to_string()
            };
            Some(Found {
                range: m.start()..m.start() + url.len(),
                href,
            })
        })
        .collect()
}

fn trim_trailing(mut url: &str) -> &str {
    loop {
        let Some(last) = url.chars().last() else {
            return url;
        };
        let strip = match last {
            '.' | ',' | ':' | ';' | '!' | '?' | '\'' | '*' | '_' | '~' => true,
            ')' => url.matches(')').count() > url.matches('(').count(),
            ']' => url.matches(']').count() > url.matches('[').count(),
            _ => false,
        };
        if !strip {
            return url;
        }
        url = &url[..url.len() - last.len_utf8()];
    }
}
