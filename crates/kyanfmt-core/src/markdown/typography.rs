//! Symbol replacements on top of pulldown's smart punctuation.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn symbol_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\((?:c|r|tm)\)|\+-").expect("static regex is valid"))
}

/// `(c)` `(r)` `(tm)` (any case) and `+-` become their symbols.
pub(super) fn replace_symbols(text: &str) -> Cow<'_, str> {
    symbol_regex().replace_all(text, |caps: &Captures| {
        match caps[0].to_ascii_lowercase().as_str() {
            "(c)" => "\u{a9}",
            "(r)" => "\u{ae}",
            "(tm)" => "\u{2122}",
            _ => "\u{b1}",
        }
    })
}
