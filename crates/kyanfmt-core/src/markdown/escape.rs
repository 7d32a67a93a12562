//! HTML escaping for text and attributes, and entity decoding.

/// Escapes `& < > "` for text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a URL for an `href`/`src` attribute.
///
/// Characters legal in a URL are kept (existing `%XX` sequences included),
/// everything else is percent-encoded as UTF-8; `&` and `'` are then escaped
/// for HTML.
pub fn escape_href(s: &str) -> String {
    const KEEP: &[u8] = b"-_.~!*();:@=+$,/?#[]%";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        match b {
            b'&' => out.push_str("&amp;"),
            b'\'' => out.push_str("&#x27;"),
            b if b.is_ascii_alphanumeric() || KEEP.contains(&b) => out.push(b as char),
            b => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Decodes HTML entities in `input`: the named ones the page template can
/// emit (`amp lt gt quot apos nbsp`, and `#39`) plus any decimal or hex
/// numeric reference. Unknown or malformed references are kept verbatim.
pub fn html_decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let decoded = rest
            .find(';')
            .filter(|&end| end <= 12)
            .and_then(|end| decode_entity(&rest[1..end]).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code).filter(|&c| c != '\0')
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text() {
        assert_eq!(escape_html("<b>\"x\" & y</b>"), "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;");
    }

    #[test]
    fn escapes_href() {
        assert_eq!(escape_href("https://e.com/a b?x=1&y='2'"), "https://e.com/a%20b?x=1&amp;y=&#x27;2&#x27;");
        assert_eq!(escape_href("/caf\u{e9}"), "/caf%C3%A9");
        assert_eq!(escape_href("/a%20b\"<"), "/a%20b%22%3C");
    }

    #[test]
    fn decodes_named_and_numeric() {
        assert_eq!(html_decode("a &gt; b &amp;&amp; c &lt; d"), "a > b && c < d");
        assert_eq!(html_decode("&quot;hi&#39; &#x41;&#66;"), "\"hi' AB");
    }

    #[test]
    fn keeps_unknown_references() {
        assert_eq!(html_decode("AT&T &bogus; &#xZZ; & alone"), "AT&T &bogus; &#xZZ; & alone");
        assert_eq!(html_decode("trailing &amp"), "trailing &amp");
    }

    #[test]
    fn decodes_once() {
        assert_eq!(html_decode("&amp;lt;"), "&lt;");
    }
}
