//! CMS text sanitization.
//!
//! Text fields arrive from the CMS with HTML entities encoded and may
//! carry lightweight markup. [`clean`] decodes the entities, renders the
//! markup to HTML, and strips any raw HTML that is not on the allowlist
//! of tags the renderer itself produces.
//!
//! Invariant: running [`clean`] over its own output yields the same
//! text. Allowed tags pass through the raw-HTML filter unchanged, and
//! text between tags is re-escaped exactly the way the markdown
//! renderer escapes it, so a second pass is the identity.

use pulldown_cmark::{html, Event, Options, Parser};

/// Tags the markdown renderer itself emits. Raw HTML using anything
/// else is stripped.
const ALLOWED_TAGS: &[&str] = &[
    "a",
    "blockquote",
    "br",
    "code",
    "em",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "img",
    "li",
    "ol",
    "p",
    "pre",
    "strong",
    "ul",
];

/// Decode HTML entities, then render lightweight markup to safe HTML.
///
/// Disallowed raw HTML is stripped; the text it wrapped survives.
#[must_use]
pub fn clean(text: &str) -> String {
    let decoded = decode_entities(text);
    let parser = Parser::new_ext(&decoded, Options::empty());
    let events = parser.map(|event| match event {
        Event::Html(fragment) => Event::Html(sanitize_fragment(&fragment).into()),
        Event::InlineHtml(fragment) => Event::InlineHtml(sanitize_fragment(&fragment).into()),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out.trim_end().to_string()
}

/// Decode named and numeric HTML entities.
///
/// Unknown entities are left literal. The CMS double-encodes, so a field
/// like `&amp;lt;b&amp;gt;` needs one decoding pass before the markup
/// filter sees it.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        // An entity is at most a short run of chars ending in ';'.
        let semi = tail.find(';').filter(|&pos| pos <= 32);
        let Some(semi) = semi else {
            out.push('&');
            rest = &tail[1..];
            continue;
        };

        let body = &tail[1..semi];
        match decode_entity_body(body) {
            Some(decoded) => {
                out.push_str(&decoded);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode a single entity body (the text between `&` and `;`).
fn decode_entity_body(body: &str) -> Option<String> {
    let named = match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "ndash" => Some('\u{2013}'),
        "mdash" => Some('\u{2014}'),
        "pound" => Some('£'),
        _ => None,
    };
    if let Some(c) = named {
        return Some(c.to_string());
    }

    let digits = body.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code).map(|c| c.to_string())
}

/// Filter a raw HTML fragment: allowed tags pass through, everything
/// else is dropped. Text between tags is kept and re-escaped.
fn sanitize_fragment(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(open) = rest.find('<') {
        push_escaped_text(&mut out, &rest[..open]);
        let tail = &rest[open..];

        // '<' only opens a tag when followed by a name, '/', or '!'.
        if !looks_like_tag(tail) {
            out.push_str("&lt;");
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('>') else {
            out.push_str("&lt;");
            rest = &tail[1..];
            continue;
        };

        let tag = &tail[..=close];
        if tag_is_allowed(tag) {
            out.push_str(tag);
        }
        rest = &tail[close + 1..];
    }

    push_escaped_text(&mut out, rest);
    out
}

fn looks_like_tag(tail: &str) -> bool {
    match tail[1..].chars().next() {
        Some(c) => c.is_ascii_alphabetic() || c == '/' || c == '!',
        None => false,
    }
}

/// Append raw-HTML text content, escaping it the way the markdown
/// renderer escapes text events: `&` (when not already an entity), `>`
/// and `"`.
fn push_escaped_text(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(pos) = rest.find(['&', '>', '"']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with('&') {
            if starts_with_entity(tail) {
                out.push('&');
            } else {
                out.push_str("&amp;");
            }
        } else if tail.starts_with('>') {
            out.push_str("&gt;");
        } else {
            out.push_str("&quot;");
        }
        rest = &tail[1..];
    }
    out.push_str(rest);
}

fn starts_with_entity(tail: &str) -> bool {
    let Some(semi) = tail.find(';').filter(|&pos| pos <= 32) else {
        return false;
    };
    let body = &tail[1..semi];
    !body.is_empty() && body.chars().all(|c| c.is_ascii_alphanumeric() || c == '#')
}

fn tag_is_allowed(tag: &str) -> bool {
    let inner = tag.trim_start_matches('<').trim_end_matches('>');
    let inner = inner.trim_start_matches('/');
    let name: String = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    if !ALLOWED_TAGS.contains(&name.as_str()) {
        return false;
    }

    // Event-handler attributes and script URLs disqualify an otherwise
    // allowed tag.
    let lowered = inner.to_ascii_lowercase();
    if lowered.contains("javascript:") {
        return false;
    }
    !lowered
        .split_whitespace()
        .skip(1)
        .any(|attr| attr.starts_with("on"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_entities_named() {
        assert_eq!(decode_entities("fish &amp; chips"), "fish & chips");
        assert_eq!(decode_entities("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
        assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
    }

    #[test]
    fn decode_entities_numeric() {
        assert_eq!(decode_entities("&#39;quoted&#39;"), "'quoted'");
        assert_eq!(decode_entities("&#x41;"), "A");
    }

    #[test]
    fn decode_entities_unknown_left_literal() {
        assert_eq!(decode_entities("&bogus; & co"), "&bogus; & co");
    }

    #[test]
    fn clean_renders_markdown() {
        assert_eq!(clean("**warm** place"), "<p><strong>warm</strong> place</p>");
    }

    #[test]
    fn clean_renders_links() {
        assert_eq!(
            clean("[call us](https://example.org)"),
            "<p><a href=\"https://example.org\">call us</a></p>"
        );
    }

    #[test]
    fn clean_empty_is_empty() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn clean_strips_script_tags_but_keeps_text() {
        let out = clean("before <script>alert('x')</script> after");
        assert!(!out.contains("<script"), "script tag must be stripped: {out}");
        assert!(out.contains("before"));
        assert!(out.contains("after"));
    }

    #[test]
    fn clean_strips_decoded_script_markup() {
        // CMS double-encodes; one decode pass exposes the markup, which
        // must then be filtered.
        let out = clean("&lt;script&gt;alert('x')&lt;/script&gt;ok");
        assert!(!out.contains("<script"), "decoded script must be stripped: {out}");
        assert!(out.contains("ok"));
    }

    #[test]
    fn clean_passes_allowed_inline_html() {
        let out = clean("a <strong>real</strong> place");
        assert!(out.contains("<strong>real</strong>"), "got: {out}");
    }

    #[test]
    fn clean_rejects_event_handler_attributes() {
        let out = clean("<p onclick=\"steal()\">hi</p>");
        assert!(!out.contains("onclick"), "handler must be stripped: {out}");
        assert!(out.contains("hi"));
    }

    #[test]
    fn clean_is_idempotent_on_clean_output() {
        let cases = [
            "plain text",
            "fish &amp; chips",
            "say &quot;hello&quot; to staff",
            "open 9 &gt; 5",
            "**bold** and [a link](https://example.org)",
            "first paragraph\n\nsecond paragraph",
            "- one\n- two",
            "keep <em>this</em>, drop <div>that</div>",
        ];
        for case in cases {
            let once = clean(case);
            let twice = clean(&once);
            assert_eq!(twice, once, "second pass changed output for {case:?}");
        }
    }
}
