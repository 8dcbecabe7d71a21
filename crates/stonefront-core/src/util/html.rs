//! Minimal HTML escaping for rendered fragments.
//!
//! Renderers build card and overlay markup by string interpolation; every
//! data-sourced value goes through [`escape_text`] (element content) or
//! [`escape_attr`] (attribute values) first.

use std::borrow::Cow;

/// Escape a string for use as HTML element content.
///
/// Replaces `&`, `<`, and `>`. Returns the input unchanged (borrowed) when
/// nothing needs escaping.
///
/// # Example
///
/// ```rust
/// use stonefront_core::util::html::escape_text;
///
/// assert_eq!(escape_text("Deck & Patio"), "Deck &amp; Patio");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape(input, false)
}

/// Escape a string for use inside a double- or single-quoted HTML attribute.
///
/// Replaces `&`, `<`, `>`, `"`, and `'`.
///
/// # Example
///
/// ```rust
/// use stonefront_core::util::html::escape_attr;
///
/// assert_eq!(escape_attr(r#"a "b" c"#), "a &quot;b&quot; c");
/// ```
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    escape(input, true)
}

fn escape(input: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && matches!(c, '"' | '\''));

    if !input.chars().any(needs_escape) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            '\'' if quotes => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
