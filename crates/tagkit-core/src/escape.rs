//! Markup escaping for text content, attribute names and values.

use std::fmt;

/// Escape the characters that are significant in markup.
///
/// `&` `<` `>` `"` `'` `/` are replaced by `&amp;` `&lt;` `&gt;` `&quot;`
/// `&#x27;` `&#x2F;`. The replacement runs in a single pass, so entities
/// produced for one character are never escaped again.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(s, &mut out);
    out
}

/// Escape the textual form of any displayable value
pub fn escape_display<T: fmt::Display + ?Sized>(value: &T) -> String {
    escape(&value.to_string())
}

/// Append the escaped form of `s` to `out`
pub fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
}
