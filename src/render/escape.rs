//! Minimal HTML text escaping.

/// Escape the five HTML-special characters.
///
/// `&` `'` `<` `>` `"` become `&amp;` `&#39;` `&lt;` `&gt;` `&#34;`. All other
/// characters pass through unchanged.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Quote a value for use inside a double-quoted attribute.
///
/// Only `"` is encoded so the attribute stays well-formed; everything else is
/// carried raw.
pub(crate) fn attribute_value(input: &str) -> String {
    input.replace('"', "&#34;")
}
