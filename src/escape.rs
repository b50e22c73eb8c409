//! Escaping for text interpolated into Markdown and HTML output.
//!
//! Both functions are total. Re-escaping already escaped text escapes it
//! again (`&amp;` becomes `&amp;amp;`); callers escape raw text exactly once.

/// Characters that carry meaning in inline Markdown.
const MARKDOWN_SPECIALS: &[char] = &['*', '_', '[', ']', '(', ')', '#', '+', '-', '.', '!'];

/// Escape text for use inside HTML element content or attribute values.
///
/// `&` is replaced first so entities produced by later replacements are not
/// escaped a second time.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape text for use inside Markdown by prefixing special characters with `\`.
pub fn escape_markdown(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if MARKDOWN_SPECIALS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
