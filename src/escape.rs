/// Convert raw text into markup-safe text. `None` (absent field) maps to the
/// empty string.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms. The single
/// pass means an `&` introduced by one substitution is never re-encoded by
/// another, but the function is NOT idempotent: escaping already-escaped text
/// double-encodes the ampersands. Callers apply it exactly once per value.
pub fn escape_html(value: Option<&str>) -> String {
  let Some(text) = value else {
    return String::new();
  };
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#039;"),
      _ => out.push(ch),
    }
  }
  out
}
