/// Escapes text for use as element content.
///
/// Equivalent to replacing `&` first and then `<`, `>`, `"` and `'`, so
/// entities produced here are never escaped twice within one call.
pub fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  escape_html_into(input, &mut out);
  out
}

pub fn escape_html_into(input: &str, out: &mut String) {
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#039;"),
      _ => out.push(ch),
    }
  }
}
