//! Go string literal helpers.

/// Quote a string as an interpreted Go string literal (`"..."`).
///
/// Escapes backslashes, double quotes and control characters.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Quote a string as a raw Go string literal (`` `...` ``) when possible.
///
/// Raw literals cannot contain a back-quote or a carriage return; those
/// values fall back to [`quote`].
pub fn raw_or_quote(s: &str) -> String {
    if s.contains('`') || s.contains('\r') {
        quote(s)
    } else {
        format!("`{}`", s)
    }
}
