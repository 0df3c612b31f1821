//! Script sanitation and validation applied before any synthesis call.

/// Drop `open..close` delimited runs. An unclosed delimiter keeps the rest of
/// the text verbatim; nesting is not tracked (the first closer wins).
fn strip_delimited(text: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        match rest[start + open.len_utf8()..].find(close) {
            Some(offset) => {
                out.push_str(&rest[..start]);
                rest = &rest[start + open.len_utf8() + offset + close.len_utf8()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Remove bracketed and parenthetical stage directions and collapse
/// whitespace. This cleaned form is what gets synthesized.
pub fn sanitize_script(text: &str) -> String {
    let cleaned = strip_delimited(text, '[', ']');
    let cleaned = strip_delimited(&cleaned, '(', ')');
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check a raw script against the sanitization rules. `None` means the
/// script may be synthesized; `Some` carries the user-facing message.
pub fn validate_script(text: &str) -> Option<String> {
    let cleaned = sanitize_script(text);
    if cleaned.is_empty() {
        return Some("Script cannot be empty.".to_string());
    }
    if !cleaned.ends_with(['.', '!', '?']) {
        return Some("Script must end with a punctuation mark (. ! ?).".to_string());
    }
    None
}
