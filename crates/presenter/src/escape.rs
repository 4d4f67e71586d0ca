use html_escape::encode_quoted_attribute;

/// Escape text for embedding in markup, either as element content or inside
/// a quoted attribute.
///
/// Escapes the five reserved characters `&`, `<`, `>`, `"` and `'`.
pub fn escape_markup(text: &str) -> String {
    encode_quoted_attribute(text).into_owned()
}
