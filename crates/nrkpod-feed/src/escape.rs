//! Text escaping for feed element content and attribute values.

/// Reserved characters and their replacements. Each input character is
/// replaced at most once, so an `&` introduced by a replacement is never
/// escaped again within the same call.
///
/// `<` maps to `" &lt;"`, leading space included.
const REPLACEMENTS: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', " &lt;"),
    ('>', "&gt;"),
    ('\'', "&apos;"),
    ('"', "&quot;"),
];

/// Escapes the five XML-reserved characters of `text`.
///
/// Not idempotent: escaping twice turns `&amp;` into `&amp;amp;`.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match REPLACEMENTS.iter().find(|(reserved, _)| *reserved == c) {
            Some((_, replacement)) => escaped.push_str(replacement),
            None => escaped.push(c),
        }
    }
    escaped
}
