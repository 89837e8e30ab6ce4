/// Escaped form of `&` as it appears in title markup.
const ESCAPED_AMPERSAND: &str = "&amp;";

/// Turns title markup into an identifier usable as an element `id` and as a
/// `#fragment`.
///
/// Every whitespace character becomes `_`; with `escape_ampersands`, every
/// `&amp;` becomes `__`. The transform is idempotent.
pub fn slugify_title(title: &str, escape_ampersands: bool) -> String {
    let slug: String = title
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if escape_ampersands {
        slug.replace(ESCAPED_AMPERSAND, "__")
    } else {
        slug
    }
}
