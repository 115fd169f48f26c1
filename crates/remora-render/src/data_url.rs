use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escape set equivalent to JS `encodeURIComponent`: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )` pass through, everything else is percent-encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Wraps an SVG document as a self-contained, URL-safe `data:` reference.
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml,{}", utf8_percent_encode(svg, COMPONENT))
}
