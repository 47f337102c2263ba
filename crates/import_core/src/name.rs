use percent_encoding::percent_decode_str;

/// Display name implied by a source URL: its final `/`-separated segment,
/// percent-decoded.
///
/// Returns `None` unless the URL contains a `.`, which is the only signal
/// used for "looks like it points at a file". A bare host such as
/// `https://example.com` therefore yields `example.com`.
/// Segments that do not decode to UTF-8 are returned as typed.
pub fn derive_source_name(url: &str) -> Option<String> {
    if !url.contains('.') {
        return None;
    }
    let segment = url.rsplit('/').next().unwrap_or(url);
    let name = match percent_decode_str(segment).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    };
    Some(name)
}
