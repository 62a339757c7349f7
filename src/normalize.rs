use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form of `s`: lowercase, accents stripped.
///
/// The text is lowercased, decomposed (NFD) and every combining mark is
/// dropped, so `"Crème"` and `"creme"` normalize to the same string. The
/// `œ` and `æ` ligatures have no decomposition and are spelled out instead.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .fold(String::with_capacity(s.len()), |mut out, c| {
            match c {
                'œ' => out.push_str("oe"),
                'æ' => out.push_str("ae"),
                _ => out.push(c),
            }
            out
        })
}

/// Whether `needle` occurs in `haystack` once both are normalized
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}
