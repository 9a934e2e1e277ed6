//! URL slugs for item ids and category filters.

use unicode_normalization::UnicodeNormalization;

/// Fold the Swedish letters `å`, `ä`, `ö` to plain Latin.
fn fold_swedish(c: char) -> char {
    match c {
        'å' | 'ä' => 'a',
        'ö' => 'o',
        other => other,
    }
}

/// Turn a display name into a URL-safe slug.
///
/// Composes to NFC, lower-cases, folds Swedish diacritics, collapses every run of characters
/// outside `[a-z0-9]` into a single hyphen and trims leading/trailing
/// hyphens. Pure and deterministic: the sync job relies on it to derive
/// stable ids.
///
/// ```
/// use galleri_core::slugify;
///
/// assert_eq!(slugify("Blå Katt"), "bla-katt");
/// assert_eq!(slugify("  Öga & Äpple! "), "oga-apple");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    let composed: String = name.nfc().collect();
    for c in composed.to_lowercase().chars().map(fold_swedish) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
#[path = "tests/slug_tests.rs"]
mod tests;
