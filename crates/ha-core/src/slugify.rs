//! Slug generation matching `homeassistant.util.slugify`

use crate::SLUG_UNKNOWN;

/// Convert text into a lowercase ASCII slug separated by underscores
///
/// Non-ASCII characters are transliterated, runs of anything that is not a
/// letter or digit collapse into a single `_`, and leading/trailing separators
/// are dropped. Returns `"unknown"` when nothing is left.
pub fn slugify(text: &str) -> String {
    let slug = slug::slugify(text).replace('-', "_");
    if slug.is_empty() {
        SLUG_UNKNOWN.to_string()
    } else {
        slug
    }
}
