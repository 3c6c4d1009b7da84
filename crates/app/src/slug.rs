//! Slug generation.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("disallowed-characters pattern"));

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("separator-run pattern"));

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, strips everything except word characters, whitespace, and
/// hyphens, collapses each run of whitespace/hyphens into a single hyphen,
/// and trims leading/trailing hyphens. Uniqueness is the caller's concern.
#[must_use]
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let collapsed = SEPARATORS.replace_all(&stripped, "-");

    collapsed.trim_matches('-').to_string()
}
