//! Text comparison helpers shared by sorting, searching and category ordering.

use core::cmp::Ordering;

/// Locale-style ascending comparison.
///
/// Letters compare case-insensitively first; only when two strings are equal
/// ignoring case does case break the tie, with lowercase ahead of uppercase.
/// Identical strings (and only those) compare `Equal`, so this is a total order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Trim a label; blank or absent labels normalize to `None`.
pub fn normalize_label(label: Option<&str>) -> Option<&str> {
    label.map(str::trim).filter(|s| !s.is_empty())
}
