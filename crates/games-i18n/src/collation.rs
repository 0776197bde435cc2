//! Collation keys for ordering display names.
//!
//! Names are folded to ASCII (compatibility decomposition, then non-ASCII
//! code points dropped), so accented letters sort with their base letter.
//! The key compares case-insensitively first, then by the folded text, then
//! by the raw text, which keeps the order total and deterministic.

use unicode_normalization::UnicodeNormalization;

/// Sort key for a display name. Compare keys, not names.
///
/// # Examples
///
/// ```
/// use games_i18n::sort_key;
///
/// let mut names = vec!["Tibia", "THE FINALS", "Écho", "apex"];
/// names.sort_by_cached_key(|name| sort_key(name));
/// assert_eq!(names, ["apex", "Écho", "THE FINALS", "Tibia"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    primary: String,
    secondary: String,
    tertiary: String,
}

/// Folds `text` to its ASCII skeleton.
///
/// # Examples
///
/// ```
/// use games_i18n::fold_ascii;
///
/// assert_eq!(fold_ascii("Pokémon"), "Pokemon");
/// assert_eq!(fold_ascii("ＡＢＣ"), "ABC");
/// ```
#[must_use]
pub fn fold_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Computes the collation key of a display name.
///
/// The key does not depend on the active language: names are already
/// translated, and every language shares the same ASCII-folded order.
/// Locale-specific rules (German `ä` after `a` as `ae`, Swedish `å` after
/// `z`) are not applied.
#[must_use]
pub fn sort_key(name: &str) -> SortKey {
    let secondary = fold_ascii(name);
    SortKey {
        primary: secondary.to_ascii_lowercase(),
        secondary,
        tertiary: name.to_owned(),
    }
}
