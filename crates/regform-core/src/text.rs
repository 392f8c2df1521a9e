// crates/regform-core/src/text.rs

//! Text folding for collation and matching.

use deunicode::deunicode;

/// Folds a string into its collation key: transliterated to ASCII and
/// lowercased. Used for the ascending country sort and for
/// accent-insensitive, case-insensitive comparisons.
///
/// # Examples
/// ```rust
/// use regform_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode(s).to_ascii_lowercase()
}
