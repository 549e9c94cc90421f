//! Text normalization for keyword and name matching
//!
//! Every comparison the interpreter makes goes through one of these:
//! - Unicode canonical decomposition (NFD)
//! - Combining marks (diacritics) removed
//! - Lowercase conversion
//! - For keyword lookups only, anything but letters and spaces removed

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L} ]").expect("Invalid regex pattern"));

/// Strip diacritics and case-fold.
///
/// ```
/// use command_core::normalize::normalize;
///
/// assert_eq!(normalize("Élément Tâche"), "element tache");
/// ```
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Normalize a word for keyword-set membership.
///
/// ```
/// use command_core::normalize::normalize_keyword;
///
/// assert_eq!(normalize_keyword("Créer,"), "creer");
/// assert_eq!(normalize_keyword("qr-code"), "qrcode");
/// ```
pub fn normalize_keyword(s: &str) -> String {
    NON_LETTER.replace_all(&normalize(s), "").into_owned()
}

/// True when `candidate` occurs in `haystack` once both are normalized.
///
/// Only the haystack-contains-candidate direction is tested. A candidate
/// that normalizes to nothing never matches.
pub fn contains_normalized(haystack: &str, candidate: &str) -> bool {
    let candidate = normalize(candidate);
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return false;
    }

    normalize(haystack).contains(candidate)
}
