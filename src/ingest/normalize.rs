use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a value for comparison: trim surrounding whitespace, decompose (NFD),
/// drop combining diacritical marks, lowercase. "Véleményed" folds to
/// "velemenyed", so Hungarian headers compare equal to their ASCII synonyms.
pub fn fold(raw: &str) -> String {
    raw.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
