// src/ingest/header.rs
use std::collections::BTreeMap;
use std::fmt;

use crate::ingest::normalize::fold;

/// Semantic column roles a spreadsheet header can carry.
/// The form sheets drifted across three layouts over the years, so roles are
/// located by synonym lists rather than exact header text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnRole {
    Rating,
    ReviewText,
    PublishFlag,
    Author,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Rating => "rating",
            ColumnRole::ReviewText => "review_text",
            ColumnRole::PublishFlag => "publish_flag",
            ColumnRole::Author => "author",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve each role to the lowest header index whose folded cell text
/// contains one of the role's folded synonyms as a substring. Substring
/// matching tolerates trailing punctuation and extra words in the header
/// ("Megjelenhet a honlapon?" still matches "megjelenhet").
///
/// Roles are resolved independently. Nothing stops two roles from landing
/// on the same index when their synonym lists overlap; keeping the
/// configured lists disjoint is the caller's job.
pub fn resolve(
    header: &[String],
    roles: &[(ColumnRole, &[String])],
) -> BTreeMap<ColumnRole, Option<usize>> {
    let cells: Vec<String> = header.iter().map(|c| fold(c)).collect();

    roles
        .iter()
        .map(|(role, synonyms)| {
            let folded: Vec<String> = synonyms.iter().map(|s| fold(s)).collect();
            let idx = cells.iter().position(|cell| {
                folded.iter().any(|syn| !syn.is_empty() && cell.contains(syn.as_str()))
            });
            (*role, idx)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn synonyms(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_diacritic_and_case_insensitively() {
        let header = header(&["Mennyire", "Véleményed", "Megjelenhet?"]);
        let syns = synonyms(&["velemeny"]);
        let roles = [(ColumnRole::ReviewText, syns.as_slice())];
        let resolved = resolve(&header, &roles);
        assert_eq!(resolved[&ColumnRole::ReviewText], Some(1));
    }

    #[test]
    fn substring_match_tolerates_extra_words() {
        let header = header(&["Megjelenhet a honlapon?"]);
        let syns = synonyms(&["megjelenhet"]);
        let roles = [(ColumnRole::PublishFlag, syns.as_slice())];
        assert_eq!(resolve(&header, &roles)[&ColumnRole::PublishFlag], Some(0));
    }

    #[test]
    fn lowest_matching_index_wins() {
        let header = header(&["rating (old)", "rating"]);
        let syns = synonyms(&["rating"]);
        let roles = [(ColumnRole::Rating, syns.as_slice())];
        assert_eq!(resolve(&header, &roles)[&ColumnRole::Rating], Some(0));
    }

    #[test]
    fn unmatched_role_is_unresolved() {
        let header = header(&["Mennyire", "Véleményed"]);
        let syns = synonyms(&["megjelenhet", "show", "publik"]);
        let roles = [(ColumnRole::PublishFlag, syns.as_slice())];
        assert_eq!(resolve(&header, &roles)[&ColumnRole::PublishFlag], None);
    }

    #[test]
    fn overlapping_synonyms_may_share_an_index() {
        // accepted ambiguity: resolution does not enforce uniqueness
        let header = header(&["Review rating"]);
        let rating = synonyms(&["rating"]);
        let review = synonyms(&["review"]);
        let roles = [
            (ColumnRole::Rating, rating.as_slice()),
            (ColumnRole::ReviewText, review.as_slice()),
        ];
        let resolved = resolve(&header, &roles);
        assert_eq!(resolved[&ColumnRole::Rating], Some(0));
        assert_eq!(resolved[&ColumnRole::ReviewText], Some(0));
    }

    #[test]
    fn empty_synonym_never_matches() {
        let header = header(&["Mennyire"]);
        let syns = synonyms(&[""]);
        let roles = [(ColumnRole::Rating, syns.as_slice())];
        assert_eq!(resolve(&header, &roles)[&ColumnRole::Rating], None);
    }
}
