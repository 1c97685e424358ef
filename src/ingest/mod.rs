// src/ingest/mod.rs
pub mod filter;
pub mod header;
pub mod normalize;
pub mod record;
pub mod tokenize;

pub use header::ColumnRole;
pub use record::ReviewRecord;

use thiserror::Error;
use tracing::debug;

use crate::config::ReviewsConfig;

/// Fatal ingestion outcomes. Zero publishable rows is not one of them:
/// that is an `Ok` with an empty record list, and callers must present the
/// three cases distinctly.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("document contained no rows")]
    EmptyDocument,
    #[error("header resolved no column for: {}", list_roles(.0))]
    MissingColumns(Vec<ColumnRole>),
}

fn list_roles(roles: &[ColumnRole]) -> String {
    roles
        .iter()
        .map(ColumnRole::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run the whole pipeline over already-retrieved CSV text:
/// tokenize, resolve the header, filter on the publish flag, project records.
///
/// The stages below this function are total; this is the only place the
/// typed failures are produced. Each call is independent, holds no state,
/// and resolves columns exactly once against row 0.
#[tracing::instrument(level = "debug", skip(text, config), fields(bytes = text.len()))]
pub fn ingest(text: &str, config: &ReviewsConfig) -> Result<Vec<ReviewRecord>, IngestError> {
    let mut rows = tokenize::tokenize(text);
    if rows.is_empty() {
        return Err(IngestError::EmptyDocument);
    }
    let header_row = rows.remove(0);
    debug!(columns = header_row.len(), data_rows = rows.len(), "tokenized document");

    let role_table = config.roles.as_table();
    let resolved = header::resolve(&header_row, &role_table);
    let idx_rating = resolved.get(&ColumnRole::Rating).copied().flatten();
    let idx_text = resolved.get(&ColumnRole::ReviewText).copied().flatten();
    let idx_publish = resolved.get(&ColumnRole::PublishFlag).copied().flatten();
    // author is optional; the three above are not
    let idx_author = resolved.get(&ColumnRole::Author).copied().flatten();

    match (idx_rating, idx_text, idx_publish) {
        (Some(idx_rating), Some(idx_text), Some(idx_publish)) => {
            let kept = filter::filter_rows(rows, idx_publish, &config.truthy_normalized());
            let records = record::build(&kept, idx_rating, idx_text, idx_author);
            debug!(records = records.len(), "ingest complete");
            Ok(records)
        }
        _ => {
            let missing: Vec<ColumnRole> = [
                (ColumnRole::Rating, idx_rating),
                (ColumnRole::ReviewText, idx_text),
                (ColumnRole::PublishFlag, idx_publish),
            ]
            .into_iter()
            .filter_map(|(role, idx)| idx.is_none().then_some(role))
            .collect();
            Err(IngestError::MissingColumns(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ReviewsConfig {
        ReviewsConfig::default()
    }

    #[test]
    fn end_to_end_keeps_only_publishable_rows() {
        let text = "Mennyire,Véleményed,Megjelenhet?\n5,\"Great, really!\",igen\n3,\"meh\",nem\n";
        let records = ingest(text, &config()).unwrap();
        assert_eq!(
            records,
            vec![ReviewRecord {
                rating: "5".to_string(),
                text: "Great, really!".to_string(),
                author: None,
            }]
        );
    }

    #[test]
    fn empty_input_is_empty_document() {
        assert_eq!(ingest("", &config()), Err(IngestError::EmptyDocument));
        assert_eq!(ingest("\n\n", &config()), Err(IngestError::EmptyDocument));
    }

    #[test]
    fn missing_columns_lists_exactly_the_unresolved_roles() {
        let text = "Mennyire,Véleményed\n5,ok\n";
        assert_eq!(
            ingest(text, &config()),
            Err(IngestError::MissingColumns(vec![ColumnRole::PublishFlag]))
        );

        let text = "something,else\n1,2\n";
        assert_eq!(
            ingest(text, &config()),
            Err(IngestError::MissingColumns(vec![
                ColumnRole::Rating,
                ColumnRole::ReviewText,
                ColumnRole::PublishFlag,
            ]))
        );
    }

    #[test]
    fn no_publishable_rows_is_ok_and_empty() {
        let text = "Mennyire,Véleményed,Megjelenhet?\n5,ok,nem\n";
        assert_eq!(ingest(text, &config()), Ok(vec![]));
    }

    #[test]
    fn author_column_is_optional() {
        let with = "Neved,Mennyire,Véleményed,Megjelenhet?\nKata,5,szuper,igen\n";
        let records = ingest(with, &config()).unwrap();
        assert_eq!(records[0].author.as_deref(), Some("Kata"));

        let without = "Mennyire,Véleményed,Megjelenhet?\n5,szuper,igen\n";
        let records = ingest(without, &config()).unwrap();
        assert_eq!(records[0].author, None);
    }

    #[test]
    fn header_row_is_never_treated_as_data() {
        // a single header row and nothing else is a valid, empty document
        let text = "Mennyire,Véleményed,Megjelenhet?\n";
        assert_eq!(ingest(text, &config()), Ok(vec![]));
    }

    #[test]
    fn quoted_multiline_review_survives_the_pipeline() {
        let text = "Mennyire,Véleményed,Megjelenhet?\n5,\"first line\nsecond line\",igen\n";
        let records = ingest(text, &config()).unwrap();
        assert_eq!(records[0].text, "first line\nsecond line");
    }

    #[test]
    fn bom_prefixed_document_ingests() {
        let text = "\u{feff}Mennyire,Véleményed,Megjelenhet?\n4,jó,igen\n";
        let records = ingest(text, &config()).unwrap();
        assert_eq!(records[0].rating, "4");
    }

    #[test]
    fn missing_columns_error_names_the_roles() {
        let err = IngestError::MissingColumns(vec![ColumnRole::Rating, ColumnRole::PublishFlag]);
        assert_eq!(
            err.to_string(),
            "header resolved no column for: rating, publish_flag"
        );
    }
}
