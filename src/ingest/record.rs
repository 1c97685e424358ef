// src/ingest/record.rs
use serde::{Deserialize, Serialize};

/// One publishable review, projected from a filtered row.
/// Fields are the raw spreadsheet text: the presentation layer decides
/// rating formatting and does its own output escaping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub rating: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Project each row into a [`ReviewRecord`], keeping source order.
/// A field missing from a short row becomes the empty string; an
/// unresolved author column leaves `author` unset for the whole document.
pub fn build(
    rows: &[Vec<String>],
    idx_rating: usize,
    idx_text: usize,
    idx_author: Option<usize>,
) -> Vec<ReviewRecord> {
    rows.iter()
        .map(|row| ReviewRecord {
            rating: field(row, idx_rating),
            text: field(row, idx_text),
            author: idx_author.map(|idx| field(row, idx)),
        })
        .collect()
}

fn field(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}
