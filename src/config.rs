// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::ingest::normalize::fold;
use crate::ingest::ColumnRole;

/// Runtime configuration: where the published sheet lives, how header
/// columns are recognized, and which flag values count as "publish me".
///
/// Passed by value into each ingestion call; there is no global instance,
/// so two sheets with different header languages can be ingested side by
/// side.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    /// Published CSV export URL of the review sheet.
    pub source_url: Option<String>,
    pub roles: RoleSynonyms,
    /// Accepted publish-flag values, compared after folding.
    pub truthy: Vec<String>,
}

/// Synonym substrings used to locate each semantic column in the header.
/// The historical sheets disagree on wording, so these are data, not code.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleSynonyms {
    pub rating: Vec<String>,
    pub review_text: Vec<String>,
    pub publish_flag: Vec<String>,
    pub author: Vec<String>,
}

impl Default for RoleSynonyms {
    fn default() -> Self {
        Self {
            rating: strings(&["rating", "mennyire", "értékelés"]),
            review_text: strings(&["review", "vélemény", "véleményed"]),
            publish_flag: strings(&["show", "publik", "megjelenhet"]),
            author: strings(&["author", "név", "neved"]),
        }
    }
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            source_url: None,
            roles: RoleSynonyms::default(),
            truthy: strings(&["igen", "yes", "true", "1"]),
        }
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

impl RoleSynonyms {
    /// Role table in resolution order, for the header resolver.
    pub fn as_table(&self) -> Vec<(ColumnRole, &[String])> {
        vec![
            (ColumnRole::Rating, self.rating.as_slice()),
            (ColumnRole::ReviewText, self.review_text.as_slice()),
            (ColumnRole::PublishFlag, self.publish_flag.as_slice()),
            (ColumnRole::Author, self.author.as_slice()),
        ]
    }
}

impl ReviewsConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// The truthy set with the same folding applied as to row values,
    /// so membership tests compare like with like.
    pub fn truthy_normalized(&self) -> HashSet<String> {
        self.truthy.iter().map(|v| fold(v)).collect()
    }
}
