pub mod config;
pub mod fetch;
pub mod ingest;

pub use config::{ReviewsConfig, RoleSynonyms};
pub use ingest::{ColumnRole, IngestError, ReviewRecord};
