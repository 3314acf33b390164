//! Durable sinks for the normalized table and its summary.
//!
//! Every sink is independent: each writer returns its own `Result` and the
//! pipeline records failures per sink instead of aborting the run.

pub mod csv;
pub mod parquet;
pub mod sqlite;

use std::fmt;

use crate::error::ArtifactKind;

pub use csv::{read_back, write_statistics_csv, write_users_csv};
pub use parquet::{read_parquet, write_users_parquet};
pub use sqlite::{SQL_COLUMNS, SqliteLoadReport, load_into, load_sqlite};

/// One artifact a sink produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// File path or `database::table` identifier
    pub destination: String,
    /// Rows (or features, for the map) written
    pub rows: usize,
    /// Extra sink-specific information
    pub detail: Option<String>,
}

impl Artifact {
    #[must_use]
    pub fn new(kind: ArtifactKind, destination: impl Into<String>, rows: usize) -> Self {
        Self {
            kind,
            destination: destination.into(),
            rows,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({} rows)", self.kind, self.destination, self.rows)?;
        if let Some(detail) = &self.detail {
            write!(f, " [{detail}]")?;
        }
        Ok(())
    }
}
