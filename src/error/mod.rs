//! Error handling for the ETL pipeline.
//!
//! Batch-level failures (extraction, sink writes) are surfaced as distinct
//! named errors. Row- and field-level problems never reach this module: the
//! normalizer absorbs them with explicit fallback values and counts them.

use std::fmt;
use std::io;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Failure to obtain a usable batch from the record source.
///
/// Every variant is terminal for the run: nothing downstream executes.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The requested result count was zero
    #[error("result count must be a positive integer, got {0}")]
    InvalidCount(usize),

    /// The request could not be sent or the connection failed
    #[error("transport failure contacting {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    /// The service reported an error inside a success response
    #[error("record source reported an error: {0}")]
    Service(String),

    /// The body was not the expected `{"results": [...]}` document
    #[error("malformed response payload: {0}")]
    MalformedPayload(String),

    /// The service returned an empty `results` array
    #[error("record source returned zero results")]
    Empty,
}

/// Failure to load the geographic boundary dataset.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    /// The dataset could not be downloaded
    #[error("failed to fetch boundary dataset from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The dataset answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// The payload is not valid GeoJSON
    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The payload is GeoJSON but not a feature collection
    #[error("boundary dataset must be a FeatureCollection")]
    NotFeatureCollection,
}

/// Crate-level error type
#[derive(Debug, thiserror::Error)]
pub enum EtlError {
    /// Extraction failed; the run was aborted before normalization
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// Boundary dataset unavailable
    #[error("boundary dataset unavailable: {0}")]
    Boundary(#[from] BoundaryError),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// HTML template could not be registered or rendered
    #[error("Template error: {0}")]
    Template(String),

    /// A table does not match the realized schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// The artifacts a run can produce, one per independent sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Normalized users as CSV
    UsersCsv,
    /// Normalized users as Parquet
    UsersParquet,
    /// Five-row statistics table as CSV
    StatisticsCsv,
    /// Fixed-schema SQLite table
    Sqlite,
    /// Chart series consumed by the external renderer
    ChartSeries,
    /// Choropleth HTML map
    Choropleth,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UsersCsv => "users CSV",
            Self::UsersParquet => "users Parquet",
            Self::StatisticsCsv => "statistics CSV",
            Self::Sqlite => "SQLite",
            Self::ChartSeries => "chart series",
            Self::Choropleth => "choropleth",
        };
        f.write_str(name)
    }
}

/// A sink could not be written. Terminal for that sink only.
#[derive(Debug, thiserror::Error)]
#[error("{kind} sink unavailable: {source}")]
pub struct SinkError {
    pub kind: ArtifactKind,
    #[source]
    pub source: EtlError,
}

impl SinkError {
    pub fn new(kind: ArtifactKind, source: impl Into<EtlError>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}

/// Result type for ETL operations
pub type Result<T> = std::result::Result<T, EtlError>;
