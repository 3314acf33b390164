//! Extract synthetic user batches, normalize them into a strict table,
//! summarize them, and persist the results with a per-country choropleth.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod extract;
pub mod geo;
pub mod load;
pub mod models;
pub mod pipeline;
pub mod schema;
pub mod transform;
pub mod utils;
pub mod visual;

// Core types
pub use config::{EtlConfig, LoadMode};
pub use error::{ArtifactKind, EtlError, ExtractionError, Result, SinkError};
pub use pipeline::{Pipeline, RunReport};

// Stages
pub use algorithm::{Aggregator, StatisticsSummary};
pub use extract::{ExtractRequest, HttpRecordSource, RawBatch, RecordSource};
pub use geo::{BoundaryDataset, BoundaryProvider, CountryNameResolver, HttpBoundaryProvider};
pub use schema::{Column, RealizedSchema, RegisteredSource};
pub use transform::{NormalizedTable, Normalizer, seeded_rng};

// Arrow types
pub use arrow::record_batch::RecordBatch;
