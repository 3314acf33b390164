//! Schema negotiation for the normalized table.
//!
//! The realized column set is computed once per run from the flattened batch
//! and then consulted by every downstream stage, instead of each stage probing
//! for optional columns on its own.

pub mod field_mapping;

use std::sync::Arc;

use arrow::datatypes::{Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

pub use field_mapping::{Column, FIELD_MAPPINGS, FieldDefinition, FieldType, mapping_for};

use crate::transform::flatten::FlatRecord;

/// Where the `Registered` column gets its values for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisteredSource {
    /// The batch carries `registered.age`
    Sourced,
    /// Drawn from the run's seeded generator
    Synthesized,
}

/// The columns a run actually produces, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealizedSchema {
    columns: Vec<Column>,
    registered: RegisteredSource,
}

impl RealizedSchema {
    /// Compute the realized column set for a flattened batch.
    ///
    /// A mapped column is realized when at least one record carries its
    /// source path. `Registered` is always realized, synthesized when the
    /// source never provides it. `RangoEdad` is realized with `Edad`.
    #[must_use]
    pub fn negotiate(records: &[FlatRecord]) -> Self {
        let present = |path: &str| records.iter().any(|record| record.contains_key(path));

        let mut columns: Vec<Column> = FIELD_MAPPINGS
            .iter()
            .filter(|def| def.column != Column::Registered && present(def.source_path))
            .map(|def| def.column)
            .collect();

        let registered = match mapping_for(Column::Registered) {
            Some(def) if present(def.source_path) => RegisteredSource::Sourced,
            _ => RegisteredSource::Synthesized,
        };
        columns.push(Column::Registered);

        if columns.contains(&Column::Age) {
            columns.push(Column::AgeRange);
        }

        Self {
            columns,
            registered,
        }
    }

    /// Build a schema from an explicit column list, sorted into output order
    #[must_use]
    pub fn from_columns(columns: &[Column], registered: RegisteredSource) -> Self {
        let columns = Column::ALL
            .into_iter()
            .filter(|column| columns.contains(column))
            .collect();
        Self {
            columns,
            registered,
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn contains(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    #[must_use]
    pub fn registered_source(&self) -> RegisteredSource {
        self.registered
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name()).collect()
    }

    /// Arrow schema for the in-memory table
    #[must_use]
    pub fn to_arrow(&self) -> SchemaRef {
        let fields: Vec<Field> = self
            .columns
            .iter()
            .map(|column| Field::new(column.name(), column.data_type(), column.nullable()))
            .collect();
        Arc::new(Schema::new(fields))
    }

    /// Compare a batch's columns against this schema, by name and position
    #[must_use]
    pub fn check_batch(&self, batch: &RecordBatch) -> SchemaCompatibilityReport {
        let expected = self.column_names();
        let schema = batch.schema();
        let actual: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();

        let mut issues = Vec::new();
        if expected.len() != actual.len() {
            issues.push(SchemaIssue {
                description: format!(
                    "Different number of columns: expected {}, found {}",
                    expected.len(),
                    actual.len()
                ),
            });
        }
        for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
            if e != a {
                issues.push(SchemaIssue {
                    description: format!("Column name mismatch at position {i}: '{e}' vs '{a}'"),
                });
            }
        }

        SchemaCompatibilityReport {
            compatible: issues.is_empty(),
            issues,
        }
    }
}

/// Result of checking a table against the realized schema
#[derive(Debug)]
pub struct SchemaCompatibilityReport {
    /// Whether the table matches
    pub compatible: bool,
    /// List of mismatches, if any
    pub issues: Vec<SchemaIssue>,
}

/// A single schema mismatch
#[derive(Debug)]
pub struct SchemaIssue {
    pub description: String,
}
