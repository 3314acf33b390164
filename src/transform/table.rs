//! Arrow materialization of the normalized table

use std::sync::Arc;

use arrow::array::{ArrayRef, DictionaryArray, Float64Array, Int32Array, StringArray};
use arrow::datatypes::Int32Type;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::models::UserRecord;
use crate::schema::Column;
use crate::transform::normalize::NormalizedTable;

impl NormalizedTable {
    /// Materialize the realized columns as a `RecordBatch`.
    ///
    /// Categorical columns are dictionary-encoded; unknown members become
    /// nulls except for `Genero`, whose domain includes `unknown`.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let records = self.records();
        let columns: Vec<ArrayRef> = self
            .schema()
            .columns()
            .iter()
            .map(|column| build_column(*column, records))
            .collect();
        Ok(RecordBatch::try_new(self.schema().to_arrow(), columns)?)
    }
}

fn build_column(column: Column, records: &[UserRecord]) -> ArrayRef {
    match column {
        Column::Gender => categorical(records.iter().map(|r| Some(r.gender.as_str()))),
        Column::Nationality => categorical(records.iter().map(|r| r.nationality.code())),
        Column::Country => categorical(records.iter().map(|r| r.country.name())),
        Column::AgeRange => categorical(records.iter().map(|r| r.age_range.label())),
        Column::FirstName => Arc::new(
            records
                .iter()
                .map(|r| r.first_name.as_deref())
                .collect::<StringArray>(),
        ),
        Column::LastName => Arc::new(
            records
                .iter()
                .map(|r| r.last_name.as_deref())
                .collect::<StringArray>(),
        ),
        Column::Age => Arc::new(
            records
                .iter()
                .map(|r| i32::try_from(r.age).ok())
                .collect::<Int32Array>(),
        ),
        Column::Registered => Arc::new(
            records
                .iter()
                .map(|r| r.registered_years.and_then(|y| i32::try_from(y).ok()))
                .collect::<Int32Array>(),
        ),
        Column::Latitude => Arc::new(records.iter().map(|r| r.latitude).collect::<Float64Array>()),
        Column::Longitude => {
            Arc::new(records.iter().map(|r| r.longitude).collect::<Float64Array>())
        }
    }
}

fn categorical<'a>(values: impl Iterator<Item = Option<&'a str>>) -> ArrayRef {
    Arc::new(values.collect::<DictionaryArray<Int32Type>>())
}
