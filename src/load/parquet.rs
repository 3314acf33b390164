//! Parquet snapshot of the normalized table

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::{ArtifactKind, Result};
use crate::load::Artifact;
use crate::transform::NormalizedTable;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Write the table, categoricals kept dictionary-encoded
pub fn write_users_parquet(table: &NormalizedTable, path: &Path) -> Result<Artifact> {
    let start = Instant::now();
    log_operation_start("Writing users Parquet", path);

    let batch = table.to_record_batch()?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    log_operation_complete("wrote", path, batch.num_rows(), Some(start.elapsed()));
    Ok(Artifact::new(
        ArtifactKind::UsersParquet,
        path.display().to_string(),
        batch.num_rows(),
    ))
}

/// Read every batch of a Parquet file
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    Ok(reader.collect::<std::result::Result<Vec<_>, _>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::transform::{Normalizer, seeded_rng};

    #[test]
    fn test_parquet_snapshot_keeps_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw_users.parquet");
        let batch = vec![
            json!({ "gender": "male", "dob": { "age": 17 }, "location": { "country": "Spain" } }),
            json!({ "gender": "female", "dob": { "age": 44 }, "location": { "country": "Norway" } }),
        ];
        let table = Normalizer::normalize(&batch, &mut seeded_rng("1234"));

        let artifact = write_users_parquet(&table, &path).unwrap();
        assert_eq!(artifact.rows, 2);

        let batches = read_parquet(&path).unwrap();
        let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
        assert_eq!(rows, 2);
        let schema = batches[0].schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, table.schema().column_names());
    }
}
