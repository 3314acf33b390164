//! CSV sinks: the normalized users table and the statistics table

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::{ArrayRef, StringArray};
use arrow::compute::{cast, concat_batches};
use arrow::csv::reader::Format;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::algorithm::StatisticsSummary;
use crate::error::{ArtifactKind, EtlError, Result};
use crate::load::Artifact;
use crate::transform::NormalizedTable;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Header of the statistics table
pub const STATISTICS_COLUMNS: [&str; 2] = ["Metrica", "Valor"];

/// Write the normalized table with a header, in realized column order
pub fn write_users_csv(table: &NormalizedTable, path: &Path) -> Result<Artifact> {
    let start = Instant::now();
    log_operation_start("Writing users CSV", path);

    let batch = table.to_record_batch()?;
    let report = table.schema().check_batch(&batch);
    if !report.compatible {
        let issues: Vec<&str> = report.issues.iter().map(|i| i.description.as_str()).collect();
        return Err(EtlError::Schema(issues.join("; ")));
    }

    let batch = decode_dictionaries(&batch)?;
    write_batch(&batch, path)?;

    log_operation_complete("wrote", path, batch.num_rows(), Some(start.elapsed()));
    Ok(Artifact::new(
        ArtifactKind::UsersCsv,
        path.display().to_string(),
        batch.num_rows(),
    ))
}

/// Write the five-row `Metrica`/`Valor` table
pub fn write_statistics_csv(summary: &StatisticsSummary, path: &Path) -> Result<Artifact> {
    log_operation_start("Writing statistics CSV", path);

    let rows = summary.metric_rows();
    let metrics: StringArray = rows.iter().map(|(label, _)| Some(*label)).collect();
    let values: StringArray = rows.iter().map(|(_, value)| Some(value.as_str())).collect();
    let schema = Schema::new(vec![
        Field::new(STATISTICS_COLUMNS[0], DataType::Utf8, false),
        Field::new(STATISTICS_COLUMNS[1], DataType::Utf8, false),
    ]);
    let batch = RecordBatch::try_new(
        Arc::new(schema),
        vec![Arc::new(metrics) as ArrayRef, Arc::new(values)],
    )?;
    write_batch(&batch, path)?;

    log_operation_complete("wrote", path, batch.num_rows(), None);
    Ok(Artifact::new(
        ArtifactKind::StatisticsCsv,
        path.display().to_string(),
        batch.num_rows(),
    ))
}

/// Read a CSV written by this module back into one batch, inferring types
pub fn read_back(path: &Path) -> Result<RecordBatch> {
    let mut file = File::open(path)?;
    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, None)?;
    file.seek(SeekFrom::Start(0))?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .build(file)?;
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(concat_batches(&schema, &batches)?)
}

fn write_batch(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch)?;
    Ok(())
}

/// Replace dictionary-encoded columns with their plain string values
fn decode_dictionaries(batch: &RecordBatch) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(batch.num_columns());
    let mut columns = Vec::with_capacity(batch.num_columns());
    for (field, column) in batch.schema().fields().iter().zip(batch.columns()) {
        if let DataType::Dictionary(_, value_type) = field.data_type() {
            fields.push(Field::new(field.name(), value_type.as_ref().clone(), field.is_nullable()));
            columns.push(cast(column, value_type)?);
        } else {
            fields.push(field.as_ref().clone());
            columns.push(Arc::clone(column));
        }
    }
    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}
