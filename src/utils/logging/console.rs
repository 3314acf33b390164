//! Console output of run progress

use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};

use crate::algorithm::StatisticsSummary;
use crate::pipeline::RunReport;

/// Rows shown by [`print_sample_rows`] in a normal run
pub const SAMPLE_ROWS: usize = 5;

/// Print the column names and types of a batch
pub fn print_schema_info(batch: &RecordBatch) {
    println!("Schema:");
    for field in batch.schema().fields() {
        println!("  - {} ({})", field.name(), field.data_type());
    }
}

/// Render the first `num_rows` rows, one line per row
pub fn format_sample_rows(batch: &RecordBatch, num_rows: usize) -> Result<Vec<String>, ArrowError> {
    let options = FormatOptions::default().with_null("NULL");
    let schema = batch.schema();
    let formatters = batch
        .columns()
        .iter()
        .map(|column| ArrayFormatter::try_new(column.as_ref(), &options))
        .collect::<Result<Vec<_>, _>>()?;

    let lines = (0..num_rows.min(batch.num_rows()))
        .map(|row| {
            let cells: Vec<String> = formatters
                .iter()
                .zip(schema.fields())
                .map(|(formatter, field)| format!("{}: {}", field.name(), formatter.value(row)))
                .collect();
            format!("Row {row}: [{}]", cells.join(", "))
        })
        .collect();
    Ok(lines)
}

/// Print a sample of the normalized table
pub fn print_sample_rows(batch: &RecordBatch, num_rows: usize) {
    match format_sample_rows(batch, num_rows) {
        Ok(lines) => {
            println!("First {} of {} rows:", lines.len(), batch.num_rows());
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => log::warn!("Could not format sample rows: {e}"),
    }
}

/// Print the aggregate summary
pub fn print_statistics(summary: &StatisticsSummary) {
    println!("{}", summary.render_text());
}

/// Print produced artifacts and failed sinks
pub fn print_run_report(report: &RunReport) {
    println!("Artifacts:");
    for artifact in &report.produced {
        println!("  ✔ {artifact}");
    }
    for failure in &report.failed {
        println!("  ✘ {failure}");
    }
    let coverage = &report.mapping;
    println!(
        "Countries: {} distinct, {} without boundary feature",
        coverage.len(),
        coverage.misses().len()
    );
}
