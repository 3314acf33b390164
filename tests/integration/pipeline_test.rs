use rusqlite::Connection;
use serde_json::json;
use user_etl::error::{ArtifactKind, EtlError, ExtractionError};
use user_etl::load::read_back;
use user_etl::pipeline::Pipeline;

use crate::utils::{FakeSource, StaticBoundary, test_config, three_users};

#[tokio::test]
async fn test_three_user_run_produces_every_artifact() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path());
    let pipeline = Pipeline::new(
        config.clone(),
        FakeSource::with_records(three_users()),
        StaticBoundary::available(),
    );

    let report = pipeline.run().await?;

    assert_eq!(report.exit_code(), 0, "failures: {:?}", report.failed);
    assert_eq!(report.produced.len(), 6);
    assert_eq!(report.normalization.input_rows, 3);
    assert_eq!(report.summary.average_age, Some(35.0));
    assert_eq!(report.summary.total_rows, 3);

    let csv = read_back(&config.users_csv_path())?;
    assert_eq!(csv.num_rows(), 3);
    assert_eq!(csv.num_columns(), 10);
    assert!(config.users_parquet_path().exists());

    let statistics = std::fs::read_to_string(config.statistics_csv_path())?;
    assert!(statistics.contains("Edad Media Total,35.00"));
    assert!(statistics.contains("Total (male),2"));

    let charts: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(config.chart_series_path())?)?;
    assert_eq!(charts["age_ranges"]["values"], json!([1, 1, 0, 1]));

    let html = std::fs::read_to_string(config.choropleth_path())?;
    assert!(html.contains(r#""United States of America":1"#));
    assert!(html.contains(r#""Spain":1"#));
    assert_eq!(report.artifact(ArtifactKind::Choropleth).map(|a| a.rows), Some(2));
    assert_eq!(report.mapping.misses(), vec!["Atlantis"]);

    let sqlite = report.sqlite.as_ref().expect("sqlite report");
    assert_eq!(sqlite.rows, 3);
    assert_eq!(sqlite.tables, vec!["usuarios".to_string()]);

    Ok(())
}

#[tokio::test]
async fn test_empty_results_halt_before_any_artifact() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path());
    let pipeline = Pipeline::new(
        config.clone(),
        FakeSource::with_records(Vec::new()),
        StaticBoundary::available(),
    );

    let result = pipeline.run().await;

    assert!(matches!(
        result,
        Err(EtlError::Extraction(ExtractionError::Empty))
    ));
    assert!(!config.output_dir.exists());
    assert!(!config.sqlite_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_status_failure_is_terminal() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path());
    let pipeline = Pipeline::new(config.clone(), FakeSource::Status(503), StaticBoundary::available());

    let result = pipeline.run().await;

    assert!(matches!(
        result,
        Err(EtlError::Extraction(ExtractionError::Status { status: 503, .. }))
    ));
    assert!(!config.output_dir.exists());
    Ok(())
}

#[tokio::test]
async fn test_zero_count_is_rejected() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path()).with_results(0);
    let pipeline = Pipeline::new(
        config,
        FakeSource::with_records(three_users()),
        StaticBoundary::available(),
    );

    assert!(matches!(
        pipeline.run().await,
        Err(EtlError::Extraction(ExtractionError::InvalidCount(0)))
    ));
    Ok(())
}

#[tokio::test]
async fn test_missing_boundary_only_skips_the_map() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path());
    let pipeline = Pipeline::new(
        config.clone(),
        FakeSource::with_records(three_users()),
        StaticBoundary::unavailable(),
    );

    let report = pipeline.run().await?;

    assert_eq!(report.exit_code(), 2);
    assert_eq!(report.failed.len(), 1);
    assert!(report.failure(ArtifactKind::Choropleth).is_some());
    assert!(report.artifact(ArtifactKind::UsersCsv).is_some());
    assert!(report.artifact(ArtifactKind::Sqlite).is_some());
    assert!(!config.choropleth_path().exists());
    assert!(report.mapping.misses().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_failing_sink_does_not_block_others() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path()).with_sqlite(dir.path().join("usuarios.db"), "bad name;");
    let pipeline = Pipeline::new(
        config.clone(),
        FakeSource::with_records(three_users()),
        StaticBoundary::available(),
    );

    let report = pipeline.run().await?;

    assert_eq!(report.exit_code(), 2);
    let failure = report.failure(ArtifactKind::Sqlite).expect("sqlite failure");
    assert!(matches!(failure.source, EtlError::Config(_)));
    assert_eq!(report.produced.len(), 5);
    assert!(config.users_csv_path().exists());
    assert!(config.choropleth_path().exists());
    Ok(())
}

#[tokio::test]
async fn test_append_mode_accumulates_rows() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path()).with_load_mode(user_etl::LoadMode::Append);

    for _ in 0..2 {
        let pipeline = Pipeline::new(
            config.clone(),
            FakeSource::with_records(three_users()),
            StaticBoundary::available(),
        );
        pipeline.run().await?;
    }

    let conn = Connection::open(&config.sqlite_path)?;
    let rows: i64 = conn.query_row("SELECT COUNT(*) FROM usuarios", [], |row| row.get(0))?;
    assert_eq!(rows, 6);
    Ok(())
}
