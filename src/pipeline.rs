//! End-to-end run: extract, normalize, summarize, canonicalize, persist.
//!
//! Stages run sequentially. Extraction failure aborts the run before any
//! artifact exists; after that every sink is attempted independently and its
//! outcome recorded in the [`RunReport`].

use std::fs;

use log::{info, warn};

use crate::algorithm::{Aggregator, StatisticsSummary};
use crate::config::EtlConfig;
use crate::error::{ArtifactKind, Result, SinkError};
use crate::extract::{ExtractRequest, RecordSource};
use crate::geo::{
    BoundaryProvider, CodeLookup, CountryKeyMapping, CountryNameResolver, write_choropleth,
};
use crate::load::{self, Artifact, SqliteLoadReport};
use crate::transform::{NormalizationReport, NormalizedTable, Normalizer, seeded_rng};
use crate::utils::logging::console;
use crate::utils::logging::{create_spinner, finish_and_clear, log_warning};
use crate::visual::ChartSeries;

/// Everything a completed run produced or failed to produce
#[derive(Debug)]
pub struct RunReport {
    pub produced: Vec<Artifact>,
    pub failed: Vec<SinkError>,
    pub normalization: NormalizationReport,
    pub summary: StatisticsSummary,
    /// Country coverage against the boundary key space
    pub mapping: CountryKeyMapping,
    pub sqlite: Option<SqliteLoadReport>,
}

impl RunReport {
    /// 0 when every sink succeeded, 2 when at least one failed
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.failed.is_empty() { 0 } else { 2 }
    }

    #[must_use]
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.produced.iter().find(|a| a.kind == kind)
    }

    #[must_use]
    pub fn failure(&self, kind: ArtifactKind) -> Option<&SinkError> {
        self.failed.iter().find(|f| f.kind == kind)
    }

    fn record(&mut self, kind: ArtifactKind, outcome: Result<Artifact>) {
        match outcome {
            Ok(artifact) => {
                info!("Produced {artifact}");
                self.produced.push(artifact);
            }
            Err(source) => {
                let failure = SinkError::new(kind, source);
                warn!("{failure}");
                self.failed.push(failure);
            }
        }
    }
}

/// A configured run over a record source and a boundary provider
pub struct Pipeline<S, B> {
    config: EtlConfig,
    source: S,
    boundary: B,
}

impl<S: RecordSource, B: BoundaryProvider> Pipeline<S, B> {
    pub fn new(config: EtlConfig, source: S, boundary: B) -> Self {
        Self {
            config,
            source,
            boundary,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EtlConfig {
        &self.config
    }

    /// Execute the run.
    ///
    /// Returns `Err` only for extraction failures, in which case nothing was
    /// written. Sink failures are reported in the returned [`RunReport`].
    pub async fn run(&self) -> Result<RunReport> {
        let config = &self.config;
        let request = ExtractRequest::new(config.results, config.seed.as_str())?;

        let spinner = create_spinner(&format!(
            "Extrayendo {} usuarios de {}",
            request.results(),
            self.source.describe()
        ));
        let fetched = self.source.fetch(&request).await;
        finish_and_clear(&spinner);
        let batch = fetched?;

        let mut rng = seeded_rng(&config.seed);
        let table = Normalizer::normalize(batch.records(), &mut rng);
        let summary = Aggregator::summarize(&table);
        print_overview(&table, &summary);

        let spinner = create_spinner("Cargando fronteras de países");
        let boundary = self.boundary.load().await;
        finish_and_clear(&spinner);
        if let Err(e) = &boundary {
            log_warning(
                &format!("Boundary dataset unavailable, map will be skipped: {e}"),
                None,
            );
        }
        let dataset = boundary.as_ref().ok();

        let resolver =
            CountryNameResolver::new(CodeLookup::select(config.enable_code_lookup, dataset));
        let mapping = resolver.build_mapping(
            summary.count_by_country.keys().map(String::as_str),
            dataset,
        );

        if let Err(e) = fs::create_dir_all(&config.output_dir) {
            log_warning(
                &format!("Could not create output directory: {e}"),
                Some(config.output_dir.as_path()),
            );
        }

        let mut report = RunReport {
            produced: Vec::new(),
            failed: Vec::new(),
            normalization: table.report(),
            summary,
            mapping,
            sqlite: None,
        };

        report.record(
            ArtifactKind::UsersCsv,
            load::write_users_csv(&table, &config.users_csv_path()),
        );
        if config.parquet_enabled {
            report.record(
                ArtifactKind::UsersParquet,
                load::write_users_parquet(&table, &config.users_parquet_path()),
            );
        }
        report.record(
            ArtifactKind::StatisticsCsv,
            load::write_statistics_csv(&report.summary, &config.statistics_csv_path()),
        );
        if config.sqlite_enabled {
            let outcome = self.load_relational(&table, &mut report);
            report.record(ArtifactKind::Sqlite, outcome);
        }

        let series = ChartSeries::build(
            &table,
            &report.summary,
            config.top_countries,
            config.histogram_bins,
        );
        report.record(
            ArtifactKind::ChartSeries,
            series.write(&config.chart_series_path()),
        );

        let choropleth = match boundary {
            Ok(dataset) => {
                let path = config.choropleth_path();
                let counts = report.mapping.canonical_counts(&report.summary.count_by_country);
                write_choropleth(&path, &dataset, &counts).map(|features| {
                    Artifact::new(ArtifactKind::Choropleth, path.display().to_string(), features)
                })
            }
            Err(e) => Err(e.into()),
        };
        report.record(ArtifactKind::Choropleth, choropleth);

        Ok(report)
    }

    fn load_relational(
        &self,
        table: &NormalizedTable,
        report: &mut RunReport,
    ) -> Result<Artifact> {
        let config = &self.config;
        let loaded = load::load_sqlite(
            table,
            &config.sqlite_path,
            &config.sqlite_table,
            config.load_mode,
        )?;
        let artifact = Artifact::new(
            ArtifactKind::Sqlite,
            format!("{}::{}", loaded.db_path.display(), loaded.table),
            loaded.rows,
        )
        .with_detail(format!(
            "mode={}; tables: {}",
            loaded.mode.as_str(),
            loaded.tables.join(", ")
        ));
        report.sqlite = Some(loaded);
        Ok(artifact)
    }
}

fn print_overview(table: &NormalizedTable, summary: &StatisticsSummary) {
    let normalization = table.report();
    println!(
        "Normalizados {} de {} usuarios ({} excluidos, {} valores sin interpretar)",
        table.num_rows(),
        normalization.input_rows,
        normalization.excluded_rows,
        normalization.coercion_fallbacks
    );
    match table.to_record_batch() {
        Ok(batch) => {
            console::print_schema_info(&batch);
            console::print_sample_rows(&batch, console::SAMPLE_ROWS);
        }
        Err(e) => log_warning(&format!("Could not materialize sample: {e}"), None),
    }
    console::print_statistics(summary);
}
