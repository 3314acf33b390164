use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use log::{error, info};
use user_etl::config::EtlConfig;
use user_etl::extract::HttpRecordSource;
use user_etl::geo::HttpBoundaryProvider;
use user_etl::pipeline::Pipeline;
use user_etl::utils::logging::console::print_run_report;

const EXIT_EXTRACTION_FAILED: u8 = 1;

async fn run(config: EtlConfig) -> anyhow::Result<u8> {
    let source = HttpRecordSource::new(config.endpoint.as_str(), config.request_timeout)
        .context("building record source client")?;
    let boundary = HttpBoundaryProvider::new(config.boundary_url.as_str(), config.request_timeout)
        .context("building boundary dataset client")?;

    let pipeline = Pipeline::new(config, source, boundary);
    let report = pipeline.run().await.context("ETL aborted")?;
    print_run_report(&report);

    let code = report.exit_code();
    if code == 0 {
        println!("✅ ETL Completada con Exito!");
    } else {
        println!("⚠️ ETL completada con {} sinks fallidos", report.failed.len());
    }
    Ok(code)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EtlConfig::default();
    info!(
        "Starting ETL: {} users from {} with seed '{}'",
        config.results, config.endpoint, config.seed
    );

    let start = Instant::now();
    let code = match run(config).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            println!("❌ ETL fallida: {e:#}");
            EXIT_EXTRACTION_FAILED
        }
    };
    info!("Finished in {:?}", start.elapsed());
    ExitCode::from(code)
}
