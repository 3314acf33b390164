//! Configuration for the ETL run.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default record source endpoint
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Default boundary dataset: country polygons keyed by `properties.name`
pub const DEFAULT_BOUNDARY_URL: &str = "https://raw.githubusercontent.com/python-visualization/folium/master/examples/data/world-countries.json";

/// How rows are loaded into the relational sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Drop the table and recreate it before inserting
    Replace,
    /// Insert without deleting existing rows
    Append,
}

impl LoadMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Append => "append",
        }
    }
}

/// Configuration for a single pipeline run
#[derive(Debug, Clone)]
pub struct EtlConfig {
    /// Record source base endpoint
    pub endpoint: String,
    /// Number of users requested from the source
    pub results: usize,
    /// Seed token sent to the source and used for synthesized fields
    pub seed: String,
    /// Timeout applied to each HTTP request
    pub request_timeout: Duration,
    /// Directory receiving every file artifact
    pub output_dir: PathBuf,
    /// File name of the normalized users CSV
    pub users_csv: String,
    /// File name of the normalized users Parquet snapshot
    pub users_parquet: String,
    /// Write the Parquet snapshot
    pub parquet_enabled: bool,
    /// File name of the statistics CSV
    pub statistics_csv: String,
    /// File name of the chart series document
    pub chart_series: String,
    /// File name of the choropleth HTML map
    pub choropleth_html: String,
    /// Load the relational sink
    pub sqlite_enabled: bool,
    /// SQLite database path
    pub sqlite_path: PathBuf,
    /// SQLite table name
    pub sqlite_table: String,
    /// Relational load mode
    pub load_mode: LoadMode,
    /// Boundary dataset location
    pub boundary_url: String,
    /// Allow ISO code lookup as a canonicalization fallback
    pub enable_code_lookup: bool,
    /// Number of countries in the bar chart view
    pub top_countries: usize,
    /// Number of equal-width bins in the age histogram
    pub histogram_bins: usize,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: 200,
            seed: "1234".to_string(),
            request_timeout: Duration::from_secs(30),
            output_dir: PathBuf::from("Resultados"),
            users_csv: "raw_users.csv".to_string(),
            users_parquet: "raw_users.parquet".to_string(),
            parquet_enabled: true,
            statistics_csv: "statistics.csv".to_string(),
            chart_series: "charts.json".to_string(),
            choropleth_html: "choropleth_usuarios.html".to_string(),
            sqlite_enabled: true,
            sqlite_path: PathBuf::from("usuarios.db"),
            sqlite_table: "usuarios".to_string(),
            load_mode: LoadMode::Replace,
            boundary_url: DEFAULT_BOUNDARY_URL.to_string(),
            enable_code_lookup: true,
            top_countries: 20,
            histogram_bins: 20,
        }
    }
}

impl EtlConfig {
    #[must_use]
    pub fn with_results(mut self, results: usize) -> Self {
        self.results = results;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_sqlite(mut self, path: impl AsRef<Path>, table: impl Into<String>) -> Self {
        self.sqlite_enabled = true;
        self.sqlite_path = path.as_ref().to_path_buf();
        self.sqlite_table = table.into();
        self
    }

    #[must_use]
    pub fn without_sqlite(mut self) -> Self {
        self.sqlite_enabled = false;
        self
    }

    #[must_use]
    pub fn with_load_mode(mut self, mode: LoadMode) -> Self {
        self.load_mode = mode;
        self
    }

    #[must_use]
    pub fn with_code_lookup(mut self, enabled: bool) -> Self {
        self.enable_code_lookup = enabled;
        self
    }

    #[must_use]
    pub fn users_csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.users_csv)
    }

    #[must_use]
    pub fn users_parquet_path(&self) -> PathBuf {
        self.output_dir.join(&self.users_parquet)
    }

    #[must_use]
    pub fn statistics_csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.statistics_csv)
    }

    #[must_use]
    pub fn chart_series_path(&self) -> PathBuf {
        self.output_dir.join(&self.chart_series)
    }

    #[must_use]
    pub fn choropleth_path(&self) -> PathBuf {
        self.output_dir.join(&self.choropleth_html)
    }
}
