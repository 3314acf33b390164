//! Chart series handed to the external renderer

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::algorithm::StatisticsSummary;
use crate::error::{ArtifactKind, Result};
use crate::load::Artifact;
use crate::models::Gender;
use crate::schema::Column;
use crate::transform::NormalizedTable;
use crate::utils::logging::log_operation_start;

/// Categorical counts drawn as bars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub categories: Vec<String>,
    pub values: Vec<usize>,
}

/// Equal-width histogram with an optional mean marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSeries {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// `counts.len() + 1` bin edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub mean: Option<f64>,
    pub mean_label: Option<String>,
}

/// Paired values drawn as points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<(u32, u32)>,
}

/// Every series of a run, serialized to one JSON document
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub generated_at: DateTime<Utc>,
    pub gender: BarSeries,
    pub age_histogram: HistogramSeries,
    pub top_countries: BarSeries,
    pub age_ranges: BarSeries,
    /// Absent when the run realized no `Registered` values
    pub age_vs_registered: Option<ScatterSeries>,
}

impl ChartSeries {
    /// Build all series from the table and its summary
    #[must_use]
    pub fn build(
        table: &NormalizedTable,
        summary: &StatisticsSummary,
        top_n: usize,
        bins: usize,
    ) -> Self {
        let ages: Vec<u32> = table.records().iter().map(|r| r.age).collect();

        let (categories, values) = [Gender::Male, Gender::Female, Gender::Unknown]
            .into_iter()
            .map(|g| (g.as_str().to_string(), summary.count_for(g)))
            .filter(|(_, count)| *count > 0)
            .unzip();
        let gender = BarSeries {
            title: "Usuarios por Género".to_string(),
            x_label: "Género",
            y_label: "Cantidad de Usuarios",
            categories,
            values,
        };

        let (edges, counts) = histogram(&ages, bins);
        let age_histogram = HistogramSeries {
            title: format!("Distribución de Edades ({} Usuarios)", table.num_rows()),
            x_label: "Edad",
            y_label: "Frecuencia",
            edges,
            counts,
            mean: summary.average_age,
            mean_label: summary.average_age.map(|avg| format!("Edad Media: {avg:.2}")),
        };

        let (categories, values) = summary
            .top_countries(top_n)
            .into_iter()
            .map(|(country, count)| (country.to_string(), count))
            .unzip();
        let top_countries = BarSeries {
            title: format!("Distribución de Usuarios por Nacionalidad (Top {top_n})"),
            x_label: "País",
            y_label: "Cantidad de Usuarios",
            categories,
            values,
        };

        let (categories, values) = summary
            .age_range_counts()
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .unzip();
        let age_ranges = BarSeries {
            title: "Número de Usuarios por Rango de Edad".to_string(),
            x_label: "Rango de Edad",
            y_label: "Número de Usuarios",
            categories,
            values,
        };

        let age_vs_registered = table.schema().contains(Column::Registered).then(|| ScatterSeries {
            title: "Edad del Usuario vs Años Registrado".to_string(),
            x_label: "Edad del Usuario",
            y_label: "Años Registrado",
            points: table
                .records()
                .iter()
                .filter_map(|r| r.registered_years.map(|years| (r.age, years)))
                .collect(),
        });

        Self {
            generated_at: Utc::now(),
            gender,
            age_histogram,
            top_countries,
            age_ranges,
            age_vs_registered,
        }
    }

    /// Write the series as pretty-printed JSON
    pub fn write(&self, path: &Path) -> Result<Artifact> {
        log_operation_start("Writing chart series", path);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(Artifact::new(
            ArtifactKind::ChartSeries,
            path.display().to_string(),
            self.age_histogram.counts.iter().sum(),
        ))
    }
}

/// Equal-width bins over `[min, max]`, the last bin closed on the right.
///
/// A constant sample is widened by half a unit on each side.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn histogram(values: &[u32], bins: usize) -> (Vec<f64>, Vec<usize>) {
    let bins = bins.max(1);
    let (Some(min), Some(max)) = (values.iter().min(), values.iter().max()) else {
        return (Vec::new(), Vec::new());
    };
    let (mut lo, mut hi) = (f64::from(*min), f64::from(*max));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0; bins];
    for value in values {
        let index = ((f64::from(*value) - lo) / width).floor() as usize;
        counts[index.min(bins - 1)] += 1;
    }
    (edges, counts)
}
