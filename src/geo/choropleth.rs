//! Choropleth map rendering as a self-contained Leaflet HTML document

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::error::{EtlError, Result};
use crate::geo::boundary::BoundaryDataset;

/// Legend caption of the users-per-country map
pub const DEFAULT_LEGEND: &str = "Usuarios por país";

/// Fill colour of features without data
pub const NO_DATA_COLOR: &str = "#eeeeee";

/// YlOrRd, six classes
pub const PALETTE: [&str; 6] = [
    "#ffffb2", "#fed976", "#feb24c", "#fd8d3c", "#f03b20", "#bd0026",
];

const TEMPLATE_NAME: &str = "choropleth";
const TEMPLATE: &str = include_str!("choropleth.html");

/// Upper class bounds for a linear scale over `1..=max`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn class_thresholds(max: usize) -> Vec<f64> {
    let max = max.max(1) as f64;
    let classes = PALETTE.len() as f64;
    (1..PALETTE.len())
        .map(|k| (max * k as f64 / classes * 100.0).round() / 100.0)
        .collect()
}

/// Render the map with counts keyed by boundary feature name.
///
/// Data blobs are embedded as JSON through the template context, so keys are
/// never reinterpreted as template markup.
pub fn render_choropleth(
    dataset: &BoundaryDataset,
    counts: &BTreeMap<String, usize>,
    legend: &str,
) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| EtlError::Template(e.to_string()))?;

    let max = counts.values().copied().max().unwrap_or(0);
    let context = json!({
        "legend": legend,
        "legend_json": script_safe(&serde_json::to_string(legend)?),
        "boundaries": script_safe(&dataset.to_json()?),
        "counts": script_safe(&serde_json::to_string(counts)?),
        "thresholds": serde_json::to_string(&class_thresholds(max))?,
        "palette": serde_json::to_string(&PALETTE)?,
        "no_data": serde_json::to_string(NO_DATA_COLOR)?,
    });
    handlebars
        .render(TEMPLATE_NAME, &context)
        .map_err(|e| EtlError::Template(e.to_string()))
}

/// Render and write the map, returning how many features carry data
pub fn write_choropleth(
    path: &Path,
    dataset: &BoundaryDataset,
    counts: &BTreeMap<String, usize>,
) -> Result<usize> {
    let html = render_choropleth(dataset, counts, DEFAULT_LEGEND)?;
    fs::write(path, html)?;
    Ok(counts.keys().filter(|key| dataset.contains_key(key)).count())
}

/// Keep embedded JSON from closing the surrounding script element
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
