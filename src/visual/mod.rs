//! Visual artifacts: chart series for the external renderer

pub mod series;

pub use series::{BarSeries, ChartSeries, HistogramSeries, ScatterSeries, histogram};
