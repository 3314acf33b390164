//! Aggregation over the normalized table

pub mod statistics;

pub use statistics::{Aggregator, METRIC_LABELS, StatisticsSummary};
