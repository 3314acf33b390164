//! Descriptive statistics over the normalized table
//!
//! The summary is a pure function of the table. Display conventions (zero for
//! an empty gender category, top-N country views) are projections computed on
//! demand and never stored in the summary itself.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::models::{AgeRange, Gender};
use crate::transform::NormalizedTable;

/// Aggregated figures for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsSummary {
    /// Rows that took part in the aggregation
    pub total_rows: usize,
    /// Mean age over all rows, `None` for an empty table
    pub average_age: Option<f64>,
    /// Rows per gender. Sums to `total_rows`.
    pub count_by_gender: BTreeMap<Gender, usize>,
    /// Mean age per gender; categories without members are absent
    pub average_age_by_gender: BTreeMap<Gender, f64>,
    /// Rows per reported country, over the full table
    pub count_by_country: BTreeMap<String, usize>,
    /// Rows per age bucket, out-of-range ages included under their marker
    pub count_by_age_range: BTreeMap<AgeRange, usize>,
}

/// Computes the statistics summary
pub struct Aggregator;

impl Aggregator {
    /// Summarize a normalized table
    #[must_use]
    pub fn summarize(table: &NormalizedTable) -> StatisticsSummary {
        let records = table.records();

        let mut count_by_gender: BTreeMap<Gender, usize> = BTreeMap::new();
        let mut age_sum_by_gender: BTreeMap<Gender, u64> = BTreeMap::new();
        let mut count_by_country: BTreeMap<String, usize> = BTreeMap::new();
        let mut count_by_age_range: BTreeMap<AgeRange, usize> = BTreeMap::new();
        let mut age_sum = 0_u64;

        for record in records {
            let age = u64::from(record.age);
            age_sum += age;
            *count_by_gender.entry(record.gender).or_insert(0) += 1;
            *age_sum_by_gender.entry(record.gender).or_insert(0) += age;
            *count_by_age_range.entry(record.age_range).or_insert(0) += 1;
            if let Some(country) = record.country.name() {
                *count_by_country.entry(country.to_string()).or_insert(0) += 1;
            }
        }

        let average_age_by_gender = age_sum_by_gender
            .iter()
            .filter_map(|(gender, sum)| {
                let count = *count_by_gender.get(gender)?;
                mean(*sum, count).map(|avg| (*gender, avg))
            })
            .collect();

        StatisticsSummary {
            total_rows: records.len(),
            average_age: mean(age_sum, records.len()),
            count_by_gender,
            average_age_by_gender,
            count_by_country,
            count_by_age_range,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(sum: u64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Metric labels of the statistics table, in output order
pub const METRIC_LABELS: [&str; 5] = [
    "Edad Media Total",
    "Edad Media (male)",
    "Edad Media (female)",
    "Total (male)",
    "Total (female)",
];

impl StatisticsSummary {
    /// Rows of the given gender, zero when absent
    #[must_use]
    pub fn count_for(&self, gender: Gender) -> usize {
        self.count_by_gender.get(&gender).copied().unwrap_or(0)
    }

    /// Mean age of the given gender for display, zero when absent
    #[must_use]
    pub fn display_mean_age(&self, gender: Gender) -> f64 {
        self.average_age_by_gender
            .get(&gender)
            .copied()
            .unwrap_or(0.0)
    }

    /// The `n` most frequent countries, ties broken alphabetically
    #[must_use]
    pub fn top_countries(&self, n: usize) -> Vec<(&str, usize)> {
        self.count_by_country
            .iter()
            .map(|(country, count)| (country.as_str(), *count))
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
            .take(n)
            .collect()
    }

    /// Counts for the four buckets in display order, zero-filled
    #[must_use]
    pub fn age_range_counts(&self) -> Vec<(&'static str, usize)> {
        AgeRange::BUCKETS
            .iter()
            .filter_map(|bucket| {
                let label = bucket.label()?;
                Some((label, self.count_by_age_range.get(bucket).copied().unwrap_or(0)))
            })
            .collect()
    }

    /// The five (Metrica, Valor) rows of the statistics table
    #[must_use]
    pub fn metric_rows(&self) -> Vec<(&'static str, String)> {
        let values = [
            format!("{:.2}", self.average_age.unwrap_or(0.0)),
            format!("{:.2}", self.display_mean_age(Gender::Male)),
            format!("{:.2}", self.display_mean_age(Gender::Female)),
            self.count_for(Gender::Male).to_string(),
            self.count_for(Gender::Female).to_string(),
        ];
        METRIC_LABELS.into_iter().zip(values).collect()
    }

    /// Generate a plain text summary for the console
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut summary = String::new();
        summary.push_str(&format!(
            "Edad media total: {:.2}\n",
            self.average_age.unwrap_or(0.0)
        ));
        summary.push_str("Conteo por género:\n");
        for (gender, count) in &self.count_by_gender {
            summary.push_str(&format!("  {gender}: {count}\n"));
        }
        summary.push_str("Edad media por género:\n");
        for (gender, avg) in &self.average_age_by_gender {
            summary.push_str(&format!("  {gender}: {avg:.2}\n"));
        }
        summary
    }
}
