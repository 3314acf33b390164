//! Normalization of a raw batch into the strict user table

use std::sync::Arc;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::models::{AgeRange, Country, Gender, Nationality, UserRecord};
use crate::schema::{Column, RealizedSchema, RegisteredSource, mapping_for};
use crate::transform::coerce::{
    coerce_latitude, coerce_longitude, coerce_text, coerce_years,
};
use crate::transform::flatten::{FlatRecord, flatten_batch};

/// Inclusive upper bound of synthesized registration years
pub const MAX_SYNTHETIC_REGISTERED_YEARS: u32 = 10;

/// Build the run's single generator from the seed token.
///
/// Numeric seeds are used as-is; any other token is hashed with FNV-1a so the
/// same token always yields the same generator.
#[must_use]
pub fn seeded_rng(seed: &str) -> StdRng {
    let state = seed.trim().parse::<u64>().unwrap_or_else(|_| {
        seed.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
        })
    });
    StdRng::seed_from_u64(state)
}

/// Row and field level outcomes of a normalization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    /// Records received from the extractor
    pub input_rows: usize,
    /// Records dropped because Age was absent or unreadable
    pub excluded_rows: usize,
    /// Field values replaced by null/unknown
    pub coercion_fallbacks: usize,
}

/// The immutable normalized table of a run
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    schema: RealizedSchema,
    records: Arc<[UserRecord]>,
    report: NormalizationReport,
}

impl NormalizedTable {
    /// Assemble a table from already normalized parts
    #[must_use]
    pub fn from_parts(
        schema: RealizedSchema,
        records: Vec<UserRecord>,
        report: NormalizationReport,
    ) -> Self {
        Self {
            schema,
            records: records.into(),
            report,
        }
    }

    #[must_use]
    pub fn schema(&self) -> &RealizedSchema {
        &self.schema
    }

    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn report(&self) -> NormalizationReport {
        self.report
    }
}

/// Flattens, selects, coerces and derives fields for a raw batch
#[derive(Debug, Default)]
pub struct Normalizer {
    countries: FxHashMap<String, Arc<str>>,
    fallbacks: usize,
}

impl Normalizer {
    /// Normalize a batch of raw records.
    ///
    /// `rng` is the run's single seeded generator; it is drawn from once per
    /// retained record when `Registered` has to be synthesized.
    pub fn normalize<R: Rng + ?Sized>(records: &[Value], rng: &mut R) -> NormalizedTable {
        let flat = flatten_batch(records);
        let schema = RealizedSchema::negotiate(&flat);
        debug!("Realized schema: {:?}", schema.column_names());

        let mut normalizer = Self::default();
        let mut users = Vec::with_capacity(flat.len());
        let mut excluded_rows = 0;

        for record in &flat {
            match normalizer.normalize_record(record, &schema, rng) {
                Some(user) => users.push(user),
                None => excluded_rows += 1,
            }
        }

        if excluded_rows > 0 {
            warn!("Excluded {excluded_rows} records without a readable age");
        }

        let report = NormalizationReport {
            input_rows: flat.len(),
            excluded_rows,
            coercion_fallbacks: normalizer.fallbacks,
        };
        info!(
            "Normalized {} of {} records ({} field fallbacks)",
            users.len(),
            report.input_rows,
            report.coercion_fallbacks
        );

        NormalizedTable::from_parts(schema, users, report)
    }

    fn normalize_record<R: Rng + ?Sized>(
        &mut self,
        record: &FlatRecord,
        schema: &RealizedSchema,
        rng: &mut R,
    ) -> Option<UserRecord> {
        let age = field(record, Column::Age).and_then(coerce_years)?;

        let gender = self.categorical::<Gender>(field(record, Column::Gender), Gender::Unknown);
        let nationality =
            self.categorical::<Nationality>(field(record, Column::Nationality), Nationality::Unknown);
        let country = self.country(field(record, Column::Country));

        let first_name = self.coerce(field(record, Column::FirstName), coerce_text);
        let last_name = self.coerce(field(record, Column::LastName), coerce_text);
        let latitude = self.coerce(field(record, Column::Latitude), coerce_latitude);
        let longitude = self.coerce(field(record, Column::Longitude), coerce_longitude);

        let registered_years = match schema.registered_source() {
            RegisteredSource::Sourced => self.coerce(field(record, Column::Registered), coerce_years),
            RegisteredSource::Synthesized => {
                Some(rng.random_range(0..=MAX_SYNTHETIC_REGISTERED_YEARS))
            }
        };

        Some(UserRecord {
            gender,
            first_name,
            last_name,
            nationality,
            age,
            country,
            latitude,
            longitude,
            registered_years,
            age_range: AgeRange::for_age(age),
        })
    }

    /// Apply a coercion, counting a fallback when a present value is unreadable
    fn coerce<T>(&mut self, value: Option<&Value>, f: impl Fn(&Value) -> Option<T>) -> Option<T> {
        let value = value?;
        let coerced = f(value);
        if coerced.is_none() {
            self.fallbacks += 1;
        }
        coerced
    }

    fn categorical<T>(&mut self, value: Option<&Value>, unknown: T) -> T
    where
        T: for<'a> From<&'a str> + PartialEq + Copy,
    {
        match value {
            None => unknown,
            Some(Value::String(s)) => {
                let parsed = T::from(s.as_str());
                if parsed == unknown {
                    self.fallbacks += 1;
                }
                parsed
            }
            Some(_) => {
                self.fallbacks += 1;
                unknown
            }
        }
    }

    fn country(&mut self, value: Option<&Value>) -> Country {
        let Some(value) = value else {
            return Country::Unknown;
        };
        let Some(name) = coerce_text(value) else {
            self.fallbacks += 1;
            return Country::Unknown;
        };
        let interned = self
            .countries
            .entry(name)
            .or_insert_with_key(|name| Arc::from(name.as_str()));
        Country::Named(Arc::clone(interned))
    }
}

/// Non-null raw value for a mapped column
fn field(record: &FlatRecord, column: Column) -> Option<&Value> {
    mapping_for(column)
        .and_then(|def| record.get(def.source_path))
        .filter(|value| !value.is_null())
}
