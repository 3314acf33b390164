//! Normalizer: flatten, select and rename, coerce, derive.

pub mod coerce;
pub mod flatten;
pub mod normalize;
pub mod table;

pub use flatten::{FlatRecord, flatten_batch, flatten_record};
pub use normalize::{NormalizationReport, NormalizedTable, Normalizer, seeded_rng};
