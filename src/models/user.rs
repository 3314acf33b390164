//! Normalized user record

use crate::models::types::{AgeRange, Country, Gender, Nationality};

/// One extracted person after normalization.
///
/// Fields whose column was not realized for the run hold their fallback value
/// (`Unknown` or `None`); sinks consult the realized schema, never these
/// defaults, to decide which columns exist.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub gender: Gender,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Nationality,
    pub age: u32,
    pub country: Country,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub registered_years: Option<u32>,
    pub age_range: AgeRange,
}
