//! Categorical domain types
//!
//! Each categorical column of the normalized table has an explicit enumerated
//! domain with an `Unknown` member for values outside the known set.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Gender of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Unknown or not specified
    Unknown,
}

impl Gender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nationality code issued by the record source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nationality {
    Australia,
    Brazil,
    Canada,
    Switzerland,
    Germany,
    Denmark,
    Spain,
    Finland,
    France,
    UnitedKingdom,
    Ireland,
    India,
    Iran,
    Mexico,
    Netherlands,
    Norway,
    NewZealand,
    Serbia,
    Turkey,
    Ukraine,
    UnitedStates,
    /// Code outside the source's published set
    Unknown,
}

impl Nationality {
    /// Two-letter code as emitted by the source, `None` for `Unknown`
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        let code = match self {
            Self::Australia => "AU",
            Self::Brazil => "BR",
            Self::Canada => "CA",
            Self::Switzerland => "CH",
            Self::Germany => "DE",
            Self::Denmark => "DK",
            Self::Spain => "ES",
            Self::Finland => "FI",
            Self::France => "FR",
            Self::UnitedKingdom => "GB",
            Self::Ireland => "IE",
            Self::India => "IN",
            Self::Iran => "IR",
            Self::Mexico => "MX",
            Self::Netherlands => "NL",
            Self::Norway => "NO",
            Self::NewZealand => "NZ",
            Self::Serbia => "RS",
            Self::Turkey => "TR",
            Self::Ukraine => "UA",
            Self::UnitedStates => "US",
            Self::Unknown => return None,
        };
        Some(code)
    }
}

impl From<&str> for Nationality {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "AU" => Self::Australia,
            "BR" => Self::Brazil,
            "CA" => Self::Canada,
            "CH" => Self::Switzerland,
            "DE" => Self::Germany,
            "DK" => Self::Denmark,
            "ES" => Self::Spain,
            "FI" => Self::Finland,
            "FR" => Self::France,
            "GB" | "UK" => Self::UnitedKingdom,
            "IE" => Self::Ireland,
            "IN" => Self::India,
            "IR" => Self::Iran,
            "MX" => Self::Mexico,
            "NL" => Self::Netherlands,
            "NO" => Self::Norway,
            "NZ" => Self::NewZealand,
            "RS" => Self::Serbia,
            "TR" => Self::Turkey,
            "UA" => Self::Ukraine,
            "US" => Self::UnitedStates,
            _ => Self::Unknown,
        }
    }
}

/// Country as reported by the source.
///
/// The domain is open, so known values are interned per run by the
/// normalizer; the table column is dictionary-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Country {
    Named(Arc<str>),
    Unknown,
}

impl Country {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Unknown => None,
        }
    }
}

/// Age-range bucket over half-open intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeRange {
    /// [0, 18)
    Minor,
    /// [18, 30)
    YoungAdult,
    /// [30, 65)
    Adult,
    /// [65, 120)
    Senior,
    /// Outside every bucket
    OutOfRange,
}

/// Bin edges shared by every bucket
pub const AGE_RANGE_EDGES: [u32; 5] = [0, 18, 30, 65, 120];

impl AgeRange {
    /// Buckets in display order, excluding the out-of-range marker
    pub const BUCKETS: [Self; 4] = [Self::Minor, Self::YoungAdult, Self::Adult, Self::Senior];

    /// Bucket membership, lower bound inclusive and upper bound exclusive
    #[must_use]
    pub fn for_age(age: u32) -> Self {
        match age {
            a if a < AGE_RANGE_EDGES[1] => Self::Minor,
            a if a < AGE_RANGE_EDGES[2] => Self::YoungAdult,
            a if a < AGE_RANGE_EDGES[3] => Self::Adult,
            a if a < AGE_RANGE_EDGES[4] => Self::Senior,
            _ => Self::OutOfRange,
        }
    }

    /// Display label, `None` for the out-of-range marker
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Minor => Some("0-18"),
            Self::YoungAdult => Some("18-30"),
            Self::Adult => Some("30-65"),
            Self::Senior => Some("65+"),
            Self::OutOfRange => None,
        }
    }
}
