//! Country name canonicalization against the boundary key space
//!
//! Resolution order: exact override, then code lookup when the capability is
//! available, then pass-through. Misses are never errors; they surface as
//! reduced map coverage.

use std::borrow::Cow;
use std::collections::BTreeMap;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::geo::boundary::BoundaryDataset;
use crate::geo::iso;
use crate::geo::overrides::COUNTRY_NAME_OVERRIDES;

/// Resolves a raw country name to a boundary feature name through ISO codes
pub trait CountryCodeLookup {
    fn feature_name(&self, raw: &str) -> Option<String>;
}

/// ISO table lookup joined with the boundary dataset's feature ids
#[derive(Debug, Clone)]
pub struct IsoCodeLookup {
    name_by_alpha3: FxHashMap<String, String>,
}

impl IsoCodeLookup {
    #[must_use]
    pub fn from_boundary(dataset: &BoundaryDataset) -> Self {
        let name_by_alpha3 = iso::ISO_COUNTRIES
            .iter()
            .filter_map(|country| {
                dataset
                    .name_for_id(country.alpha3)
                    .map(|name| (country.alpha3.to_string(), name.to_string()))
            })
            .collect();
        Self { name_by_alpha3 }
    }
}

impl CountryCodeLookup for IsoCodeLookup {
    fn feature_name(&self, raw: &str) -> Option<String> {
        let country = iso::lookup(raw)?;
        self.name_by_alpha3.get(country.alpha3).cloned()
    }
}

/// Code lookup capability, selected once at startup
pub enum CodeLookup {
    Available(Box<dyn CountryCodeLookup + Send + Sync>),
    Absent,
}

impl CodeLookup {
    /// Available only when enabled and a boundary dataset was loaded
    #[must_use]
    pub fn select(enabled: bool, dataset: Option<&BoundaryDataset>) -> Self {
        match dataset {
            Some(dataset) if enabled => {
                Self::Available(Box::new(IsoCodeLookup::from_boundary(dataset)))
            }
            _ => Self::Absent,
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl std::fmt::Debug for CodeLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available(_) => f.write_str("CodeLookup::Available"),
            Self::Absent => f.write_str("CodeLookup::Absent"),
        }
    }
}

/// Which rule produced a canonical key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Override,
    CodeLookup,
    PassThrough,
}

/// Canonical key for one raw name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub canonical: String,
    pub source: ResolutionSource,
    /// Whether the key names a boundary feature; `None` without a dataset
    pub in_key_space: Option<bool>,
}

/// Raw name → canonical key for every distinct country of a run
#[derive(Debug, Clone, Default)]
pub struct CountryKeyMapping {
    entries: BTreeMap<String, ResolvedKey>,
}

impl CountryKeyMapping {
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<&ResolvedKey> {
        self.entries.get(raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedKey)> {
        self.entries.iter().map(|(raw, key)| (raw.as_str(), key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw names whose key is not in the boundary key space
    #[must_use]
    pub fn misses(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, key)| key.in_key_space == Some(false))
            .map(|(raw, _)| raw.as_str())
            .collect()
    }

    /// Re-key raw country counts under canonical names, merging collisions
    #[must_use]
    pub fn canonical_counts(&self, counts: &BTreeMap<String, usize>) -> BTreeMap<String, usize> {
        let mut out = BTreeMap::new();
        for (raw, count) in counts {
            let key = self
                .entries
                .get(raw)
                .map_or_else(|| raw.clone(), |k| k.canonical.clone());
            *out.entry(key).or_insert(0) += count;
        }
        out
    }
}

/// Maps free-text country names onto boundary feature names
#[derive(Debug)]
pub struct CountryNameResolver {
    overrides: FxHashMap<&'static str, &'static str>,
    code_lookup: CodeLookup,
}

impl Default for CountryNameResolver {
    fn default() -> Self {
        Self::new(CodeLookup::Absent)
    }
}

impl CountryNameResolver {
    #[must_use]
    pub fn new(code_lookup: CodeLookup) -> Self {
        Self {
            overrides: COUNTRY_NAME_OVERRIDES.iter().copied().collect(),
            code_lookup,
        }
    }

    #[must_use]
    pub fn code_lookup(&self) -> &CodeLookup {
        &self.code_lookup
    }

    /// Canonical key for a raw name. Never fails; unknown names pass through.
    #[must_use]
    pub fn canonicalize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        self.resolve(raw).0
    }

    fn resolve<'a>(&self, raw: &'a str) -> (Cow<'a, str>, ResolutionSource) {
        if let Some(key) = self.overrides.get(raw) {
            return (Cow::Owned((*key).to_string()), ResolutionSource::Override);
        }
        if let CodeLookup::Available(lookup) = &self.code_lookup {
            if let Some(key) = lookup.feature_name(raw) {
                return (Cow::Owned(key), ResolutionSource::CodeLookup);
            }
        }
        (Cow::Borrowed(raw), ResolutionSource::PassThrough)
    }

    /// Resolve every distinct raw name, checking keys against the dataset
    pub fn build_mapping<'a>(
        &self,
        countries: impl IntoIterator<Item = &'a str>,
        dataset: Option<&BoundaryDataset>,
    ) -> CountryKeyMapping {
        let mut entries: BTreeMap<String, ResolvedKey> = BTreeMap::new();
        for raw in countries {
            if entries.contains_key(raw) {
                continue;
            }
            let (canonical, source) = self.resolve(raw);
            let in_key_space = dataset.map(|d| d.contains_key(&canonical));
            debug!("Country '{raw}' -> '{canonical}' ({source:?})");
            entries.insert(
                raw.to_string(),
                ResolvedKey {
                    canonical: canonical.into_owned(),
                    source,
                    in_key_space,
                },
            );
        }

        let mapping = CountryKeyMapping { entries };
        let misses = mapping.misses();
        if !misses.is_empty() {
            warn!(
                "{} of {} countries have no boundary feature and will show as no data: {}",
                misses.len(),
                mapping.len(),
                misses.join(", ")
            );
        }
        mapping
    }
}
