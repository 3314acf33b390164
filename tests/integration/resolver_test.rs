use std::collections::BTreeMap;

use user_etl::geo::{BoundaryDataset, CodeLookup, CountryNameResolver, ResolutionSource};

use crate::utils::BOUNDARY_GEOJSON;

#[test]
fn test_canonicalize_examples() {
    let resolver = CountryNameResolver::default();
    assert_eq!(resolver.canonicalize("United States"), "United States of America");
    assert_eq!(resolver.canonicalize("Atlantis"), "Atlantis");
    assert_eq!(resolver.canonicalize("The Gambia"), "Gambia");
}

#[test]
fn test_coverage_report_with_code_lookup() -> anyhow::Result<()> {
    let dataset = BoundaryDataset::from_geojson_str(BOUNDARY_GEOJSON)?;
    let resolver = CountryNameResolver::new(CodeLookup::select(true, Some(&dataset)));
    let countries = ["United States", "Serbia", "Norway", "Atlantis", "FR"];

    let mapping = resolver.build_mapping(countries, Some(&dataset));

    assert_eq!(mapping.len(), 5);
    assert_eq!(mapping.misses(), vec!["Atlantis"]);
    let source = |raw: &str| mapping.get(raw).map(|key| key.source);
    assert_eq!(source("United States"), Some(ResolutionSource::Override));
    assert_eq!(source("Serbia"), Some(ResolutionSource::CodeLookup));
    assert_eq!(source("Atlantis"), Some(ResolutionSource::PassThrough));
    assert_eq!(
        mapping.get("FR").map(|key| key.canonical.as_str()),
        Some("France")
    );
    Ok(())
}

#[test]
fn test_without_code_lookup_names_pass_through() -> anyhow::Result<()> {
    let dataset = BoundaryDataset::from_geojson_str(BOUNDARY_GEOJSON)?;
    let resolver = CountryNameResolver::new(CodeLookup::select(false, Some(&dataset)));

    let mapping = resolver.build_mapping(["Serbia", "Norway"], Some(&dataset));

    assert_eq!(mapping.misses(), vec!["Serbia"]);
    assert_eq!(
        mapping.get("Norway").map(|key| key.in_key_space),
        Some(Some(true))
    );
    Ok(())
}

#[test]
fn test_full_counts_reach_the_map() -> anyhow::Result<()> {
    let dataset = BoundaryDataset::from_geojson_str(BOUNDARY_GEOJSON)?;
    let resolver = CountryNameResolver::new(CodeLookup::select(true, Some(&dataset)));
    let counts: BTreeMap<String, usize> = (0..30)
        .map(|i| (format!("Country{i:02}"), 1))
        .chain([("Norway".to_string(), 7)])
        .collect();

    let mapping = resolver.build_mapping(counts.keys().map(String::as_str), Some(&dataset));
    let canonical = mapping.canonical_counts(&counts);

    assert_eq!(canonical.len(), 31);
    assert_eq!(canonical.get("Norway"), Some(&7));
    Ok(())
}
