use serde_json::json;
use user_etl::models::{AgeRange, Gender};
use user_etl::schema::{Column, RegisteredSource};
use user_etl::transform::{Normalizer, seeded_rng};
use user_etl::Aggregator;

use crate::utils::{raw_user, three_users};

fn registered_years(seed: &str) -> Vec<Option<u32>> {
    let batch: Vec<_> = (0..20).map(|i| raw_user("female", 20 + i, "Norway")).collect();
    Normalizer::normalize(&batch, &mut seeded_rng(seed))
        .records()
        .iter()
        .map(|r| r.registered_years)
        .collect()
}

#[test]
fn test_same_seed_same_synthesized_values() {
    let first = registered_years("1234");
    let second = registered_years("1234");
    assert_eq!(first, second);
    assert!(first.iter().all(|y| y.is_some_and(|y| y <= 10)));

    let token = registered_years("semilla");
    assert_eq!(token, registered_years("semilla"));
}

#[test]
fn test_three_user_scenario() {
    let table = Normalizer::normalize(&three_users(), &mut seeded_rng("1234"));
    let summary = Aggregator::summarize(&table);

    assert_eq!(summary.count_for(Gender::Male), 2);
    assert_eq!(summary.count_for(Gender::Female), 1);
    assert_eq!(summary.average_age, Some(35.0));

    let ranges: Vec<Option<&str>> = table.records().iter().map(|r| r.age_range.label()).collect();
    assert_eq!(ranges, vec![Some("0-18"), Some("18-30"), Some("65+")]);
    assert_eq!(table.schema().registered_source(), RegisteredSource::Synthesized);
}

#[test]
fn test_gender_counts_sum_to_retained_rows() {
    let batch = vec![
        raw_user("male", 30, "Spain"),
        raw_user("nonbinary", 40, "Spain"),
        json!({ "gender": "female", "dob": { "age": null } }),
        json!({ "gender": "female", "dob": {} }),
        json!({ "gender": "female", "dob": { "age": -3 } }),
    ];
    let table = Normalizer::normalize(&batch, &mut seeded_rng("1234"));
    let summary = Aggregator::summarize(&table);

    assert_eq!(table.report().excluded_rows, 3);
    assert_eq!(summary.count_by_gender.values().sum::<usize>(), table.num_rows());
    assert_eq!(summary.count_for(Gender::Unknown), 1);
}

#[test]
fn test_every_age_lands_in_one_bucket() {
    for age in 0..120 {
        let bucket = AgeRange::for_age(age);
        assert!(AgeRange::BUCKETS.contains(&bucket), "age {age}");
    }
    assert_eq!(AgeRange::for_age(17).label(), Some("0-18"));
    assert_eq!(AgeRange::for_age(18).label(), Some("18-30"));
    assert_eq!(AgeRange::for_age(64).label(), Some("30-65"));
    assert_eq!(AgeRange::for_age(65).label(), Some("65+"));
    assert_eq!(AgeRange::for_age(120), AgeRange::OutOfRange);
}

#[test]
fn test_sourced_registered_column() {
    let mut user = raw_user("male", 44, "France");
    user["registered"] = json!({ "date": "2010-05-05T00:00:00.000Z", "age": "9" });
    let table = Normalizer::normalize(&[user], &mut seeded_rng("1234"));

    assert_eq!(table.schema().registered_source(), RegisteredSource::Sourced);
    assert_eq!(table.records()[0].registered_years, Some(9));
    assert!(table.schema().contains(Column::Registered));
}

#[test]
fn test_schema_spans_rows_later_excluded() {
    let batch = vec![
        json!({ "gender": "male", "dob": { "age": 30 } }),
        json!({ "gender": "female", "dob": {}, "location": { "country": "Spain" } }),
    ];
    let table = Normalizer::normalize(&batch, &mut seeded_rng("1234"));

    assert_eq!(table.num_rows(), 1);
    assert!(table.schema().contains(Column::Country));
    assert_eq!(table.records()[0].country.name(), None);
}
