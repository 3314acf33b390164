use arrow::array::AsArray;
use arrow::datatypes::{DataType, Int64Type};
use serde_json::json;
use user_etl::Aggregator;
use user_etl::load::{read_back, write_users_csv};
use user_etl::models::AgeRange;
use user_etl::transform::{Normalizer, seeded_rng};

use crate::utils::{raw_user, three_users};

#[test]
fn test_round_trip_keeps_rows_and_columns() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("raw_users.csv");
    let table = Normalizer::normalize(&three_users(), &mut seeded_rng("1234"));

    let artifact = write_users_csv(&table, &path)?;
    assert_eq!(artifact.rows, 3);

    let batch = read_back(&path)?;
    assert_eq!(batch.num_rows(), table.num_rows());
    let schema = batch.schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, table.schema().column_names());

    let age_index = schema.index_of("Edad")?;
    assert_eq!(schema.field(age_index).data_type(), &DataType::Int64);
    let ages: Vec<i64> = batch
        .column(age_index)
        .as_primitive::<Int64Type>()
        .values()
        .to_vec();
    assert_eq!(ages, vec![17, 18, 70]);

    let ranges = batch.column(schema.index_of("RangoEdad")?).as_string::<i32>();
    assert_eq!(ranges.value(0), "0-18");
    assert_eq!(ranges.value(2), "65+");
    Ok(())
}

#[test]
fn test_partial_schema_writes_narrower_table() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("raw_users.csv");
    let batch = vec![
        json!({ "gender": "female", "dob": { "age": 33 } }),
        json!({ "gender": "male", "dob": { "age": 51 } }),
    ];
    let table = Normalizer::normalize(&batch, &mut seeded_rng("1234"));
    write_users_csv(&table, &path)?;

    let text = std::fs::read_to_string(&path)?;
    assert_eq!(text.lines().next(), Some("Genero,Edad,Registered,RangoEdad"));
    assert_eq!(read_back(&path)?.num_rows(), 2);
    Ok(())
}

#[test]
fn test_unparsable_coordinates_are_empty_cells() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("raw_users.csv");
    let mut user = raw_user("male", 40, "Spain");
    user["location"]["coordinates"]["latitude"] = json!("north");
    let table = Normalizer::normalize(&[user], &mut seeded_rng("1234"));
    write_users_csv(&table, &path)?;

    let batch = read_back(&path)?;
    let latitude = batch.column(batch.schema().index_of("latitude")?);
    // A column with no parsable value reads back as the Null type
    assert_eq!(latitude.logical_nulls().map(|n| n.null_count()), Some(1));
    Ok(())
}

#[test]
fn test_out_of_range_age_is_kept_with_empty_bucket() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("raw_users.csv");
    let batch = vec![raw_user("female", 120, "Spain"), raw_user("male", 40, "Spain")];
    let table = Normalizer::normalize(&batch, &mut seeded_rng("1234"));

    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.report().excluded_rows, 0);
    assert_eq!(table.records()[0].age_range, AgeRange::OutOfRange);

    let summary = Aggregator::summarize(&table);
    assert_eq!(summary.average_age, Some(80.0));
    assert_eq!(summary.count_by_age_range.get(&AgeRange::OutOfRange), Some(&1));
    assert_eq!(summary.age_range_counts().iter().map(|(_, n)| n).sum::<usize>(), 1);

    write_users_csv(&table, &path)?;
    let text = std::fs::read_to_string(&path)?;
    let rows: Vec<Vec<&str>> = text.lines().map(|line| line.split(',').collect()).collect();
    let range = rows[0].iter().position(|name| *name == "RangoEdad").expect("RangoEdad");
    let age = rows[0].iter().position(|name| *name == "Edad").expect("Edad");
    assert_eq!((rows[1][age], rows[1][range]), ("120", ""));
    assert_eq!((rows[2][age], rows[2][range]), ("40", "30-65"));
    Ok(())
}
