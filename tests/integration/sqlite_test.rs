use rusqlite::Connection;
use serde_json::json;
use user_etl::config::LoadMode;
use user_etl::load::{SQL_COLUMNS, load_into, load_sqlite};
use user_etl::transform::{Normalizer, seeded_rng};

use crate::utils::{raw_user, three_users};

fn count_rows(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM usuarios", [], |row| row.get(0))
}

#[test]
fn test_replace_recreates_and_append_accumulates() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("usuarios.db");
    let table = Normalizer::normalize(&three_users(), &mut seeded_rng("1234"));

    load_sqlite(&table, &db, "usuarios", LoadMode::Replace)?;
    load_sqlite(&table, &db, "usuarios", LoadMode::Append)?;
    let conn = Connection::open(&db)?;
    assert_eq!(count_rows(&conn)?, 6);

    let report = load_sqlite(&table, &db, "usuarios", LoadMode::Replace)?;
    assert_eq!(count_rows(&conn)?, 3);
    assert_eq!(report.rows, 3);
    assert_eq!(report.mode, LoadMode::Replace);
    assert_eq!(report.tables, vec!["usuarios".to_string()]);
    Ok(())
}

#[test]
fn test_fixed_relational_schema() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("usuarios.db");
    let table = Normalizer::normalize(&three_users(), &mut seeded_rng("1234"));
    load_sqlite(&table, &db, "usuarios", LoadMode::Replace)?;

    let conn = Connection::open(&db)?;
    let mut stmt = conn.prepare("SELECT name, type FROM pragma_table_info('usuarios')")?;
    let columns = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let expected: Vec<(String, String)> = SQL_COLUMNS
        .iter()
        .map(|(column, sql_type)| (column.name().to_string(), (*sql_type).to_string()))
        .collect();
    assert_eq!(columns, expected);

    let (gender, age, lat): (String, i64, f64) = conn.query_row(
        "SELECT Genero, Edad, latitude FROM usuarios ORDER BY Edad LIMIT 1",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;
    assert_eq!((gender.as_str(), age), ("male", 17));
    assert!((lat - -42.175).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_unrealized_columns_are_null() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("usuarios.db");
    let batch = vec![json!({ "gender": "female", "dob": { "age": 29 } })];
    let table = Normalizer::normalize(&batch, &mut seeded_rng("1234"));
    load_sqlite(&table, &db, "usuarios", LoadMode::Replace)?;

    let conn = Connection::open(&db)?;
    let (name, country): (Option<String>, Option<String>) = conn.query_row(
        "SELECT Nombre, Pais FROM usuarios",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    assert_eq!((name, country), (None, None));
    Ok(())
}

#[test]
fn test_tables_report_lists_other_tables() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("usuarios.db");
    Connection::open(&db)?.execute("CREATE TABLE auditoria (id INTEGER)", [])?;
    let table = Normalizer::normalize(&three_users(), &mut seeded_rng("1234"));

    let report = load_sqlite(&table, &db, "usuarios", LoadMode::Append)?;

    assert_eq!(report.tables, vec!["auditoria".to_string(), "usuarios".to_string()]);
    Ok(())
}

#[test]
fn test_failed_replace_keeps_previous_rows() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("usuarios.db");
    let table = Normalizer::normalize(&three_users(), &mut seeded_rng("1234"));
    load_sqlite(&table, &db, "usuarios", LoadMode::Replace)?;

    // Cap the file at its current size so the larger load runs out of pages
    let mut conn = Connection::open(&db)?;
    let pages: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    conn.query_row(&format!("PRAGMA max_page_count = {pages}"), [], |row| {
        row.get::<_, i64>(0)
    })?;

    let batch: Vec<_> = (0..2000).map(|i| raw_user("female", 20 + i % 50, "Norway")).collect();
    let larger = Normalizer::normalize(&batch, &mut seeded_rng("1234"));
    assert!(load_into(&mut conn, &larger, "usuarios", LoadMode::Replace).is_err());

    assert_eq!(count_rows(&conn)?, 3);
    Ok(())
}
