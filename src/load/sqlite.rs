//! Relational sink: a fixed-schema SQLite table

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, params_from_iter};

use crate::config::LoadMode;
use crate::error::{EtlError, Result};
use crate::models::UserRecord;
use crate::schema::Column;
use crate::transform::NormalizedTable;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Relational columns and their SQL types, in table order.
///
/// `Registered` and `RangoEdad` are not part of the relational schema.
pub const SQL_COLUMNS: [(Column, &str); 8] = [
    (Column::Gender, "TEXT"),
    (Column::FirstName, "TEXT"),
    (Column::LastName, "TEXT"),
    (Column::Nationality, "TEXT"),
    (Column::Age, "INTEGER"),
    (Column::Country, "TEXT"),
    (Column::Latitude, "REAL"),
    (Column::Longitude, "REAL"),
];

/// Outcome of a relational load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteLoadReport {
    pub db_path: PathBuf,
    pub table: String,
    pub rows: usize,
    pub mode: LoadMode,
    /// Tables present in the database after the load
    pub tables: Vec<String>,
}

impl fmt::Display for SqliteLoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows loaded into {}::{} ({}); tables: {}",
            self.rows,
            self.db_path.display(),
            self.table,
            self.mode.as_str(),
            self.tables.join(", ")
        )
    }
}

/// Load the table into `table_name`, creating it if absent
pub fn load_sqlite(
    table: &NormalizedTable,
    db_path: &Path,
    table_name: &str,
    mode: LoadMode,
) -> Result<SqliteLoadReport> {
    let start = Instant::now();
    validate_identifier(table_name)?;
    log_operation_start(&format!("Loading table '{table_name}' ({}) into", mode.as_str()), db_path);

    let mut conn = Connection::open(db_path)?;
    let rows = load_into(&mut conn, table, table_name, mode)?;

    let tables = list_tables(&conn)?;
    log_operation_complete("loaded", db_path, rows, Some(start.elapsed()));

    Ok(SqliteLoadReport {
        db_path: db_path.to_path_buf(),
        table: table_name.to_string(),
        rows,
        mode,
        tables,
    })
}

/// Write the rows into `table_name` on an open connection.
///
/// Replace-mode drop, table creation and inserts share one transaction, so a
/// failed load leaves the previous contents in place.
pub fn load_into(
    conn: &mut Connection,
    table: &NormalizedTable,
    table_name: &str,
    mode: LoadMode,
) -> Result<usize> {
    validate_identifier(table_name)?;
    let realized: Vec<bool> = SQL_COLUMNS
        .iter()
        .map(|(column, _)| table.schema().contains(*column))
        .collect();

    let tx = conn.transaction()?;
    if mode == LoadMode::Replace {
        tx.execute(&format!("DROP TABLE IF EXISTS \"{table_name}\""), [])?;
    }
    tx.execute(&create_table_sql(table_name), [])?;
    {
        let mut stmt = tx.prepare(&insert_sql(table_name))?;
        for record in table.records() {
            let values = SQL_COLUMNS
                .iter()
                .zip(&realized)
                .map(|((column, _), realized)| {
                    if *realized {
                        sql_value(record, *column)
                    } else {
                        SqlValue::Null
                    }
                });
            stmt.execute(params_from_iter(values))?;
        }
    }
    tx.commit()?;
    Ok(table.num_rows())
}

/// Names of every table in the database, sorted
pub fn list_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(names)
}

fn create_table_sql(table_name: &str) -> String {
    let columns: Vec<String> = SQL_COLUMNS
        .iter()
        .map(|(column, sql_type)| format!("\"{}\" {sql_type}", column.name()))
        .collect();
    format!("CREATE TABLE IF NOT EXISTS \"{table_name}\" ({})", columns.join(", "))
}

fn insert_sql(table_name: &str) -> String {
    let names: Vec<String> = SQL_COLUMNS
        .iter()
        .map(|(column, _)| format!("\"{}\"", column.name()))
        .collect();
    let placeholders = vec!["?"; SQL_COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO \"{table_name}\" ({}) VALUES ({placeholders})",
        names.join(", ")
    )
}

fn sql_value(record: &UserRecord, column: Column) -> SqlValue {
    let text = |value: Option<&str>| value.map_or(SqlValue::Null, |s| SqlValue::Text(s.to_string()));
    let real = |value: Option<f64>| value.map_or(SqlValue::Null, SqlValue::Real);
    match column {
        Column::Gender => SqlValue::Text(record.gender.as_str().to_string()),
        Column::FirstName => text(record.first_name.as_deref()),
        Column::LastName => text(record.last_name.as_deref()),
        Column::Nationality => text(record.nationality.code()),
        Column::Age => SqlValue::Integer(i64::from(record.age)),
        Column::Country => text(record.country.name()),
        Column::Latitude => real(record.latitude),
        Column::Longitude => real(record.longitude),
        Column::Registered => record
            .registered_years
            .map_or(SqlValue::Null, |y| SqlValue::Integer(i64::from(y))),
        Column::AgeRange => text(record.age_range.label()),
    }
}

/// Table names are interpolated into SQL, so only plain identifiers pass
fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(EtlError::Config(format!("invalid SQLite table name '{name}'")))
    }
}
