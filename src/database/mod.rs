use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::{info, warn};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::{config, solver::ServiceAreaPolygon};

/// The output dataset: every solved polygon stamped with its time of day.
pub struct Database {
    connection: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Database> {
        let connection = Connection::open(path)
            .with_context(|| format!("While opening output dataset {}", path.display()))?;
        Ok(Database { connection })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Database> {
        Ok(Database {
            connection: Connection::open_in_memory()?,
        })
    }

    /// Creates the polygons table if needed and makes sure it carries a date
    /// typed time field. With `overwrite`, existing polygons are dropped first.
    /// Either every step applies or none does.
    pub fn prepare_output(&mut self, overwrite: bool) -> Result<()> {
        let transaction = self.connection.transaction()?;
        if overwrite && check_polygons_table_exists(&transaction)? {
            warn!("Overwriting existing {} table", config::POLYGONS_TABLE);
            transaction
                .execute(&format!("DROP TABLE {}", config::POLYGONS_TABLE), [])
                .context("While dropping the existing polygons table")?;
        }
        transaction
            .execute(
                &format!(
                    "CREATE TABLE IF NOT EXISTS {} (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        facility_id INTEGER NOT NULL,
                        name TEXT NOT NULL,
                        from_break REAL NOT NULL,
                        to_break REAL NOT NULL,
                        shape TEXT NOT NULL
                    )",
                    config::POLYGONS_TABLE
                ),
                [],
            )
            .context("While creating the polygons table")?;
        ensure_time_field(&transaction)?;
        transaction
            .commit()
            .context("While preparing the output dataset")
    }

    pub fn append_polygons(
        &mut self,
        time_of_day: NaiveDateTime,
        polygons: &[ServiceAreaPolygon],
    ) -> Result<usize> {
        let transaction = self.connection.transaction()?;
        {
            let mut statement = transaction.prepare(&format!(
                "INSERT INTO {} (facility_id, name, from_break, to_break, shape, \"{}\") \
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                config::POLYGONS_TABLE,
                config::TIME_FIELD
            ))?;
            for polygon in polygons {
                statement.execute(params![
                    polygon.facility_id,
                    polygon.name,
                    polygon.from_break,
                    polygon.to_break,
                    polygon.shape,
                    time_of_day,
                ])?;
            }
        }
        transaction
            .commit()
            .with_context(|| format!("While appending polygons for {}", time_of_day))?;
        Ok(polygons.len())
    }

    pub fn count_polygons(&self) -> Result<usize> {
        let count: i64 = self.connection.query_row(
            &format!("SELECT COUNT(*) FROM {}", config::POLYGONS_TABLE),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Distinct non-null times of day, counted without decoding them.
    pub fn count_times_of_day(&self) -> Result<usize> {
        let count: i64 = self.connection.query_row(
            &format!(
                "SELECT COUNT(DISTINCT \"{}\") FROM {}",
                config::TIME_FIELD,
                config::POLYGONS_TABLE
            ),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    #[cfg(test)]
    pub fn get_times_of_day(&self) -> Result<Vec<NaiveDateTime>> {
        let mut statement = self.connection.prepare(&format!(
            "SELECT DISTINCT \"{0}\" FROM {1} WHERE \"{0}\" IS NOT NULL ORDER BY \"{0}\"",
            config::TIME_FIELD,
            config::POLYGONS_TABLE
        ))?;
        let times = statement.query_map([], |row| row.get::<_, NaiveDateTime>(0))?;
        times
            .collect::<Result<Vec<NaiveDateTime>, _>>()
            .context("While reading times of day")
    }
}

fn check_polygons_table_exists(connection: &Connection) -> Result<bool> {
    let mut statement =
        connection.prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
    statement
        .exists(params![config::POLYGONS_TABLE])
        .context("While looking for the polygons table")
}

fn is_date_type(field_type: &str) -> bool {
    config::DATE_FIELD_TYPES
        .iter()
        .any(|date_type| field_type.trim().eq_ignore_ascii_case(date_type))
}

fn ensure_time_field(connection: &Connection) -> Result<()> {
    if let Some((name, field_type)) = get_time_field(connection)? {
        if is_date_type(&field_type) {
            return Ok(());
        }
        warn!(
            "The output dataset contained a field called {} of type {:?} instead of a date type. \
            This field will be deleted and replaced.",
            name, field_type
        );
        connection
            .execute(
                &format!(
                    "ALTER TABLE {} DROP COLUMN \"{}\"",
                    config::POLYGONS_TABLE,
                    name
                ),
                [],
            )
            .context("While removing the mistyped time field")?;
    }
    info!("Adding field {} to the output dataset", config::TIME_FIELD);
    connection
        .execute(
            &format!(
                "ALTER TABLE {} ADD COLUMN \"{}\" {}",
                config::POLYGONS_TABLE,
                config::TIME_FIELD,
                config::TIME_FIELD_TYPE
            ),
            [],
        )
        .context("While adding the time field")?;
    Ok(())
}

/// Name and declared type of the time field, if the table has one.
fn get_time_field(connection: &Connection) -> Result<Option<(String, String)>> {
    let mut statement =
        connection.prepare(&format!("PRAGMA table_info({})", config::POLYGONS_TABLE))?;
    let fields = statement.query_map([], |row| {
        Ok((row.get::<_, String>(1)?, row.get::<_, String>(2)?))
    })?;
    for field in fields {
        let (name, field_type) = field?;
        if name.eq_ignore_ascii_case(config::TIME_FIELD) {
            return Ok(Some((name, field_type)));
        }
    }
    Ok(None)
}
