//! [`SqliteStore`] — the SQLite implementation of [`StatStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use covboard_core::{
  stat::{CovidStat, StatRow},
  store::StatStore,
};

use crate::{
  encode::{RawStatRow, encode_date},
  schema::{RESET_SCHEMA, TABLE_EXISTS},
  Error, Result,
};

const INSERT_STAT: &str = "INSERT INTO covid_stats (
     date_value, country_code, confirmed, deaths,
     stringency_actual, stringency
   ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

const SELECT_BY_DEATHS: &str = "SELECT
     id, date_value, country_code, confirmed, deaths,
     stringency_actual, stringency
   FROM covid_stats
   ORDER BY deaths ASC";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A statistics store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Opening
/// does not create the table; that is `reset_schema`'s job, so a fresh store
/// reads as empty until the first refresh.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Ok(Self { conn })
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Ok(Self { conn })
  }
}

// ─── StatStore impl ──────────────────────────────────────────────────────────

impl StatStore for SqliteStore {
  type Error = Error;

  async fn reset_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(RESET_SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn load(&self, stats: Vec<CovidStat>) -> Result<usize> {
    let inserted = self
      .conn
      .call(move |conn| {
        // One parameterized insert per row; the transaction gives the single
        // commit at the end.
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(INSERT_STAT)?;
          for stat in &stats {
            stmt.execute(rusqlite::params![
              encode_date(stat.date_value),
              stat.country_code,
              stat.confirmed,
              stat.deaths,
              stat.stringency_actual,
              stat.stringency,
            ])?;
          }
        }
        tx.commit()?;
        Ok(stats.len())
      })
      .await?;
    Ok(inserted)
  }

  async fn read_all(&self) -> Result<Vec<StatRow>> {
    let raws: Vec<RawStatRow> = self
      .conn
      .call(|conn| {
        // Before the first reset_schema there is no table at all; that is an
        // expected state, not an error.
        let exists: bool = conn
          .query_row(TABLE_EXISTS, [], |_| Ok(true))
          .optional()?
          .unwrap_or(false);

        if !exists {
          return Ok(Vec::new());
        }

        let mut stmt = conn.prepare(SELECT_BY_DEATHS)?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawStatRow {
              id:                row.get(0)?,
              date_value:        row.get(1)?,
              country_code:      row.get(2)?,
              confirmed:         row.get(3)?,
              deaths:            row.get(4)?,
              stringency_actual: row.get(5)?,
              stringency:        row.get(6)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawStatRow::into_row).collect()
  }
}
