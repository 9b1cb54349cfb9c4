//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::Local;
use floodwatch_core::{
  classify,
  record::{HealthRecord, NewRecord},
  store::RecordStore,
};

use crate::{
  Error, Result,
  encode::{RawRecord, encode_date, encode_rainfall, encode_risk},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Floodwatch record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All access
/// is funnelled through one dedicated connection thread, so concurrent
/// appends serialise without any locking on our side.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  async fn append(&self, input: NewRecord) -> Result<HealthRecord> {
    // Derived and stamped here; nothing the caller sent can override them.
    let risk = classify(input.diarrhea, input.rainfall);
    let date = Local::now().date_naive();

    let village      = input.village.clone();
    let diarrhea     = i64::from(input.diarrhea);
    let fever        = i64::from(input.fever);
    let rainfall_str = encode_rainfall(input.rainfall).to_owned();
    let risk_str     = encode_risk(risk).to_owned();
    let date_str     = encode_date(date);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO health_data (village, diarrhea, fever, rainfall, risk, date)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            village,
            diarrhea,
            fever,
            rainfall_str,
            risk_str,
            date_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(HealthRecord {
      id,
      village: input.village,
      diarrhea: input.diarrhea,
      fever: input.fever,
      rainfall: input.rainfall,
      risk,
      date,
    })
  }

  async fn list_all(&self) -> Result<Vec<HealthRecord>> {
    let raws: Vec<RawRecord> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, village, diarrhea, fever, rainfall, risk, date
           FROM health_data
           ORDER BY id DESC",
        )?;

        let rows = stmt
          .query_map([], |row| {
            Ok(RawRecord {
              id:       row.get(0)?,
              village:  row.get(1)?,
              diarrhea: row.get(2)?,
              fever:    row.get(3)?,
              rainfall: row.get(4)?,
              risk:     row.get(5)?,
              date:     row.get(6)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}
