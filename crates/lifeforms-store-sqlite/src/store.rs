//! [`SqliteStore`], the SQLite implementation of [`LifeformStore`].

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Params};

use lifeforms_core::{
  record::{LifeformRecord, NewLifeform, RecordId, RowsAffected},
  store::{LifeformFilter, LifeformStore},
};

use crate::{
  Error, Result,
  encode::RawLifeform,
  schema::{COLUMNS, SCHEMA},
};

/// File name used when no database path is configured.
pub const DEFAULT_DB_FILE: &str = "wonder_lifeforms.db";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A lifeform catalog backed by a single SQLite file.
///
/// The connection is opened once and held until [`SqliteStore::close`] (or
/// drop). Only one process should write to a given file at a time.
pub struct SqliteStore {
  pub(crate) conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// Any error returned here is fatal.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = Connection::open(path).map_err(|source| Error::Open {
      path: path.to_path_buf(),
      source,
    })?;
    let store = Self { conn };
    store.init_schema()?;
    tracing::info!(path = %path.display(), "opened lifeform store");
    Ok(store)
  }

  /// Open an in-memory store for tests.
  pub fn open_in_memory() -> Result<Self> {
    let conn = Connection::open_in_memory().map_err(|source| Error::Open {
      path: PathBuf::from(":memory:"),
      source,
    })?;
    let store = Self { conn };
    store.init_schema()?;
    Ok(store)
  }

  fn init_schema(&self) -> Result<()> {
    self.conn.execute_batch(SCHEMA).map_err(Error::Bootstrap)
  }

  /// Release the connection.
  pub fn close(self) -> Result<()> {
    self.conn.close().map_err(|(_, e)| Error::Database(e))?;
    tracing::info!("closed lifeform store");
    Ok(())
  }

  fn select<P: Params>(&self, sql: &str, params: P) -> Result<Vec<LifeformRecord>> {
    let mut stmt = self.conn.prepare(sql)?;
    let raws = stmt
      .query_map(params, RawLifeform::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(raws.into_iter().map(RawLifeform::into_record).collect())
  }
}

// ─── LifeformStore impl ──────────────────────────────────────────────────────

impl LifeformStore for SqliteStore {
  type Error = Error;

  fn bootstrap(&self) -> Result<()> { self.init_schema() }

  // ── Writes ────────────────────────────────────────────────────────────────

  fn add(&self, input: NewLifeform) -> Result<LifeformRecord> {
    self.conn.execute(
      "INSERT INTO lifeforms (
         life_form, main_shot, option_shot, clone_eyes, sp_weapon, rating, notes
       ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
      rusqlite::params![
        input.life_form,
        input.main_shot,
        input.option_shot,
        input.clone_eyes,
        input.sp_weapon,
        input.rating,
        input.notes,
      ],
    )?;

    let id = RecordId(self.conn.last_insert_rowid());
    tracing::debug!(%id, life_form = %input.life_form, "added lifeform");
    Ok(input.with_id(id))
  }

  fn update(&self, id: RecordId, input: &NewLifeform) -> Result<RowsAffected> {
    let n = self.conn.execute(
      "UPDATE lifeforms
          SET life_form = ?1, main_shot = ?2, option_shot = ?3, clone_eyes = ?4,
              sp_weapon = ?5, rating = ?6, notes = ?7
        WHERE id = ?8",
      rusqlite::params![
        input.life_form,
        input.main_shot,
        input.option_shot,
        input.clone_eyes,
        input.sp_weapon,
        input.rating,
        input.notes,
        id.0,
      ],
    )?;

    tracing::debug!(%id, rows = n, "updated lifeform");
    Ok(RowsAffected(n))
  }

  fn remove(&self, id: RecordId) -> Result<RowsAffected> {
    let n = self
      .conn
      .execute("DELETE FROM lifeforms WHERE id = ?1", rusqlite::params![id.0])?;

    tracing::debug!(%id, rows = n, "removed lifeform");
    Ok(RowsAffected(n))
  }

  fn remove_all(&self) -> Result<RowsAffected> {
    let n = self.conn.execute("DELETE FROM lifeforms", [])?;
    tracing::info!(rows = n, "removed all lifeforms");
    Ok(RowsAffected(n))
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  fn search(&self, filter: &LifeformFilter) -> Result<Vec<LifeformRecord>> {
    // NULL columns compare as empty so a wildcard search sees every row.
    let sql = format!(
      "SELECT {COLUMNS} FROM lifeforms
        WHERE (IFNULL(life_form, '') LIKE ?1)
          AND (IFNULL(rating, '') LIKE ?2)
        ORDER BY id"
    );
    let rows = self.select(
      &sql,
      rusqlite::params![filter.life_form, filter.rating],
    )?;

    tracing::debug!(
      life_form = %filter.life_form,
      rating = %filter.rating,
      rows = rows.len(),
      "searched lifeforms"
    );
    Ok(rows)
  }

  fn list_all(&self) -> Result<Vec<LifeformRecord>> {
    self.select(&format!("SELECT {COLUMNS} FROM lifeforms ORDER BY id"), [])
  }

  fn count(&self) -> Result<usize> {
    let n: i64 =
      self
        .conn
        .query_row("SELECT COUNT(*) FROM lifeforms", [], |row| row.get(0))?;
    Ok(usize::try_from(n).unwrap_or_default())
  }
}
