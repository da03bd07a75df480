//! Decoding rows read from the `lifeforms` table.
//!
//! Text columns are nullable in the schema; a NULL reads back as an empty
//! string so callers never have to tell the two apart.

use lifeforms_core::record::{LifeformRecord, RecordId};

/// Raw values read directly from a `lifeforms` row.
pub struct RawLifeform {
  pub id:          i64,
  pub life_form:   Option<String>,
  pub main_shot:   Option<String>,
  pub option_shot: Option<String>,
  pub clone_eyes:  Option<String>,
  pub sp_weapon:   Option<String>,
  pub rating:      Option<String>,
  pub notes:       Option<String>,
}

impl RawLifeform {
  /// Read a row selected with [`COLUMNS`](crate::schema::COLUMNS).
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      life_form:   row.get(1)?,
      main_shot:   row.get(2)?,
      option_shot: row.get(3)?,
      clone_eyes:  row.get(4)?,
      sp_weapon:   row.get(5)?,
      rating:      row.get(6)?,
      notes:       row.get(7)?,
    })
  }

  pub fn into_record(self) -> LifeformRecord {
    LifeformRecord {
      id:          RecordId(self.id),
      life_form:   self.life_form.unwrap_or_default(),
      main_shot:   self.main_shot.unwrap_or_default(),
      option_shot: self.option_shot.unwrap_or_default(),
      clone_eyes:  self.clone_eyes.unwrap_or_default(),
      sp_weapon:   self.sp_weapon.unwrap_or_default(),
      rating:      self.rating.unwrap_or_default(),
      notes:       self.notes.unwrap_or_default(),
    }
  }
}
