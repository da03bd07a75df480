//! Lifeform records, one catalogued entry per row.
//!
//! A record is created by an explicit add, rewritten in place by an update
//! keyed on its id, and destroyed individually or by a clear-all. Ids are
//! assigned by the store and never reused.

use std::{fmt, str::FromStr};

use crate::Error;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned row id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for RecordId {
  type Err = Error;

  /// Parse a decimal id, ignoring surrounding whitespace.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim()
      .parse::<i64>()
      .map(RecordId)
      .map_err(|_| Error::InvalidId(s.to_owned()))
  }
}

/// Number of rows touched by a mutating statement.
///
/// Zero is a valid, non-error outcome: updating or removing an id that does
/// not exist leaves the table unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowsAffected(pub usize);

impl RowsAffected {
  pub fn is_zero(self) -> bool { self.0 == 0 }
}

impl fmt::Display for RowsAffected {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// The non-id fields of a record; input to add and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLifeform {
  /// Group label, taken from the catalog's group list.
  pub life_form:   String,
  pub main_shot:   String,
  pub option_shot: String,
  pub clone_eyes:  String,
  pub sp_weapon:   String,
  /// Grade label, taken from the catalog's rating list.
  pub rating:      String,
  pub notes:       String,
}

impl NewLifeform {
  /// Attach a store-assigned id.
  pub fn with_id(self, id: RecordId) -> LifeformRecord {
    LifeformRecord {
      id,
      life_form: self.life_form,
      main_shot: self.main_shot,
      option_shot: self.option_shot,
      clone_eyes: self.clone_eyes,
      sp_weapon: self.sp_weapon,
      rating: self.rating,
      notes: self.notes,
    }
  }
}

/// A stored record, fields in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeformRecord {
  pub id:          RecordId,
  pub life_form:   String,
  pub main_shot:   String,
  pub option_shot: String,
  pub clone_eyes:  String,
  pub sp_weapon:   String,
  pub rating:      String,
  pub notes:       String,
}

impl LifeformRecord {
  /// Copy of the non-id fields, suitable for an update.
  pub fn fields(&self) -> NewLifeform {
    NewLifeform {
      life_form:   self.life_form.clone(),
      main_shot:   self.main_shot.clone(),
      option_shot: self.option_shot.clone(),
      clone_eyes:  self.clone_eyes.clone(),
      sp_weapon:   self.sp_weapon.clone(),
      rating:      self.rating.clone(),
      notes:       self.notes.clone(),
    }
  }
}
