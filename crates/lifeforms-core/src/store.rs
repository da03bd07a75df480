//! The `LifeformStore` trait and its search filter.
//!
//! The trait is implemented by storage backends (e.g.
//! `lifeforms-store-sqlite`). The terminal front end depends on this
//! abstraction, not on any concrete backend.

use crate::{
  grid::{ALL_LIFE_FORMS, ANY_RATING, WILDCARD, resolve_filter_value},
  record::{LifeformRecord, NewLifeform, RecordId, RowsAffected},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`LifeformStore::search`].
///
/// Both fields are SQL `LIKE` patterns; `%` and `_` act as wildcards even when
/// they come from an option label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeformFilter {
  pub life_form: String,
  pub rating:    String,
}

impl LifeformFilter {
  /// A filter matching every row.
  pub fn all() -> Self {
    Self { life_form: WILDCARD.to_owned(), rating: WILDCARD.to_owned() }
  }

  /// Build a filter from the two selector values, mapping the `All` and
  /// `Any` sentinels to the wildcard.
  pub fn from_selection(life_form: &str, rating: &str) -> Self {
    Self {
      life_form: resolve_filter_value(life_form, ALL_LIFE_FORMS),
      rating:    resolve_filter_value(rating, ANY_RATING),
    }
  }

  pub fn is_all(&self) -> bool {
    self.life_form == WILDCARD && self.rating == WILDCARD
  }
}

impl Default for LifeformFilter {
  fn default() -> Self { Self::all() }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a lifeform store backend.
///
/// Every mutating method is a single statement: it either applies fully or
/// has no effect. Destructive methods act immediately; confirming them with
/// the user is the caller's job.
pub trait LifeformStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Ensure the backing table exists. Safe to call any number of times.
  fn bootstrap(&self) -> Result<(), Self::Error>;

  /// Insert a new row and return it with its assigned id. Duplicate content
  /// is allowed.
  fn add(&self, input: NewLifeform) -> Result<LifeformRecord, Self::Error>;

  /// Overwrite every non-id field of the row with `id`.
  ///
  /// Returns zero rows affected if `id` does not exist.
  fn update(
    &self,
    id: RecordId,
    input: &NewLifeform,
  ) -> Result<RowsAffected, Self::Error>;

  /// Remove the row with `id`. Zero rows affected is not an error.
  fn remove(&self, id: RecordId) -> Result<RowsAffected, Self::Error>;

  /// Remove every row unconditionally.
  fn remove_all(&self) -> Result<RowsAffected, Self::Error>;

  /// Return all rows matching both patterns of `filter`.
  fn search(
    &self,
    filter: &LifeformFilter,
  ) -> Result<Vec<LifeformRecord>, Self::Error>;

  /// Return every row.
  fn list_all(&self) -> Result<Vec<LifeformRecord>, Self::Error> {
    self.search(&LifeformFilter::all())
  }

  /// Number of stored rows, whatever the current filter.
  fn count(&self) -> Result<usize, Self::Error> {
    self.list_all().map(|records| records.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sentinels_become_wildcards() {
    let filter = LifeformFilter::from_selection("All", "Any");
    assert!(filter.is_all());
    assert_eq!(filter, LifeformFilter::all());
  }

  #[test]
  fn concrete_selection_passes_through() {
    let filter = LifeformFilter::from_selection("Hoppy", "S");
    assert_eq!(filter.life_form, "Hoppy");
    assert_eq!(filter.rating, "S");
    assert!(!filter.is_all());
  }

  #[test]
  fn sentinels_are_per_selector() {
    // "Any" is only a sentinel for the rating selector.
    let filter = LifeformFilter::from_selection("Any", "All");
    assert_eq!(filter.life_form, "Any");
    assert_eq!(filter.rating, "All");
  }
}
