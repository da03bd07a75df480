//! Mapping between stored records and the display grid.
//!
//! A display row is the eight record fields in schema order, rendered as
//! strings. The mapping is pure: nothing here touches storage.

use crate::{
  Error, Result,
  record::{LifeformRecord, RecordId},
};

/// Number of cells in a display row.
pub const COLUMN_COUNT: usize = 8;

/// Grid column headers in schema order.
pub const COLUMN_HEADERS: [&str; COLUMN_COUNT] = [
  "ID",
  "Life Form",
  "Main Shot",
  "Option Shot",
  "Clone Eyes",
  "Special Weapon",
  "Rating",
  "Notes",
];

/// Index of the id cell within a display row.
pub const ID_COLUMN: usize = 0;

/// `LIKE` pattern that matches every value.
pub const WILDCARD: &str = "%";

/// Life-form selector entry meaning "no life-form filter".
pub const ALL_LIFE_FORMS: &str = "All";

/// Rating selector entry meaning "no rating filter".
pub const ANY_RATING: &str = "Any";

const PAD: &str = "  ";

pub type GridRow = [String; COLUMN_COUNT];

/// Cosmetic spacing applied to every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellPadding {
  #[default]
  None,
  /// Two spaces on each side of every cell.
  Spaced,
}

impl CellPadding {
  /// Wrap a cell value for display.
  pub fn apply(self, cell: String) -> String {
    match self {
      CellPadding::None => cell,
      CellPadding::Spaced => format!("{PAD}{cell}{PAD}"),
    }
  }

  /// Undo [`CellPadding::apply`]; cells without the padding pass through.
  pub fn strip(self, cell: &str) -> &str {
    match self {
      CellPadding::None => cell,
      CellPadding::Spaced => cell
        .strip_prefix(PAD)
        .and_then(|c| c.strip_suffix(PAD))
        .unwrap_or(cell),
    }
  }
}

/// Render one record as a display row.
pub fn record_to_row(record: &LifeformRecord, padding: CellPadding) -> GridRow {
  [
    record.id.to_string(),
    record.life_form.clone(),
    record.main_shot.clone(),
    record.option_shot.clone(),
    record.clone_eyes.clone(),
    record.sp_weapon.clone(),
    record.rating.clone(),
    record.notes.clone(),
  ]
  .map(|cell| padding.apply(cell))
}

/// Render records as display rows, preserving their order.
pub fn rows_to_grid(
  records: &[LifeformRecord],
  padding: CellPadding,
) -> Vec<GridRow> {
  records.iter().map(|r| record_to_row(r, padding)).collect()
}

/// Rebuild a record from a (possibly edited) display row.
///
/// Fails if the row does not have exactly [`COLUMN_COUNT`] cells or if the id
/// cell is not an integer.
pub fn selected_row_to_record(
  row: &[String],
  padding: CellPadding,
) -> Result<LifeformRecord> {
  let [id, life_form, main_shot, option_shot, clone_eyes, sp_weapon, rating, notes] =
    row
  else {
    return Err(Error::RowWidth { expected: COLUMN_COUNT, found: row.len() });
  };

  let cell = |c: &String| padding.strip(c).to_owned();

  Ok(LifeformRecord {
    id:          id.parse::<RecordId>()?,
    life_form:   cell(life_form),
    main_shot:   cell(main_shot),
    option_shot: cell(option_shot),
    clone_eyes:  cell(clone_eyes),
    sp_weapon:   cell(sp_weapon),
    rating:      cell(rating),
    notes:       cell(notes),
  })
}

/// Map a selector value to a `LIKE` pattern.
///
/// The sentinel becomes [`WILDCARD`]; anything else is returned verbatim, so
/// an option containing `%` or `_` still behaves as a pattern.
pub fn resolve_filter_value(selected: &str, sentinel: &str) -> String {
  if selected == sentinel {
    WILDCARD.to_owned()
  } else {
    selected.to_owned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::record::NewLifeform;

  fn hoppy() -> LifeformRecord {
    NewLifeform {
      life_form:   "Hoppy".into(),
      main_shot:   "Vulcan".into(),
      option_shot: "Bound".into(),
      clone_eyes:  "Red".into(),
      sp_weapon:   "Boomerang".into(),
      rating:      "S".into(),
      notes:       String::new(),
    }
    .with_id(RecordId(3))
  }

  #[test]
  fn row_is_in_schema_order() {
    let row = record_to_row(&hoppy(), CellPadding::None);
    assert_eq!(row, ["3", "Hoppy", "Vulcan", "Bound", "Red", "Boomerang", "S", ""]);
  }

  #[test]
  fn spaced_padding_wraps_every_cell() {
    let row = record_to_row(&hoppy(), CellPadding::Spaced);
    assert_eq!(row[ID_COLUMN], "  3  ");
    assert_eq!(row[7], "    ");
    assert!(row.iter().all(|c| c.starts_with("  ") && c.ends_with("  ")));
  }

  #[test]
  fn grid_preserves_record_order() {
    let mut second = hoppy();
    second.id = RecordId(1);
    let grid = rows_to_grid(&[hoppy(), second], CellPadding::None);
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[0][ID_COLUMN], "3");
    assert_eq!(grid[1][ID_COLUMN], "1");
  }

  #[test]
  fn selected_row_inverts_rendering() {
    for padding in [CellPadding::None, CellPadding::Spaced] {
      let row = record_to_row(&hoppy(), padding);
      let back = selected_row_to_record(&row, padding).unwrap();
      assert_eq!(back, hoppy());
    }
  }

  #[test]
  fn selected_row_keeps_inner_whitespace_of_edited_cells() {
    let mut row = record_to_row(&hoppy(), CellPadding::None);
    row[7] = " top  tier ".into();
    let back = selected_row_to_record(&row, CellPadding::None).unwrap();
    assert_eq!(back.notes, " top  tier ");
  }

  #[test]
  fn selected_row_rejects_bad_id() {
    let mut row = record_to_row(&hoppy(), CellPadding::None);
    row[ID_COLUMN] = "three".into();
    let err = selected_row_to_record(&row, CellPadding::None).unwrap_err();
    assert!(err.is_parse());
    assert!(matches!(err, Error::InvalidId(_)));
  }

  #[test]
  fn selected_row_rejects_wrong_width() {
    let row = vec!["1".to_string(), "Hoppy".to_string()];
    let err = selected_row_to_record(&row, CellPadding::None).unwrap_err();
    assert!(matches!(err, Error::RowWidth { expected: 8, found: 2 }));
  }

  #[test]
  fn filter_value_sentinel_maps_to_wildcard() {
    assert_eq!(resolve_filter_value("All", ALL_LIFE_FORMS), "%");
    assert_eq!(resolve_filter_value("Any", ANY_RATING), "%");
  }

  #[test]
  fn filter_value_passes_patterns_through() {
    assert_eq!(resolve_filter_value("Hoppy", ALL_LIFE_FORMS), "Hoppy");
    assert_eq!(resolve_filter_value("S_", ANY_RATING), "S_");
  }
}
