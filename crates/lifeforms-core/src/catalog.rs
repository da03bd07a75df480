//! The fixed option sets offered by the entry form.
//!
//! None of these are stored in the schema; the table only ever sees the
//! chosen labels. Each group has its own clone-eye and special-weapon lists,
//! looked up by group index.

use serde::Deserialize;

use crate::{
  Error, Result,
  grid::{ALL_LIFE_FORMS, ANY_RATING},
};

/// Per-group option lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupOptions {
  /// Label written to the `life_form` column.
  pub name:       String,
  #[serde(default)]
  pub clone_eyes: Vec<String>,
  #[serde(default)]
  pub sp_weapons: Vec<String>,
}

/// Every option set the form can offer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Catalog {
  pub groups:       Vec<GroupOptions>,
  pub main_shots:   Vec<String>,
  pub option_shots: Vec<String>,
  /// Grade labels, best first.
  pub ratings:      Vec<String>,
}

impl Catalog {
  /// Bounds-checked lookup of a group by its tab index.
  pub fn group(&self, index: usize) -> Result<&GroupOptions> {
    self
      .groups
      .get(index)
      .ok_or(Error::UnknownGroup { index, len: self.groups.len() })
  }

  pub fn group_names(&self) -> impl Iterator<Item = &str> {
    self.groups.iter().map(|g| g.name.as_str())
  }

  /// Entries for the life-form search selector: `All` then every group.
  pub fn life_form_filter_options(&self) -> Vec<String> {
    std::iter::once(ALL_LIFE_FORMS)
      .chain(self.group_names())
      .map(str::to_owned)
      .collect()
  }

  /// Entries for the rating search selector: `Any` then every rating.
  pub fn rating_filter_options(&self) -> Vec<String> {
    std::iter::once(ANY_RATING.to_owned())
      .chain(self.ratings.iter().cloned())
      .collect()
  }
}

fn owned(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| (*s).to_owned()).collect()
}

fn group(name: &str, clone_eyes: &[&str], sp_weapons: &[&str]) -> GroupOptions {
  GroupOptions {
    name:       name.to_owned(),
    clone_eyes: owned(clone_eyes),
    sp_weapons: owned(sp_weapons),
  }
}

impl Default for Catalog {
  /// Built-in option sets, used when the configuration file has none.
  fn default() -> Self {
    Self {
      groups:       vec![
        group("Hoppy", &["Red", "Blue", "Green"], &["Boomerang", "Hammer", "Whip"]),
        group("Mantis", &["Red", "Yellow", "Violet"], &["Scythe", "Boomerang", "Spear"]),
        group("Jelly", &["Blue", "White", "Pink"], &["Bubble", "Net", "Whip"]),
        group("Griffin", &["Gold", "Red", "Black"], &["Talon", "Gust", "Spear"]),
        group("Kraken", &["Green", "Black", "Blue"], &["Ink", "Net", "Hammer"]),
        group("Golem", &["Orange", "White", "Gold"], &["Boulder", "Hammer", "Quake"]),
      ],
      main_shots:   owned(&["Vulcan", "Laser", "Wave", "Spread"]),
      option_shots: owned(&["Bound", "Homing", "Rear", "Orbit"]),
      ratings:      owned(&["S", "A", "B", "C", "D"]),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn group_lookup_is_bounds_checked() {
    let catalog = Catalog::default();
    assert_eq!(catalog.group(0).unwrap().name, "Hoppy");
    let err = catalog.group(catalog.groups.len()).unwrap_err();
    assert!(matches!(err, Error::UnknownGroup { len: 6, .. }));
  }

  #[test]
  fn filter_options_lead_with_sentinels() {
    let catalog = Catalog::default();
    let life_forms = catalog.life_form_filter_options();
    assert_eq!(life_forms[0], "All");
    assert_eq!(life_forms.len(), catalog.groups.len() + 1);

    let ratings = catalog.rating_filter_options();
    assert_eq!(ratings, ["Any", "S", "A", "B", "C", "D"]);
  }
}
