//! Tests for `SqliteStore` against in-memory and on-disk databases.

use lifeforms_core::{
  record::{NewLifeform, RecordId},
  store::{LifeformFilter, LifeformStore},
};

use crate::{SqliteStore, error::Error};

fn store() -> SqliteStore {
  SqliteStore::open_in_memory().expect("in-memory store")
}

fn lifeform(life_form: &str, rating: &str) -> NewLifeform {
  NewLifeform {
    life_form:   life_form.into(),
    main_shot:   "Vulcan".into(),
    option_shot: "Bound".into(),
    clone_eyes:  "Red".into(),
    sp_weapon:   "Boomerang".into(),
    rating:      rating.into(),
    notes:       String::new(),
  }
}

fn filter(life_form: &str, rating: &str) -> LifeformFilter {
  LifeformFilter { life_form: life_form.into(), rating: rating.into() }
}

fn ids(records: &[lifeforms_core::record::LifeformRecord]) -> Vec<RecordId> {
  records.iter().map(|r| r.id).collect()
}

// ─── Bootstrap ───────────────────────────────────────────────────────────────

#[test]
fn bootstrap_is_idempotent() {
  let s = store();
  s.add(lifeform("Hoppy", "S")).unwrap();

  for _ in 0..3 {
    s.bootstrap().unwrap();
  }

  let tables: i64 = s
    .conn
    .query_row(
      "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'lifeforms'",
      [],
      |r| r.get(0),
    )
    .unwrap();
  assert_eq!(tables, 1);

  let mut stmt = s.conn.prepare("PRAGMA table_info(lifeforms)").unwrap();
  let columns: Vec<String> = stmt
    .query_map([], |r| r.get(1))
    .unwrap()
    .collect::<rusqlite::Result<_>>()
    .unwrap();
  assert_eq!(
    columns,
    [
      "id",
      "life_form",
      "main_shot",
      "option_shot",
      "clone_eyes",
      "sp_weapon",
      "rating",
      "notes",
    ]
  );

  // Existing rows survive re-bootstrapping.
  assert_eq!(s.count().unwrap(), 1);
}

#[test]
fn reopen_file_keeps_rows() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("lifeforms.db");

  let first = SqliteStore::open(&path).unwrap();
  let added = first.add(lifeform("Hoppy", "S")).unwrap();
  first.close().unwrap();

  let second = SqliteStore::open(&path).unwrap();
  let all = second.list_all().unwrap();
  assert_eq!(all, vec![added]);
}

#[test]
fn open_unreachable_path_is_fatal() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("no").join("such").join("dir").join("x.db");

  let err = SqliteStore::open(&path).err().expect("open should fail");
  assert!(err.is_fatal());
}

#[test]
fn statement_errors_are_not_fatal() {
  let s = store();
  s.conn.execute_batch("DROP TABLE lifeforms").unwrap();

  let err = s.add(lifeform("Hoppy", "S")).unwrap_err();
  assert!(matches!(err, Error::Database(_)));
  assert!(!err.is_fatal());

  // Bootstrapping again restores a usable table.
  s.bootstrap().unwrap();
  s.add(lifeform("Hoppy", "S")).unwrap();
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[test]
fn add_assigns_fresh_ids() {
  let s = store();
  let a = s.add(lifeform("Hoppy", "S")).unwrap();
  let b = s.add(lifeform("Hoppy", "S")).unwrap();

  assert_ne!(a.id, b.id);
  // Identical content is allowed.
  assert_eq!(a.fields(), b.fields());
  assert_eq!(s.count().unwrap(), 2);
}

#[test]
fn ids_are_not_reused_after_removal() {
  let s = store();
  let a = s.add(lifeform("Hoppy", "S")).unwrap();
  s.remove_all().unwrap();

  let b = s.add(lifeform("Hoppy", "S")).unwrap();
  assert!(b.id > a.id);
}

#[test]
fn values_are_bound_not_interpolated() {
  let s = store();
  let mut input = lifeform("Hoppy'); DROP TABLE lifeforms; --", "S");
  input.notes = "it's \"quoted\"".into();

  let added = s.add(input.clone()).unwrap();
  let all = s.list_all().unwrap();
  assert_eq!(all, vec![added]);
  assert_eq!(all[0].fields(), input);
}

#[test]
fn null_columns_read_as_empty() {
  let s = store();
  s.conn
    .execute("INSERT INTO lifeforms (life_form) VALUES ('Hoppy')", [])
    .unwrap();

  let all = s.list_all().unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].life_form, "Hoppy");
  assert_eq!(all[0].rating, "");
  assert_eq!(all[0].notes, "");

  // A wildcard search agrees with list_all even for NULL columns.
  assert_eq!(s.search(&LifeformFilter::all()).unwrap(), all);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[test]
fn update_rewrites_only_target_row() {
  let s = store();
  let target = s.add(lifeform("Hoppy", "S")).unwrap();
  let other = s.add(lifeform("Mantis", "B")).unwrap();

  let mut changed = target.fields();
  changed.rating = "A".into();
  changed.notes = "regraded".into();

  let affected = s.update(target.id, &changed).unwrap();
  assert_eq!(affected.0, 1);

  let all = s.list_all().unwrap();
  assert_eq!(all, vec![changed.with_id(target.id), other]);
}

#[test]
fn update_missing_id_affects_nothing() {
  let s = store();
  let existing = s.add(lifeform("Hoppy", "S")).unwrap();

  let affected = s.update(RecordId(9999), &lifeform("Mantis", "D")).unwrap();
  assert!(affected.is_zero());
  assert_eq!(s.list_all().unwrap(), vec![existing]);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[test]
fn remove_deletes_exactly_one_row() {
  let s = store();
  let a = s.add(lifeform("Hoppy", "S")).unwrap();
  let b = s.add(lifeform("Hoppy", "S")).unwrap();

  let affected = s.remove(a.id).unwrap();
  assert_eq!(affected.0, 1);
  assert_eq!(ids(&s.list_all().unwrap()), vec![b.id]);
}

#[test]
fn remove_missing_id_affects_nothing() {
  let s = store();
  s.add(lifeform("Hoppy", "S")).unwrap();

  assert!(s.remove(RecordId(42)).unwrap().is_zero());
  assert_eq!(s.count().unwrap(), 1);
}

#[test]
fn remove_all_empties_table() {
  let s = store();
  assert!(s.remove_all().unwrap().is_zero());

  for rating in ["S", "A", "B"] {
    s.add(lifeform("Hoppy", rating)).unwrap();
  }
  assert_eq!(s.remove_all().unwrap().0, 3);
  assert!(s.list_all().unwrap().is_empty());
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[test]
fn search_by_life_form_with_wildcard_rating() {
  let s = store();
  let h1 = s.add(lifeform("Hoppy", "S")).unwrap();
  s.add(lifeform("Mantis", "S")).unwrap();
  let h2 = s.add(lifeform("Hoppy", "C")).unwrap();

  let found = s.search(&filter("Hoppy", "%")).unwrap();
  assert_eq!(ids(&found), vec![h1.id, h2.id]);
  assert!(found.iter().all(|r| r.life_form == "Hoppy"));
}

#[test]
fn search_combines_both_predicates() {
  let s = store();
  s.add(lifeform("Hoppy", "S")).unwrap();
  let target = s.add(lifeform("Hoppy", "A")).unwrap();
  s.add(lifeform("Mantis", "A")).unwrap();

  let found = s.search(&filter("Hoppy", "A")).unwrap();
  assert_eq!(found, vec![target]);
}

#[test]
fn search_with_both_wildcards_returns_everything() {
  let s = store();
  for (life_form, rating) in [("Hoppy", "S"), ("Mantis", "B"), ("Jelly", "D")] {
    s.add(lifeform(life_form, rating)).unwrap();
  }

  let found = s.search(&filter("%", "%")).unwrap();
  assert_eq!(found, s.list_all().unwrap());
  assert_eq!(found.len(), 3);
}

#[test]
fn search_patterns_use_like_wildcards() {
  let s = store();
  let hoppy = s.add(lifeform("Hoppy", "S")).unwrap();
  s.add(lifeform("Mantis", "S")).unwrap();

  assert_eq!(s.search(&filter("H%", "%")).unwrap(), vec![hoppy.clone()]);
  assert_eq!(s.search(&filter("Hop_y", "_")).unwrap(), vec![hoppy]);
  assert!(s.search(&filter("Hop", "%")).unwrap().is_empty());
}

#[test]
fn search_from_selection_sentinels() {
  let s = store();
  s.add(lifeform("Hoppy", "S")).unwrap();
  s.add(lifeform("Mantis", "B")).unwrap();

  let all = s.search(&LifeformFilter::from_selection("All", "Any")).unwrap();
  assert_eq!(all.len(), 2);

  let b_only = s.search(&LifeformFilter::from_selection("All", "B")).unwrap();
  assert_eq!(b_only.len(), 1);
  assert_eq!(b_only[0].life_form, "Mantis");
}

// ─── Scenario ────────────────────────────────────────────────────────────────

#[test]
fn add_update_remove_scenario() {
  let s = store();

  s.add(lifeform("Hoppy", "S")).unwrap();
  let all = s.search(&LifeformFilter::all()).unwrap();
  assert_eq!(all.len(), 1);
  let created = all[0].clone();
  assert_eq!(created.fields(), lifeform("Hoppy", "S"));

  let mut regraded = created.fields();
  regraded.rating = "A".into();
  s.update(created.id, &regraded).unwrap();

  let all = s.search(&LifeformFilter::all()).unwrap();
  assert_eq!(all, vec![regraded.with_id(created.id)]);

  s.remove(created.id).unwrap();
  assert!(s.search(&LifeformFilter::all()).unwrap().is_empty());
}
