//! SQL schema for the lifeform store.
//!
//! Executed on every open. There are no migrations: the table either exists
//! already or is created here.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS lifeforms (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    life_form   TEXT,
    main_shot   TEXT,
    option_shot TEXT,
    clone_eyes  TEXT,
    sp_weapon   TEXT,
    rating      TEXT,
    notes       TEXT
);
";

/// Column list in schema order, shared by every `SELECT`.
pub const COLUMNS: &str =
  "id, life_form, main_shot, option_shot, clone_eyes, sp_weapon, rating, notes";
