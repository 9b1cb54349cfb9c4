//! SQL schema for the Floodwatch SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- The table is strictly append-only.
-- No UPDATE or DELETE is ever issued against it.
CREATE TABLE IF NOT EXISTS health_data (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    village  TEXT    NOT NULL,
    diarrhea INTEGER NOT NULL,
    fever    INTEGER NOT NULL,
    rainfall TEXT    NOT NULL,   -- 'High' | 'Medium' | 'Low' | 'None'
    risk     TEXT    NOT NULL,   -- 'High Risk' | 'Medium Risk' | 'Safe'
    date     TEXT    NOT NULL    -- YYYY-MM-DD; server-assigned
);

PRAGMA user_version = 1;
";
