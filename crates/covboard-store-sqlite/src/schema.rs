//! SQL for the `covid_stats` table.
//!
//! Unlike an append-only schema, this table is dropped and recreated on every
//! refresh — rows carry no identity between loads, and `id` values restart
//! from 1 after each reset.

/// Drop-and-recreate DDL, executed as one batch by `reset_schema`.
pub const RESET_SCHEMA: &str = "
DROP TABLE IF EXISTS covid_stats;

CREATE TABLE covid_stats (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    date_value        TEXT NOT NULL,    -- ISO 8601 calendar date
    country_code      TEXT NOT NULL,    -- 3-letter ISO code
    confirmed         INTEGER,          -- nullable upstream
    deaths            INTEGER,          -- nullable upstream
    stringency_actual REAL,
    stringency        REAL
);
";

/// Probe used by `read_all` to treat a missing table as an empty result
/// instead of an error.
pub const TABLE_EXISTS: &str =
  "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'covid_stats'";
