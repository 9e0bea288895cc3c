//! SQL schema for the Apogee SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per launch. Rows are only ever fully replaced, never merged,
-- and the sync pipeline never deletes them.
CREATE TABLE IF NOT EXISTS launches (
    launch_id      TEXT PRIMARY KEY,
    flight_number  INTEGER NOT NULL,
    mission_name   TEXT NOT NULL,
    rocket_name    TEXT NOT NULL,
    launch_date    TEXT NOT NULL,  -- ISO 8601 as received; may be unparseable
    launch_success INTEGER,        -- 0 | 1 | NULL (outcome unknown)
    launch_site    TEXT,
    details        TEXT,
    status         TEXT NOT NULL,  -- 'success' | 'failure' | 'upcoming' | 'unknown'
    last_updated   TEXT NOT NULL   -- RFC 3339 UTC; stamped on every upsert
);

-- Secondary lookups for external querying; the upsert path never reads them.
CREATE INDEX IF NOT EXISTS launches_mission_idx ON launches(mission_name);
CREATE INDEX IF NOT EXISTS launches_rocket_idx  ON launches(rocket_name);
CREATE INDEX IF NOT EXISTS launches_date_idx    ON launches(launch_date);
CREATE INDEX IF NOT EXISTS launches_status_idx  ON launches(status);

PRAGMA user_version = 1;
";
