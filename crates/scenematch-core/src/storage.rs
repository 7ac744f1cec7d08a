use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::SceneError;
use crate::models::{Episode, Show};
use crate::scene::SeasonCounter;

const SCHEMA_V1: &str = include_str!("../../../migrations/001_initial.sql");

/// Day number stored for an episode whose air date is unknown.
const UNKNOWN_AIRDATE: i32 = 1;

/// SQLite-backed store of shows and their episodes.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open (or create) the database at the given path and run migrations.
    pub fn open(path: &Path) -> Result<Self, SceneError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        run_migrations(&conn)?;
        tracing::debug!(path = %path.display(), "Opened database");
        Ok(Self { conn })
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, SceneError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    // ── Shows ───────────────────────────────────────────────────

    /// Insert a show, or update it if the id is already stored.
    pub fn insert_show(&self, show: &Show) -> Result<(), SceneError> {
        self.conn.execute(
            "INSERT INTO tv_shows (tvdb_id, show_name, regional_name, air_by_date)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(tvdb_id) DO UPDATE SET
                show_name = excluded.show_name,
                regional_name = excluded.regional_name,
                air_by_date = excluded.air_by_date",
            params![show.id, show.name, show.regional_name, show.air_by_date],
        )?;
        Ok(())
    }

    pub fn get_show(&self, id: i64) -> Result<Option<Show>, SceneError> {
        self.conn
            .query_row(
                "SELECT tvdb_id, show_name, regional_name, air_by_date
                 FROM tv_shows WHERE tvdb_id = ?1",
                params![id],
                row_to_show,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Like [`get_show`](Self::get_show), but a missing show is an error.
    pub fn require_show(&self, id: i64) -> Result<Show, SceneError> {
        self.get_show(id)?.ok_or(SceneError::UnknownShow(id))
    }

    /// All stored shows, ordered by name.
    pub fn all_shows(&self) -> Result<Vec<Show>, SceneError> {
        let mut stmt = self.conn.prepare(
            "SELECT tvdb_id, show_name, regional_name, air_by_date
             FROM tv_shows ORDER BY show_name COLLATE NOCASE",
        )?;
        let shows = stmt
            .query_map([], row_to_show)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(shows)
    }

    // ── Episodes ────────────────────────────────────────────────

    /// Insert an episode, or update its air date if already stored.
    ///
    /// The episode's show must already be stored.
    pub fn insert_episode(&self, episode: &Episode) -> Result<(), SceneError> {
        self.require_show(episode.show.id)?;
        let airdate = episode
            .airdate
            .map_or(UNKNOWN_AIRDATE, |d| d.num_days_from_ce());
        self.conn.execute(
            "INSERT INTO tv_episodes (showid, season, episode, airdate)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(showid, season, episode) DO UPDATE SET airdate = excluded.airdate",
            params![episode.show.id, episode.season, episode.episode, airdate],
        )?;
        Ok(())
    }

    pub fn get_episode(
        &self,
        show_id: i64,
        season: u32,
        episode: u32,
    ) -> Result<Option<Episode>, SceneError> {
        let Some(show) = self.get_show(show_id)? else {
            return Ok(None);
        };
        let airdate: Option<Option<i32>> = self
            .conn
            .query_row(
                "SELECT airdate FROM tv_episodes
                 WHERE showid = ?1 AND season = ?2 AND episode = ?3",
                params![show_id, season, episode],
                |row| row.get(0),
            )
            .optional()?;

        Ok(airdate.map(|ordinal| Episode {
            show,
            season,
            episode,
            airdate: ordinal.and_then(ordinal_to_date),
        }))
    }

    /// Number of distinct seasons recorded for a show, not counting specials.
    pub fn season_count(&self, show_id: i64) -> Result<u32, SceneError> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(DISTINCT season) FROM tv_episodes
             WHERE showid = ?1 AND season != 0",
            params![show_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Distinct season numbers recorded for a show, specials included, ascending.
    pub fn seasons(&self, show_id: i64) -> Result<Vec<u32>, SceneError> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT season FROM tv_episodes WHERE showid = ?1 ORDER BY season",
        )?;
        let seasons = stmt
            .query_map(params![show_id], |row| row.get(0))?
            .collect::<Result<Vec<u32>, _>>()?;
        Ok(seasons)
    }
}

impl SeasonCounter for Storage {
    fn season_count(&self, show_id: i64) -> Result<u32, SceneError> {
        Storage::season_count(self, show_id)
    }
}

fn run_migrations(conn: &Connection) -> Result<(), SceneError> {
    let version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap_or(0);

    if version < 1 {
        conn.execute_batch(SCHEMA_V1)?;
        conn.pragma_update(None, "user_version", 1)?;
        tracing::debug!("Applied schema version 1");
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────

fn row_to_show(row: &Row<'_>) -> rusqlite::Result<Show> {
    Ok(Show {
        id: row.get(0)?,
        name: row.get(1)?,
        regional_name: row.get(2)?,
        air_by_date: row.get(3)?,
    })
}

/// Convert a stored day number back into a date. The unknown sentinel and
/// out-of-range values give `None`.
fn ordinal_to_date(ordinal: i32) -> Option<NaiveDate> {
    if ordinal <= UNKNOWN_AIRDATE {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(ordinal)
}
