//! Reflections store gateway: read contracts and SQLite implementation.
//!
//! # Responsibility
//! - Translate read intents into parameterized queries over `reflections`.
//! - Map result rows to [`Reflection`] values and typed outcomes.
//!
//! # Invariants
//! - Each operation opens its own read-only connection and releases it on
//!   every exit path.
//! - No operation ever returns a partial result set; it is the full result,
//!   an empty result, or an error.
//! - Blank language input resolves to `english` before any query runs.

use crate::db::{open_db, DbError};
use crate::model::language::LanguageCode;
use crate::model::reflection::{DateLookup, Reflection};
use crate::model::statistics::StatisticsSummary;
use log::debug;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::{params, Connection, Row};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const REFLECTIONS_TABLE: &str = "reflections";

const REFLECTION_SELECT_SQL: &str = "SELECT
    date,
    language,
    title,
    quote,
    text,
    content
FROM reflections";

/// Columns the gateway consumes; `content` holds the attribution text.
const REQUIRED_COLUMNS: &[&str] = &["date", "language", "title", "quote", "text", "content"];

pub type StoreResult<T> = Result<T, StoreError>;

/// Gateway error for store access and result mapping.
///
/// `NotFound` is deliberately absent: a missing row on an exact lookup is a
/// [`DateLookup`] outcome, not a failure.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Random selection found no rows at all for the requested language.
    NoData { language: LanguageCode },
    /// Month listing was asked for a month outside `1..=12`.
    InvalidMonth(u32),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NoData { language } => {
                write!(f, "no reflections stored for language `{language}`")
            }
            Self::InvalidMonth(month) => {
                write!(f, "month {month} is out of range; expected 1..=12")
            }
            Self::MissingRequiredTable(table) => {
                write!(f, "store is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "store table `{table}` is missing required column `{column}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NoData { .. } => None,
            Self::InvalidMonth(_) => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read contract over the reflections store.
///
/// All operations are synchronous and stateless with respect to one
/// another; retry policy, if any, belongs to the caller.
pub trait ReflectionStore {
    /// Looks up the unique row for an exact date and language.
    fn get_by_date(&self, date: &str, language: &str) -> StoreResult<DateLookup>;

    /// Selects one uniformly random row among the language's rows.
    fn get_random(&self, language: &str) -> StoreResult<Reflection>;

    /// Substring-searches `title`, `quote` and `text`, OR-combined, within
    /// one language; results ascend by date. An empty keyword matches every
    /// row for the language.
    fn search(&self, keyword: &str, language: &str) -> StoreResult<Vec<Reflection>>;

    /// Returns every language variant stored for a date, keyed by code.
    fn get_multilingual(&self, date: &str) -> StoreResult<BTreeMap<LanguageCode, Reflection>>;

    /// Counts all rows, total and grouped by language.
    fn get_statistics(&self) -> StoreResult<StatisticsSummary>;

    /// Lists a language's rows for one calendar month (`1..=12`), ascending
    /// by date.
    fn get_by_month(&self, month: u32, language: &str) -> StoreResult<Vec<Reflection>>;
}

/// SQLite-backed reflections store.
///
/// Holds the store path and an owned RNG for random selection; every query
/// opens and releases its own connection.
pub struct SqliteReflectionStore {
    db_path: PathBuf,
    rng: Mutex<StdRng>,
}

impl SqliteReflectionStore {
    /// Opens a store at `path`, verifying the consumed schema up front.
    ///
    /// The probe connection is released before returning; subsequent
    /// operations each open their own.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::open_with_rng(path, StdRng::from_os_rng())
    }

    /// Opens a store with a deterministic RNG seed.
    ///
    /// Random selection then draws a reproducible offset sequence, which
    /// keeps `get_random` testable against a fixed fixture.
    pub fn open_seeded(path: impl AsRef<Path>, seed: u64) -> StoreResult<Self> {
        Self::open_with_rng(path, StdRng::seed_from_u64(seed))
    }

    fn open_with_rng(path: impl AsRef<Path>, rng: StdRng) -> StoreResult<Self> {
        let db_path = path.as_ref().to_path_buf();
        let conn = open_db(&db_path)?;
        validate_schema(&conn)?;
        drop(conn);

        Ok(Self {
            db_path,
            rng: Mutex::new(rng),
        })
    }

    fn connect(&self) -> StoreResult<Connection> {
        Ok(open_db(&self.db_path)?)
    }
}

impl ReflectionStore for SqliteReflectionStore {
    fn get_by_date(&self, date: &str, language: &str) -> StoreResult<DateLookup> {
        let language = LanguageCode::resolve(language);
        debug!("event=get_by_date module=repo date={date} language={language}");

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "{REFLECTION_SELECT_SQL}
             WHERE date = ?1 AND language = ?2;"
        ))?;

        let mut rows = stmt.query(params![date, language.as_str()])?;
        match rows.next()? {
            Some(row) => Ok(DateLookup::Found(parse_reflection_row(row)?)),
            None => Ok(DateLookup::NotFound),
        }
    }

    fn get_random(&self, language: &str) -> StoreResult<Reflection> {
        let language = LanguageCode::resolve(language);
        debug!("event=get_random module=repo language={language}");

        let conn = self.connect()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM reflections WHERE language = ?1;",
            [language.as_str()],
            |row| row.get(0),
        )?;
        if count == 0 {
            return Err(StoreError::NoData { language });
        }

        // Offset selection over a deterministic order keeps randomness in
        // the injectable RNG instead of the store engine.
        let offset = self.rng.lock().random_range(0..count);
        let mut stmt = conn.prepare(&format!(
            "{REFLECTION_SELECT_SQL}
             WHERE language = ?1
             ORDER BY date ASC
             LIMIT 1 OFFSET ?2;"
        ))?;

        let mut rows = stmt.query(params![language.as_str(), offset])?;
        match rows.next()? {
            Some(row) => parse_reflection_row(row),
            // The row count changed between the two queries.
            None => Err(StoreError::NoData { language }),
        }
    }

    fn search(&self, keyword: &str, language: &str) -> StoreResult<Vec<Reflection>> {
        let language = LanguageCode::resolve(language);
        debug!(
            "event=search module=repo language={language} keyword_len={}",
            keyword.len()
        );

        let pattern = format!("%{keyword}%");
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "{REFLECTION_SELECT_SQL}
             WHERE language = ?1
               AND (title LIKE ?2 OR quote LIKE ?2 OR text LIKE ?2)
             ORDER BY date ASC;"
        ))?;

        let mut rows = stmt.query(params![language.as_str(), pattern])?;
        let mut reflections = Vec::new();
        while let Some(row) = rows.next()? {
            reflections.push(parse_reflection_row(row)?);
        }

        Ok(reflections)
    }

    fn get_multilingual(&self, date: &str) -> StoreResult<BTreeMap<LanguageCode, Reflection>> {
        debug!("event=get_multilingual module=repo date={date}");

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "{REFLECTION_SELECT_SQL}
             WHERE date = ?1
             ORDER BY language ASC;"
        ))?;

        let mut rows = stmt.query([date])?;
        let mut variants = BTreeMap::new();
        while let Some(row) = rows.next()? {
            let reflection = parse_reflection_row(row)?;
            variants.insert(reflection.language.clone(), reflection);
        }

        Ok(variants)
    }

    fn get_statistics(&self) -> StoreResult<StatisticsSummary> {
        debug!("event=get_statistics module=repo");

        let conn = self.connect()?;
        let total_count: u64 =
            conn.query_row("SELECT COUNT(*) FROM reflections;", [], |row| row.get(0))?;

        let mut stmt = conn.prepare(
            "SELECT language, COUNT(*)
             FROM reflections
             GROUP BY language
             ORDER BY language ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut by_language = BTreeMap::new();
        while let Some(row) = rows.next()? {
            let language: String = row.get(0)?;
            let count: u64 = row.get(1)?;
            by_language.insert(LanguageCode::new(language), count);
        }

        Ok(StatisticsSummary {
            total_count,
            by_language,
        })
    }

    fn get_by_month(&self, month: u32, language: &str) -> StoreResult<Vec<Reflection>> {
        if !(1..=12).contains(&month) {
            return Err(StoreError::InvalidMonth(month));
        }

        let language = LanguageCode::resolve(language);
        debug!("event=get_by_month module=repo month={month} language={language}");

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "{REFLECTION_SELECT_SQL}
             WHERE language = ?1 AND strftime('%m', date) = ?2
             ORDER BY date ASC;"
        ))?;

        let mut rows = stmt.query(params![language.as_str(), format!("{month:02}")])?;
        let mut reflections = Vec::new();
        while let Some(row) = rows.next()? {
            reflections.push(parse_reflection_row(row)?);
        }

        Ok(reflections)
    }
}

fn parse_reflection_row(row: &Row<'_>) -> StoreResult<Reflection> {
    let language: String = row.get("language")?;

    Ok(Reflection {
        date: row.get("date")?,
        language: LanguageCode::new(language),
        title: row.get("title")?,
        quote: row.get("quote")?,
        text: row.get("text")?,
        reference: row.get("content")?,
    })
}

fn validate_schema(conn: &Connection) -> StoreResult<()> {
    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
        [REFLECTIONS_TABLE],
        |row| row.get(0),
    )?;
    if table_count == 0 {
        return Err(StoreError::MissingRequiredTable(REFLECTIONS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let mut rows = stmt.query([REFLECTIONS_TABLE])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(StoreError::MissingRequiredColumn {
                table: REFLECTIONS_TABLE,
                column,
            });
        }
    }

    Ok(())
}
