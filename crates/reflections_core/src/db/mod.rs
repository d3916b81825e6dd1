//! SQLite connection bootstrap for the reflections store.
//!
//! # Responsibility
//! - Open and configure read-only SQLite connections for reflections core.
//!
//! # Invariants
//! - Returned connections are read-only; core never writes to the store.
//! - A connection is scoped to a single gateway call and released with it.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::open_db;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
