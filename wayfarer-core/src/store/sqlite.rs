//! SQLite-backed store implementation for the persisted catalogue.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags, Row};
use thiserror::Error;

use crate::{Destination, Trait, TraitScores};

use super::DestinationStore;

/// Schema of the `destinations` table the store reads from.
pub(crate) const DESTINATIONS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS destinations (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    city TEXT,
    state TEXT,
    country TEXT,
    type TEXT,
    tags TEXT NOT NULL DEFAULT '[]',
    rating REAL,
    reviews INTEGER,
    adventure INTEGER,
    relax INTEGER,
    nature INTEGER,
    culture INTEGER,
    luxury INTEGER,
    description TEXT
)";

const SELECT_DESTINATIONS: &str = "SELECT id, name, city, state, country, type, tags, rating,
        reviews, adventure, relax, nature, culture, luxury, description
     FROM destinations
     ORDER BY id";

/// Column offset of the first trait score in [`SELECT_DESTINATIONS`].
const FIRST_TRAIT_COLUMN: usize = 9;

/// Error raised when reading or validating the persisted catalogue.
#[derive(Debug, Error)]
pub enum SqliteDestinationStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A destination identifier could not be represented as `u64`.
    #[error("destination id {id} is outside the supported range")]
    IdOutOfRange {
        /// Identifier read from SQLite.
        id: i64,
    },
    /// The stored tag payload was not a JSON array of strings.
    #[error("failed to parse tags for destination {id}: {source}")]
    InvalidTags {
        /// Identifier of the destination whose tags failed to parse.
        id: u64,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A trait score was negative or too large.
    #[error("destination {id} has out-of-range {name} score {value}")]
    InvalidTrait {
        /// Identifier of the affected destination.
        id: u64,
        /// Trait column name.
        name: &'static str,
        /// Raw value found in the database.
        value: i64,
    },
    /// A review count was negative.
    #[error("destination {id} has negative review count {value}")]
    InvalidReviews {
        /// Identifier of the affected destination.
        id: u64,
        /// Raw value found in the database.
        value: i64,
    },
    /// Generic SQLite error when reading destination rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only catalogue loaded wholesale from a SQLite `destinations` table.
///
/// Rows are read and validated once in [`SqliteDestinationStore::open`]; the
/// store never observes later changes to the database.
pub struct SqliteDestinationStore {
    destinations: Vec<Destination>,
}

impl fmt::Debug for SqliteDestinationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteDestinationStore")
            .field("entries", &self.destinations.len())
            .finish_non_exhaustive()
    }
}

impl SqliteDestinationStore {
    /// Open the database read-only and load every destination.
    ///
    /// # Errors
    /// Returns [`SqliteDestinationStoreError`] when the database cannot be
    /// opened or queried, or when a row carries invalid values.
    pub fn open<P>(database_path: P) -> Result<Self, SqliteDestinationStoreError>
    where
        P: AsRef<Path>,
    {
        let database_path = database_path.as_ref();
        let connection =
            Connection::open_with_flags(database_path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
                |source| SqliteDestinationStoreError::OpenDatabase {
                    path: database_path.to_path_buf(),
                    source,
                },
            )?;

        let destinations = load_destinations(&connection)?;
        log::info!(
            "loaded {} destinations from {}",
            destinations.len(),
            database_path.display()
        );
        Ok(Self { destinations })
    }

    /// Number of loaded destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Report whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl DestinationStore for SqliteDestinationStore {
    fn destinations(&self) -> Box<dyn Iterator<Item = Destination> + Send + '_> {
        Box::new(self.destinations.iter().cloned())
    }
}

fn load_destinations(
    connection: &Connection,
) -> Result<Vec<Destination>, SqliteDestinationStoreError> {
    let mut statement = connection.prepare(SELECT_DESTINATIONS)?;
    let mut rows = statement.query([])?;
    let mut destinations = Vec::new();

    while let Some(row) = rows.next()? {
        destinations.push(read_destination(row)?);
    }

    Ok(destinations)
}

fn read_destination(row: &Row<'_>) -> Result<Destination, SqliteDestinationStoreError> {
    let raw_id: i64 = row.get(0)?;
    let id = u64::try_from(raw_id)
        .map_err(|_| SqliteDestinationStoreError::IdOutOfRange { id: raw_id })?;

    let tags_json: Option<String> = row.get(6)?;
    let tags = match tags_json.as_deref().map(str::trim) {
        None | Some("") => Vec::new(),
        Some(json) => serde_json::from_str(json)
            .map_err(|source| SqliteDestinationStoreError::InvalidTags { id, source })?,
    };

    let reviews = row
        .get::<_, Option<i64>>(8)?
        .map(|value| {
            u64::try_from(value).map_err(|_| SqliteDestinationStoreError::InvalidReviews { id, value })
        })
        .transpose()?;

    Ok(Destination {
        id,
        name: row.get(1)?,
        city: row.get(2)?,
        state: row.get(3)?,
        country: row.get(4)?,
        kind: row.get(5)?,
        tags,
        description: row.get(14)?,
        rating: row.get(7)?,
        reviews,
        traits: read_traits(row, id)?,
    })
}

/// Missing scores default to zero; negative ones are rejected.
fn read_traits(row: &Row<'_>, id: u64) -> Result<TraitScores, SqliteDestinationStoreError> {
    let mut scores = TraitScores::default();
    for kind in Trait::ALL {
        let raw: Option<i64> = row.get(FIRST_TRAIT_COLUMN + kind.position())?;
        let value = raw.unwrap_or(0);
        let score = u32::try_from(value).map_err(|_| SqliteDestinationStoreError::InvalidTrait {
            id,
            name: kind.as_str(),
            value,
        })?;
        scores.set(kind, score);
    }
    Ok(scores)
}
