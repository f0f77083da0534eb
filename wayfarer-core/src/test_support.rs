//! Test-only helpers: an in-memory `DestinationStore` and a SQLite fixture
//! writer used by unit and behaviour tests.

use crate::{Destination, DestinationStore};

/// In-memory `DestinationStore` implementation used in tests.
///
/// Records are kept sorted by id to honour the store ordering contract.
#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    destinations: Vec<Destination>,
}

impl MemoryStore {
    /// Create a store containing a single destination.
    #[must_use]
    pub fn with_destination(destination: Destination) -> Self {
        Self::with_destinations(std::iter::once(destination))
    }

    /// Create a store from a collection of destinations.
    #[must_use]
    pub fn with_destinations<I>(destinations: I) -> Self
    where
        I: IntoIterator<Item = Destination>,
    {
        let mut destinations: Vec<_> = destinations.into_iter().collect();
        destinations.sort_by_key(|destination| destination.id);
        Self { destinations }
    }
}

impl DestinationStore for MemoryStore {
    fn destinations(&self) -> Box<dyn Iterator<Item = Destination> + Send + '_> {
        Box::new(self.destinations.iter().cloned())
    }
}

/// Persist `destinations` into a fresh `destinations` table at `path`.
///
/// Tags are written as a JSON array, matching what the SQLite store reads.
///
/// # Errors
/// Returns any SQLite failure raised while creating or filling the table.
#[cfg(feature = "store-sqlite")]
pub fn write_sqlite_database(
    path: &std::path::Path,
    destinations: &[Destination],
) -> rusqlite::Result<()> {
    use rusqlite::{Connection, params};

    let mut connection = Connection::open(path)?;
    connection.execute(crate::store::DESTINATIONS_SCHEMA, [])?;
    let transaction = connection.transaction()?;
    {
        let mut insert = transaction.prepare(
            "INSERT INTO destinations (id, name, city, state, country, type, tags, rating,
                reviews, adventure, relax, nature, culture, luxury, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        )?;
        for destination in destinations {
            let id = i64::try_from(destination.id)
                .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
            let reviews = destination
                .reviews
                .map(i64::try_from)
                .transpose()
                .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
            let tags = serde_json::to_string(&destination.tags)
                .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
            let traits = &destination.traits;
            insert.execute(params![
                id,
                destination.name,
                destination.city,
                destination.state,
                destination.country,
                destination.kind,
                tags,
                destination.rating,
                reviews,
                traits.adventure,
                traits.relax,
                traits.nature,
                traits.culture,
                traits.luxury,
                destination.description,
            ])?;
        }
    }
    transaction.commit()
}
