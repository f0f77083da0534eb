//! Data access traits for the destination catalogue.
//!
//! The `DestinationStore` trait defines a read-only interface for retrieving
//! every [`Destination`] the recommender should load into its snapshot.

use crate::Destination;

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub(crate) use sqlite::DESTINATIONS_SCHEMA;
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteDestinationStore, SqliteDestinationStoreError};

/// Read-only access to persisted destinations.
///
/// Implementations yield the whole catalogue in ascending id order so that
/// rankings built on top of it break ties deterministically.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{Destination, DestinationStore};
///
/// struct VecStore(Vec<Destination>);
///
/// impl DestinationStore for VecStore {
///     fn destinations(&self) -> Box<dyn Iterator<Item = Destination> + Send + '_> {
///         Box::new(self.0.iter().cloned())
///     }
/// }
///
/// let store = VecStore(vec![Destination::new(1, "Kyoto")]);
/// assert_eq!(store.destinations().count(), 1);
/// ```
pub trait DestinationStore {
    /// Return every destination, ordered by id.
    fn destinations(&self) -> Box<dyn Iterator<Item = Destination> + Send + '_>;
}
