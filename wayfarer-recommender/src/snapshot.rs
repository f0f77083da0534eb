//! The immutable in-memory catalogue and the features derived from it.

use wayfarer_core::{Destination, DestinationStore};

use crate::{MinMaxScaler, SnapshotError, SparseVector, TfidfVectorizer, cosine_similarity};

/// Width of a trait vector.
pub const TRAIT_DIMENSIONS: usize = 5;

/// A scaled trait vector.
pub type TraitVector = [f64; TRAIT_DIMENSIONS];

/// Every destination plus its text and trait features.
///
/// Built once from a full catalogue and never mutated; reloading means
/// building a new snapshot. Index `i` refers to the same record in every
/// accessor.
#[derive(Debug, Clone)]
pub struct Snapshot {
    destinations: Vec<Destination>,
    search_fields: Vec<Vec<String>>,
    vectorizer: TfidfVectorizer,
    text_vectors: Vec<SparseVector>,
    scaler: MinMaxScaler<TRAIT_DIMENSIONS>,
    trait_vectors: Vec<TraitVector>,
    unit_trait_vectors: Vec<TraitVector>,
}

impl Snapshot {
    /// Derive features for `destinations`, keeping their order.
    ///
    /// # Errors
    /// Returns [`SnapshotError::EmptyCatalog`] when `destinations` is empty.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::Destination;
    /// use wayfarer_recommender::Snapshot;
    ///
    /// let snapshot = Snapshot::build(vec![
    ///     Destination::new(1, "Goa").with_description("Sunny beaches"),
    ///     Destination::new(2, "Manali").with_description("Snowy peaks"),
    /// ])
    /// .expect("catalogue is not empty");
    /// assert_eq!(snapshot.len(), 2);
    /// ```
    pub fn build(destinations: Vec<Destination>) -> Result<Self, SnapshotError> {
        let raw_traits: Vec<TraitVector> = destinations
            .iter()
            .map(|destination| destination.traits.as_vector())
            .collect();
        let scaler = MinMaxScaler::fit(&raw_traits).ok_or(SnapshotError::EmptyCatalog)?;
        let trait_vectors: Vec<TraitVector> =
            raw_traits.iter().map(|row| scaler.transform(row)).collect();
        let unit_trait_vectors = trait_vectors.iter().map(unit_vector).collect();

        let documents: Vec<String> = destinations.iter().map(Destination::text_blob).collect();
        let vectorizer = TfidfVectorizer::fit(&documents);
        let text_vectors = documents
            .iter()
            .map(|document| vectorizer.transform(document))
            .collect();

        let search_fields = destinations
            .iter()
            .map(|destination| {
                destination
                    .location_fields()
                    .map(str::to_lowercase)
                    .collect()
            })
            .collect();

        log::info!(
            "built snapshot of {} destinations with {} terms",
            destinations.len(),
            vectorizer.vocabulary_len()
        );

        Ok(Self {
            destinations,
            search_fields,
            vectorizer,
            text_vectors,
            scaler,
            trait_vectors,
            unit_trait_vectors,
        })
    }

    /// Load every destination from `store` and build a snapshot.
    ///
    /// # Errors
    /// Returns [`SnapshotError::EmptyCatalog`] when the store is empty.
    pub fn from_store<S>(store: &S) -> Result<Self, SnapshotError>
    where
        S: DestinationStore + ?Sized,
    {
        Self::build(store.destinations().collect())
    }

    /// Number of destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Report whether the snapshot holds no destinations.
    ///
    /// [`Snapshot::build`] rejects empty catalogues, so a built snapshot
    /// returns `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// All destinations in snapshot order.
    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Destination at `index`.
    #[must_use]
    pub fn destination(&self, index: usize) -> Option<&Destination> {
        self.destinations.get(index)
    }

    /// The fitted text vectoriser.
    #[must_use]
    pub const fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// The fitted trait scaler.
    #[must_use]
    pub const fn scaler(&self) -> &MinMaxScaler<TRAIT_DIMENSIONS> {
        &self.scaler
    }

    /// Scaled trait vectors in snapshot order.
    #[must_use]
    pub fn trait_vectors(&self) -> &[TraitVector] {
        &self.trait_vectors
    }

    /// Indices of destinations whose name, city, state or country contains
    /// `query`, ignoring case and surrounding whitespace.
    ///
    /// The query is matched literally. A blank query matches nothing.
    #[must_use]
    pub fn find_all_destination_matches(&self, query: &str) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.search_fields
            .iter()
            .enumerate()
            .filter(|(_, fields)| fields.iter().any(|field| field.contains(&needle)))
            .map(|(index, _)| index)
            .collect()
    }

    /// Text similarity of destination `index` against every destination.
    ///
    /// Returns an empty row when `index` is out of range.
    #[must_use]
    pub fn text_similarity_row(&self, index: usize) -> Vec<f64> {
        self.text_vectors.get(index).map_or_else(Vec::new, |source| {
            self.text_vectors
                .iter()
                .map(|other| source.dot(other))
                .collect()
        })
    }

    /// Trait similarity of destination `index` against every destination.
    ///
    /// Returns an empty row when `index` is out of range.
    #[must_use]
    pub fn trait_similarity_row(&self, index: usize) -> Vec<f64> {
        self.trait_vectors
            .get(index)
            .map_or_else(Vec::new, |source| self.trait_similarity_to(source))
    }

    /// Mean text similarity of every destination to the destinations at
    /// `indices`.
    ///
    /// Equal to averaging [`Snapshot::text_similarity_row`] over `indices`,
    /// computed in one pass against the matches' centroid. Out-of-range
    /// indices are skipped; no valid index yields a row of zeros.
    #[must_use]
    pub fn mean_text_similarity(&self, indices: &[usize]) -> Vec<f64> {
        let centroid =
            SparseVector::centroid(indices.iter().filter_map(|&i| self.text_vectors.get(i)));
        self.text_vectors
            .iter()
            .map(|other| centroid.dot(other))
            .collect()
    }

    /// Mean trait similarity of every destination to the destinations at
    /// `indices`.
    ///
    /// Cosine similarity is the dot product of unit vectors, so the mean of
    /// the rows is the dot product with the mean unit vector. Out-of-range
    /// indices are skipped; no valid index yields a row of zeros.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "averaging unit vectors over a match count far below f64 limits"
    )]
    pub fn mean_trait_similarity(&self, indices: &[usize]) -> Vec<f64> {
        let mut centroid = [0.0; TRAIT_DIMENSIONS];
        let mut count = 0_usize;
        for unit in indices
            .iter()
            .filter_map(|&i| self.unit_trait_vectors.get(i))
        {
            count += 1;
            for (sum, value) in centroid.iter_mut().zip(unit) {
                *sum += value;
            }
        }
        if count > 0 {
            let count = count as f64;
            for sum in &mut centroid {
                *sum /= count;
            }
        }
        self.unit_trait_vectors
            .iter()
            .map(|other| dot(&centroid, other))
            .collect()
    }

    /// Cosine similarity of an already scaled trait vector against every
    /// destination.
    #[must_use]
    pub fn trait_similarity_to(&self, vector: &TraitVector) -> Vec<f64> {
        self.trait_vectors
            .iter()
            .map(|other| cosine_similarity(vector, other))
            .collect()
    }
}

#[expect(clippy::float_arithmetic, reason = "dense dot product")]
fn dot(left: &TraitVector, right: &TraitVector) -> f64 {
    left.iter().zip(right).map(|(l, r)| l * r).sum()
}

/// `vector` scaled to unit length; a zero vector stays zero.
#[expect(clippy::float_arithmetic, reason = "L2 normalisation")]
fn unit_vector(vector: &TraitVector) -> TraitVector {
    let norm = dot(vector, vector).sqrt();
    let mut unit = *vector;
    if norm != 0.0 {
        for value in &mut unit {
            *value /= norm;
        }
    }
    unit
}
