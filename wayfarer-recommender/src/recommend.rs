//! Ranking entry points over a [`Snapshot`].
//!
//! Query-driven recommenders resolve the query to every destination whose
//! location fields contain it and score every destination by its mean
//! similarity to those matches, in a single pass against the matches'
//! centroid. The matched destinations themselves are left out of
//! the ranking. Ties keep snapshot order.

use wayfarer_core::Destination;

use crate::{RecommendError, Snapshot, VibeRequest};

/// Number of results returned when the caller does not ask for a count.
pub const DEFAULT_TOP_N: usize = 5;

/// Weight given to text similarity by the hybrid recommender by default.
pub const DEFAULT_ALPHA: f64 = 0.7;

/// Maximum number of labels returned by [`Snapshot::suggest`].
pub const SUGGESTION_LIMIT: usize = 10;

/// A ranked destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation<'a> {
    /// Position of the destination in the snapshot.
    pub index: usize,
    /// Aggregated similarity score.
    pub score: f64,
    /// The destination itself.
    pub destination: &'a Destination,
}

impl Snapshot {
    /// Rank destinations by mean TF-IDF similarity to the query's matches.
    ///
    /// # Errors
    /// [`RecommendError::EmptyQuery`] for a blank query and
    /// [`RecommendError::NoMatches`] when nothing matches it.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::Destination;
    /// use wayfarer_recommender::Snapshot;
    ///
    /// let snapshot = Snapshot::build(vec![
    ///     Destination::new(1, "Calangute").with_description("busy beach shacks"),
    ///     Destination::new(2, "Spiti").with_description("cold desert valley"),
    ///     Destination::new(3, "Palolem").with_description("quiet beach huts"),
    /// ])
    /// .expect("catalogue is not empty");
    /// let ranked = snapshot.recommend_by_query("calangute", 1).expect("query matches");
    /// assert_eq!(ranked[0].destination.name, "Palolem");
    /// ```
    pub fn recommend_by_query(
        &self,
        query: &str,
        top_n: usize,
    ) -> Result<Vec<Recommendation<'_>>, RecommendError> {
        let matches = self.resolve(query)?;
        let scores = self.mean_text_similarity(&matches);
        Ok(self.rank(scores, &matches, top_n))
    }

    /// Rank destinations by mean trait similarity to the query's matches.
    ///
    /// # Errors
    /// As for [`Snapshot::recommend_by_query`].
    pub fn recommend_by_traits(
        &self,
        query: &str,
        top_n: usize,
    ) -> Result<Vec<Recommendation<'_>>, RecommendError> {
        let matches = self.resolve(query)?;
        let scores = self.mean_trait_similarity(&matches);
        Ok(self.rank(scores, &matches, top_n))
    }

    /// Rank destinations by `alpha * text + (1 - alpha) * traits`.
    ///
    /// `alpha = 1.0` reproduces [`Snapshot::recommend_by_query`] and
    /// `alpha = 0.0` reproduces [`Snapshot::recommend_by_traits`].
    ///
    /// # Errors
    /// [`RecommendError::InvalidAlpha`] unless `alpha` is finite and within
    /// `[0, 1]`; otherwise as for [`Snapshot::recommend_by_query`].
    #[expect(clippy::float_arithmetic, reason = "weighted blend of similarity rows")]
    pub fn recommend_hybrid(
        &self,
        query: &str,
        top_n: usize,
        alpha: f64,
    ) -> Result<Vec<Recommendation<'_>>, RecommendError> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(RecommendError::InvalidAlpha { alpha });
        }
        let matches = self.resolve(query)?;
        let text = self.mean_text_similarity(&matches);
        let traits = self.mean_trait_similarity(&matches);
        let blended = text
            .iter()
            .zip(&traits)
            .map(|(t, r)| alpha * t + (1.0 - alpha) * r)
            .collect();
        Ok(self.rank(blended, &matches, top_n))
    }

    /// Rank every destination by trait similarity to explicit preferences.
    ///
    /// The preferences are scaled with the snapshot's fitted scaler before
    /// comparison. Nothing is excluded.
    ///
    /// # Errors
    /// Propagates [`VibeRequest::validate`] failures before any similarity
    /// is computed.
    pub fn recommend_by_vibe(
        &self,
        vibe: &VibeRequest,
        top_n: usize,
    ) -> Result<Vec<Recommendation<'_>>, RecommendError> {
        let raw = vibe.validate()?;
        let scaled = self.scaler().transform(&raw);
        let scores = self.trait_similarity_to(&scaled);
        Ok(self.rank(scores, &[], top_n))
    }

    /// Up to [`SUGGESTION_LIMIT`] distinct location labels for destinations
    /// whose name or city contains `q`, ignoring case.
    ///
    /// A blank `q` yields no suggestions.
    #[must_use]
    pub fn suggest(&self, q: &str) -> Vec<String> {
        let needle = q.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut labels: Vec<String> = Vec::new();
        let candidates = self.destinations().iter().filter(|destination| {
            destination.name.to_lowercase().contains(&needle)
                || destination
                    .city
                    .as_deref()
                    .is_some_and(|city| city.to_lowercase().contains(&needle))
        });
        for destination in candidates {
            let label = destination.label();
            if !labels.contains(&label) {
                labels.push(label);
            }
            if labels.len() == SUGGESTION_LIMIT {
                break;
            }
        }
        labels
    }

    fn resolve(&self, query: &str) -> Result<Vec<usize>, RecommendError> {
        if query.trim().is_empty() {
            return Err(RecommendError::EmptyQuery);
        }
        let matches = self.find_all_destination_matches(query);
        log::debug!("query '{query}' matched {} destinations", matches.len());
        if matches.is_empty() {
            return Err(RecommendError::NoMatches {
                query: query.to_owned(),
            });
        }
        Ok(matches)
    }

    fn rank(
        &self,
        scores: Vec<f64>,
        excluded: &[usize],
        top_n: usize,
    ) -> Vec<Recommendation<'_>> {
        let mut ranked: Vec<(usize, f64)> = scores
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !excluded.contains(index))
            .collect();
        ranked.sort_by(|(_, left), (_, right)| right.total_cmp(left));
        ranked
            .into_iter()
            .take(top_n)
            .filter_map(|(index, score)| {
                self.destination(index).map(|destination| Recommendation {
                    index,
                    score,
                    destination,
                })
            })
            .collect()
    }
}
