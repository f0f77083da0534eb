//! Pluggable string-similarity strategies for matching place names.
//!
//! Catalogue sources spell the same place in slightly different ways. A
//! [`StringSimilarity`] scores two names on a `0..=100` scale and
//! [`find_best_match`] uses it to pair a [`LocationKey`] with an existing
//! record.

use crate::Destination;

/// Minimum score, exclusive, for a fuzzy match to be accepted by default.
pub const DEFAULT_MATCH_THRESHOLD: u8 = 90;

/// Scores how alike two strings are, from `0` (unrelated) to `100` (equal).
pub trait StringSimilarity {
    /// Compare `left` with `right`.
    fn score(&self, left: &str, right: &str) -> u8;
}

/// Normalised Levenshtein similarity over alphabetically sorted tokens.
///
/// Both inputs are lowercased, stripped of punctuation and split on
/// whitespace; the tokens are sorted and rejoined before comparison, so word
/// order does not matter.
///
/// # Examples
/// ```
/// use wayfarer_core::{StringSimilarity, TokenSortRatio};
///
/// assert_eq!(TokenSortRatio.score("Fort Red", "red fort"), 100);
/// assert!(TokenSortRatio.score("Red Fort", "Blue Lagoon") < 50);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenSortRatio;

impl TokenSortRatio {
    fn sorted_tokens(value: &str) -> String {
        let cleaned: String = value
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .to_lowercase();
        let mut tokens: Vec<_> = cleaned.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.join(" ")
    }
}

impl StringSimilarity for TokenSortRatio {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "similarity is a ratio in [0, 1] scaled to a percentage"
    )]
    fn score(&self, left: &str, right: &str) -> u8 {
        let left = Self::sorted_tokens(left);
        let right = Self::sorted_tokens(right);
        if left.is_empty() || right.is_empty() {
            return 0;
        }
        let ratio = strsim::normalized_levenshtein(&left, &right);
        (ratio * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Case-insensitive equality after trimming.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactMatch;

impl StringSimilarity for ExactMatch {
    fn score(&self, left: &str, right: &str) -> u8 {
        if left.trim().to_lowercase() == right.trim().to_lowercase() {
            100
        } else {
            0
        }
    }
}

/// Normalised `(name, city, state, country)` identity of a place.
///
/// Every part is trimmed and lowercased; absent parts become empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LocationKey {
    /// Place name.
    pub name: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Country.
    pub country: String,
}

fn normalise(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

impl LocationKey {
    /// Build a normalised key from raw parts.
    #[must_use]
    pub fn new(name: &str, city: Option<&str>, state: Option<&str>, country: Option<&str>) -> Self {
        Self {
            name: normalise(Some(name)),
            city: normalise(city),
            state: normalise(state),
            country: normalise(country),
        }
    }
}

impl From<&Destination> for LocationKey {
    fn from(destination: &Destination) -> Self {
        Self::new(
            &destination.name,
            destination.city.as_deref(),
            destination.state.as_deref(),
            destination.country.as_deref(),
        )
    }
}

/// Locate the candidate that best identifies the same place as `key`.
///
/// An exact key match wins outright. Otherwise the first candidate in the
/// same country whose name scores strictly above `threshold` is returned.
///
/// # Examples
/// ```
/// use wayfarer_core::{DEFAULT_MATCH_THRESHOLD, LocationKey, TokenSortRatio, find_best_match};
///
/// let candidates = [
///     LocationKey::new("Gateway of India", Some("Mumbai"), None, Some("India")),
///     LocationKey::new("India Gate", Some("Delhi"), None, Some("India")),
/// ];
/// let key = LocationKey::new("Gate India", None, None, Some("India"));
/// let found = find_best_match(&TokenSortRatio, &key, &candidates, DEFAULT_MATCH_THRESHOLD);
/// assert_eq!(found, Some(1));
/// ```
#[must_use]
pub fn find_best_match<S>(
    strategy: &S,
    key: &LocationKey,
    candidates: &[LocationKey],
    threshold: u8,
) -> Option<usize>
where
    S: StringSimilarity + ?Sized,
{
    if let Some(index) = candidates.iter().position(|candidate| candidate == key) {
        return Some(index);
    }
    candidates.iter().position(|candidate| {
        candidate.country == key.country && strategy.score(&candidate.name, &key.name) > threshold
    })
}
