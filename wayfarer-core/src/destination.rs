//! The destination record loaded from the catalogue.

use serde::{Deserialize, Serialize};

use crate::TraitScores;

/// A place in the travel catalogue.
///
/// Location fields are free text and not globally unique. Serialisation
/// flattens the trait scores so each trait renders as its own column, and
/// renames [`Destination::kind`] to `type`.
///
/// # Examples
/// ```
/// use wayfarer_core::{Destination, TraitScores};
///
/// let destination = Destination::new(1, "Goa Beach")
///     .with_country("India")
///     .with_description("Golden sand and quiet coves")
///     .with_tags(["beach", "relax"])
///     .with_traits(TraitScores::from_array([1, 5, 2, 1, 2]));
///
/// assert_eq!(destination.text_blob(), "golden sand and quiet coves beach relax");
/// assert_eq!(destination.label(), "Goa Beach, India");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Surrogate identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// City the place belongs to.
    pub city: Option<String>,
    /// State, province or region.
    pub state: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// Category string.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Free-text labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Long-form description.
    pub description: Option<String>,
    /// Average rating, when known.
    pub rating: Option<f64>,
    /// Review count, when known.
    pub reviews: Option<u64>,
    /// Trait intensity scores.
    #[serde(flatten)]
    pub traits: TraitScores,
}

impl Destination {
    /// Construct a destination with only an id and a name.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city: None,
            state: None,
            country: None,
            kind: None,
            tags: Vec::new(),
            description: None,
            rating: None,
            reviews: None,
            traits: TraitScores::default(),
        }
    }

    /// Set the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the state.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Set the country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the category.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the trait scores.
    #[must_use]
    pub const fn with_traits(mut self, traits: TraitScores) -> Self {
        self.traits = traits;
        self
    }

    /// Lowercase description followed by the space-joined tags.
    ///
    /// This is the document the text vectoriser sees for the record.
    #[must_use]
    pub fn text_blob(&self) -> String {
        let description = self.description.as_deref().unwrap_or_default();
        format!("{description} {}", self.tags.join(" ")).to_lowercase()
    }

    /// Name, city, state and country in that order.
    pub fn location_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(
            [&self.city, &self.state, &self.country]
                .into_iter()
                .filter_map(|field| field.as_deref()),
        )
    }

    /// Comma-separated location label, skipping absent or empty parts.
    #[must_use]
    pub fn label(&self) -> String {
        self.location_fields()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
