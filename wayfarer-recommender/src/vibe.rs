//! Explicit trait preferences supplied instead of a text query.

use serde::Deserialize;
use wayfarer_core::{Trait, TraitScores};

use crate::{RecommendError, TraitVector};

/// Requested intensity for each trait.
///
/// Every trait must be present and finite before the request can be ranked;
/// see [`VibeRequest::validate`].
///
/// # Examples
/// ```
/// use wayfarer_core::Trait;
/// use wayfarer_recommender::{RecommendError, VibeRequest};
///
/// let partial = VibeRequest::default().with(Trait::Adventure, 4.0);
/// assert!(matches!(
///     partial.validate(),
///     Err(RecommendError::MissingTrait { name: Trait::Relax })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct VibeRequest {
    /// Adventure preference.
    pub adventure: Option<f64>,
    /// Relax preference.
    pub relax: Option<f64>,
    /// Nature preference.
    pub nature: Option<f64>,
    /// Culture preference.
    pub culture: Option<f64>,
    /// Luxury preference.
    pub luxury: Option<f64>,
}

impl VibeRequest {
    /// Set the preference for `kind`.
    #[must_use]
    pub const fn with(mut self, kind: Trait, value: f64) -> Self {
        let slot = match kind {
            Trait::Adventure => &mut self.adventure,
            Trait::Relax => &mut self.relax,
            Trait::Nature => &mut self.nature,
            Trait::Culture => &mut self.culture,
            Trait::Luxury => &mut self.luxury,
        };
        *slot = Some(value);
        self
    }

    /// Preference for `kind`, if supplied.
    #[must_use]
    pub const fn get(&self, kind: Trait) -> Option<f64> {
        match kind {
            Trait::Adventure => self.adventure,
            Trait::Relax => self.relax,
            Trait::Nature => self.nature,
            Trait::Culture => self.culture,
            Trait::Luxury => self.luxury,
        }
    }

    /// Return the raw trait vector once every trait is present and finite.
    ///
    /// # Errors
    /// [`RecommendError::MissingTrait`] names the first absent trait and
    /// [`RecommendError::NonFiniteTrait`] the first NaN or infinite one.
    pub fn validate(&self) -> Result<TraitVector, RecommendError> {
        let mut vector = [0.0; Trait::ALL.len()];
        for (slot, kind) in vector.iter_mut().zip(Trait::ALL) {
            let value = self
                .get(kind)
                .ok_or(RecommendError::MissingTrait { name: kind })?;
            if !value.is_finite() {
                return Err(RecommendError::NonFiniteTrait { name: kind, value });
            }
            *slot = value;
        }
        Ok(vector)
    }
}

impl From<TraitScores> for VibeRequest {
    fn from(scores: TraitScores) -> Self {
        Trait::ALL.into_iter().fold(Self::default(), |request, kind| {
            request.with(kind, f64::from(scores.get(kind)))
        })
    }
}
